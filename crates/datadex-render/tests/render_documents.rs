use datadex_core::{EntityRecord, FieldTable};
use datadex_render::{RenderOptions, build_index, render_entity_page, render_index};

fn users_record() -> EntityRecord {
    EntityRecord {
        name: "Users".to_string(),
        description: "User accounts".to_string(),
        domain: "identity".to_string(),
        wrapper: String::new(),
        pipeline: "daily_load".to_string(),
        fields: FieldTable {
            columns: vec!["Field".to_string(), "Type".to_string()],
            rows: vec![
                vec!["id".to_string(), "int".to_string()],
                vec!["email".to_string(), "string".to_string()],
            ],
        },
    }
}

fn bare_record(name: &str) -> EntityRecord {
    EntityRecord {
        name: name.to_string(),
        description: String::new(),
        domain: String::new(),
        wrapper: String::new(),
        pipeline: String::new(),
        fields: FieldTable::default(),
    }
}

#[test]
fn page_renders_fixed_sections_in_order() {
    let page = render_entity_page(&users_record(), &RenderOptions::default());

    let title = page.find("# Users").expect("title");
    let what = page.find("## What it is").expect("description section");
    let fields = page.find("## Fields").expect("fields section");
    let usage = page.find("## How to use it").expect("usage section");
    let gotchas = page.find("## Gotchas").expect("gotchas section");
    assert!(title < what && what < fields && fields < usage && usage < gotchas);

    assert!(page.contains("> Auto-generated from a data dictionary workbook."));
    assert!(page.contains("**Domain:** identity"));
    assert!(page.contains("**Pipeline:** daily_load"));
    assert!(!page.contains("**Wrapper:**"));
    assert!(page.contains("User accounts"));
    assert!(page.contains("| Field | Type |"));
    assert!(page.contains("| --- | --- |"));
    assert!(page.contains("| email | string |"));
    assert!(page.ends_with("reporting here.\n"));
    assert!(!page.ends_with("\n\n"));
}

#[test]
fn bare_record_renders_placeholders_and_omits_metadata() {
    let page = render_entity_page(&bare_record("Ledger"), &RenderOptions::default());

    assert!(page.contains("_No description found in this sheet._"));
    assert!(page.contains("_No field metadata found in this sheet._"));
    assert!(!page.contains("**Domain:**"));
    assert!(!page.contains("**Wrapper:**"));
    assert!(!page.contains("**Pipeline:**"));
}

#[test]
fn dataset_values_flag_never_changes_output() {
    let record = users_record();
    let default = render_entity_page(&record, &RenderOptions::default());
    let opted_in = render_entity_page(
        &record,
        &RenderOptions {
            include_dataset_values: true,
        },
    );
    assert_eq!(default, opted_in);
}

#[test]
fn index_sorts_case_insensitively_and_dedupes() {
    let records = vec![
        bare_record("orders"),
        bare_record("Users"),
        bare_record("orders"),
        bare_record("Accounts Payable"),
    ];
    let entries = build_index(&records);

    let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["Accounts Payable", "orders", "Users"]);
    assert_eq!(entries[0].file, "accounts-payable.md");

    let index = render_index(&entries);
    assert!(index.contains("- [orders](orders.md)"));
    assert!(index.contains("- [Users](users.md)"));
    assert!(index.contains("## Public-safe rule"));
}

#[test]
fn empty_index_renders_explicit_message() {
    let index = render_index(&build_index(&[]));
    assert!(index.contains(
        "_No entities generated. Check that your workbook has an entity/table/view column._"
    ));
    assert!(!index.contains("- ["));
}
