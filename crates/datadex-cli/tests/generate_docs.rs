use std::fs;
use std::path::Path;

use tempfile::TempDir;

use datadex_cli::candidates::load_candidates;
use datadex_cli::pipeline::{PipelineOptions, run_pipeline};
use datadex_core::{AggregateOptions, PiiPolicy, RoleCandidates};
use datadex_ingest::load_workbook;

fn options_for(out_dir: &Path) -> PipelineOptions {
    PipelineOptions {
        out_dir: out_dir.to_path_buf(),
        include_dataset_values: false,
        candidates: RoleCandidates::default(),
        pii: PiiPolicy::default(),
        aggregate: AggregateOptions::default(),
    }
}

fn write_dictionary(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("dictionary.csv");
    fs::write(
        &path,
        "Table_Name,Description,Field_Name,Field_Type,Email_Address\n\
         Users,User accts,id,int,a@x.com\n\
         Users,User accts,email,string,a@x.com\n\
         Orders,Order headers,id,int,b@x.com\n",
    )
    .expect("write dictionary");
    path
}

#[test]
fn generates_pages_and_index_without_sensitive_values() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("docs");
    let dictionary = write_dictionary(dir.path());

    let workbook = load_workbook(&dictionary).expect("load workbook");
    let summary = run_pipeline(&workbook, &options_for(&out)).expect("run pipeline");

    assert_eq!(summary.sheets_processed, 1);
    assert_eq!(summary.entities_generated, 2);

    let users = fs::read_to_string(out.join("users.md")).expect("users page");
    assert!(users.contains("# Users"));
    assert!(users.contains("| id | int |"));
    assert!(users.contains("| email | string |"));
    assert!(!users.contains("Email_Address"));
    assert!(!users.contains("a@x.com"));

    let index = fs::read_to_string(out.join("index.md")).expect("index");
    assert!(index.contains("- [Orders](orders.md)"));
    assert!(index.contains("- [Users](users.md)"));
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("docs");
    let dictionary = write_dictionary(dir.path());
    let workbook = load_workbook(&dictionary).expect("load workbook");
    let options = options_for(&out);

    run_pipeline(&workbook, &options).expect("first run");
    let first: Vec<(String, String)> = read_docs(&out);

    run_pipeline(&workbook, &options).expect("second run");
    let second: Vec<(String, String)> = read_docs(&out);

    assert_eq!(first, second);
}

fn read_docs(out: &Path) -> Vec<(String, String)> {
    let mut docs: Vec<(String, String)> = fs::read_dir(out)
        .expect("read output dir")
        .map(|entry| {
            let path = entry.expect("dir entry").path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            let contents = fs::read_to_string(&path).expect("read doc");
            (name, contents)
        })
        .collect();
    docs.sort();
    docs
}

#[test]
fn sheets_without_entity_columns_still_produce_an_index() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("docs");
    let path = dir.path().join("dictionary.csv");
    fs::write(&path, "Created_At,Updated_At\n2024-01-01,2024-01-02\n").expect("write dictionary");

    let workbook = load_workbook(&path).expect("load workbook");
    let summary = run_pipeline(&workbook, &options_for(&out)).expect("run pipeline");

    assert_eq!(summary.sheets_processed, 0);
    assert_eq!(summary.sheets_skipped, 1);
    assert_eq!(summary.entities_generated, 0);

    let index = fs::read_to_string(out.join("index.md")).expect("index");
    assert!(index.contains("_No entities generated."));
    assert_eq!(read_docs(&out).len(), 1);
}

#[test]
fn operator_pii_keywords_extend_redaction() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("docs");
    let path = dir.path().join("dictionary.csv");
    fs::write(
        &path,
        "Table_Name,Field_Name,Field_Type\nUsers,id,int\n",
    )
    .expect("write dictionary");

    let workbook = load_workbook(&path).expect("load workbook");
    let mut options = options_for(&out);
    options.pii = PiiPolicy::from_comma_list("type");
    run_pipeline(&workbook, &options).expect("run pipeline");

    let users = fs::read_to_string(out.join("users.md")).expect("users page");
    assert!(users.contains("| Field |"));
    assert!(!users.contains("| Type |"));
    assert!(!users.contains("int"));
}

#[test]
fn candidates_file_overrides_entity_patterns() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("docs");

    let candidates_path = dir.path().join("candidates.toml");
    fs::write(&candidates_path, "entity = [\"dataset\"]\n").expect("write candidates");

    let path = dir.path().join("dictionary.csv");
    fs::write(&path, "Dataset,Description\nUsers,User accounts\n").expect("write dictionary");

    let workbook = load_workbook(&path).expect("load workbook");
    let mut options = options_for(&out);
    options.candidates = load_candidates(&candidates_path).expect("load candidates");
    let summary = run_pipeline(&workbook, &options).expect("run pipeline");

    assert_eq!(summary.entities_generated, 1);
    let users = fs::read_to_string(out.join("users.md")).expect("users page");
    assert!(users.contains("User accounts"));
}
