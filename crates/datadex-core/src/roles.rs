use serde::{Deserialize, Serialize};

/// Ranked lowercase name patterns for each semantic role a dictionary column
/// may play. Most specific pattern first; the order decides ties.
///
/// The defaults cover the column names seen in real data dictionary
/// workbooks. Deployments can override individual roles from a TOML file;
/// roles left out keep their default list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleCandidates {
    pub entity: Vec<String>,
    pub description: Vec<String>,
    pub domain: Vec<String>,
    pub wrapper: Vec<String>,
    pub pipeline: Vec<String>,
    pub field_name: Vec<String>,
    pub field_type: Vec<String>,
    pub field_description: Vec<String>,
    pub field_nullable: Vec<String>,
    pub field_primary_key: Vec<String>,
}

impl Default for RoleCandidates {
    fn default() -> Self {
        Self {
            entity: patterns(&[
                "entity",
                "entity_name",
                "object",
                "object_name",
                "view",
                "view_name",
                "table",
                "table_name",
                "name",
            ]),
            description: patterns(&["description", "desc", "definition", "purpose", "details"]),
            domain: patterns(&["domain", "subject_area", "area"]),
            wrapper: patterns(&["wrapper", "wrapper_name"]),
            pipeline: patterns(&["pipeline", "pipeline_name"]),
            field_name: patterns(&[
                "field",
                "field_name",
                "column",
                "column_name",
                "attribute",
                "attribute_name",
            ]),
            field_type: patterns(&["type", "data_type", "datatype"]),
            field_description: patterns(&[
                "field_description",
                "column_description",
                "attribute_description",
                "description",
                "desc",
                "definition",
            ]),
            field_nullable: patterns(&["nullable", "is_nullable", "nulls_allowed"]),
            field_primary_key: patterns(&["primary_key", "pk", "is_pk", "key"]),
        }
    }
}

fn patterns(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Columns chosen to fill each semantic role for one sheet.
///
/// Roles are resolved independently, so the same physical column may back
/// two roles when its name matches both candidate lists.
#[derive(Debug, Clone)]
pub struct RoleMap {
    pub entity: String,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub wrapper: Option<String>,
    pub pipeline: Option<String>,
    pub field_name: Option<String>,
    pub field_type: Option<String>,
    pub field_description: Option<String>,
    pub field_nullable: Option<String>,
    pub field_primary_key: Option<String>,
}

/// Pick the real column that best matches a ranked candidate list.
///
/// Exact matches on the normalized name win over substring matches: a
/// column literally named `key` beats one merely containing `key`. Within
/// each pass, candidate order decides before column order.
pub fn resolve_column(columns: &[String], candidates: &[String]) -> Option<String> {
    let normalized: Vec<String> = columns.iter().map(|column| normalize(column)).collect();

    for candidate in candidates {
        if let Some(index) = normalized.iter().position(|column| column == candidate) {
            return Some(columns[index].clone());
        }
    }

    for candidate in candidates {
        if let Some(index) = normalized
            .iter()
            .position(|column| column.contains(candidate.as_str()))
        {
            return Some(columns[index].clone());
        }
    }

    None
}

/// Resolve every role for a sheet, or `None` when no column can serve as
/// the entity identifier (such a sheet carries no usable structure).
pub fn resolve_roles(columns: &[String], candidates: &RoleCandidates) -> Option<RoleMap> {
    let entity = resolve_column(columns, &candidates.entity)?;

    Some(RoleMap {
        entity,
        description: resolve_column(columns, &candidates.description),
        domain: resolve_column(columns, &candidates.domain),
        wrapper: resolve_column(columns, &candidates.wrapper),
        pipeline: resolve_column(columns, &candidates.pipeline),
        field_name: resolve_column(columns, &candidates.field_name),
        field_type: resolve_column(columns, &candidates.field_type),
        field_description: resolve_column(columns, &candidates.field_description),
        field_nullable: resolve_column(columns, &candidates.field_nullable),
        field_primary_key: resolve_column(columns, &candidates.field_primary_key),
    })
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
