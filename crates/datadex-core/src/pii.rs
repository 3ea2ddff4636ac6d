/// Keyword policy used to drop sensitive-looking columns from rendered
/// output.
///
/// The keyword list is operator-supplied data: deployments extend or replace
/// it per run, so the pipeline never consults a hardcoded list directly.
#[derive(Debug, Clone)]
pub struct PiiPolicy {
    keywords: Vec<String>,
}

impl Default for PiiPolicy {
    fn default() -> Self {
        Self::new(
            [
                "ssn",
                "social",
                "email",
                "phone",
                "address",
                "dob",
                "birth",
                "passport",
                "driver",
                "license",
                "bank",
                "routing",
                "account",
                "salary",
                "wage",
                "security_nbr",
                "security",
                "home_address",
            ]
            .into_iter()
            .map(str::to_string),
        )
    }
}

impl PiiPolicy {
    /// Build a policy from raw keywords; entries are trimmed, lowercased,
    /// and dropped when empty.
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        let keywords = keywords
            .into_iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { keywords }
    }

    /// Parse an operator-supplied comma-separated keyword list.
    pub fn from_comma_list(list: &str) -> Self {
        Self::new(list.split(',').map(str::to_string))
    }

    /// True iff any keyword occurs as a substring of the lowercased name.
    pub fn is_sensitive(&self, column_name: &str) -> bool {
        let name = column_name.to_lowercase();
        self.keywords.iter().any(|keyword| name.contains(keyword))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
