use std::path::Path;

use datadex_core::RoleCandidates;
use thiserror::Error;

/// Errors raised while loading a candidates override file.
#[derive(Debug, Error)]
pub enum CandidatesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidates file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a TOML override of the role candidate lists.
///
/// Roles absent from the file keep their built-in defaults, so a deployment
/// only spells out the roles its dictionary names differently.
pub fn load_candidates(path: &Path) -> Result<RoleCandidates, CandidatesError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
