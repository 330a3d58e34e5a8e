use std::path::{Path, PathBuf};

use clap::ValueEnum;
use opsengine_core::{CatalogError, DraftGenerator, SopRepository, TriageEngine};

pub const CATALOG_FILE_NAME: &str = "sops.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// `<config_dir>/opsengine/sops.json`, if the platform has a config dir.
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("opsengine").join(CATALOG_FILE_NAME))
}

/// Explicit path first, then the per-user default if that file exists.
pub fn resolve_catalog_path(explicit: Option<&Path>, fallback: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    fallback.filter(|path| path.is_file())
}

pub fn load_repository(explicit: Option<&Path>) -> Result<SopRepository, CatalogError> {
    match resolve_catalog_path(explicit, default_catalog_path()) {
        Some(path) => SopRepository::from_path(&path),
        None => {
            tracing::debug!("no SOP catalog configured, using built-in SOPs");
            Ok(SopRepository::builtin())
        }
    }
}

pub fn build_engine(
    explicit: Option<&Path>,
    company_name: &str,
) -> Result<TriageEngine, CatalogError> {
    let repository = load_repository(explicit)?;
    Ok(TriageEngine::new(repository, DraftGenerator::new(company_name)))
}
