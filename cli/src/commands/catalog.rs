use std::path::Path;

use opsengine_core::{ErrorReport, SopRepository};
use serde_json::{Value, json};

use crate::util::{EXIT_CATALOG, print_json, report_error};

/// Load and validate a catalog file without triaging anything.
pub fn validate(path: &Path) -> i32 {
    match SopRepository::from_path(path) {
        Ok(repository) => print_json(&validation_summary(path, &repository)),
        Err(err) => report_error(&ErrorReport::from(&err), EXIT_CATALOG),
    }
}

fn validation_summary(path: &Path, repository: &SopRepository) -> Value {
    json!({
        "ok": true,
        "path": path.display().to_string(),
        "sop_count": repository.len(),
        "fingerprint": repository.fingerprint(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use opsengine_core::SopRepository;

    use super::{validate, validation_summary};
    use crate::util::{EXIT_CATALOG, EXIT_OK};

    fn example_catalog() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/sops.example.json")
    }

    #[test]
    fn example_catalog_validates() {
        assert_eq!(validate(&example_catalog()), EXIT_OK);
    }

    #[test]
    fn summary_reports_count_and_fingerprint() {
        let path = example_catalog();
        let repository = SopRepository::from_path(&path).unwrap();
        let summary = validation_summary(&path, &repository);
        assert_eq!(summary["ok"], true);
        assert_eq!(summary["sop_count"], 3);
        assert_eq!(summary["fingerprint"], SopRepository::builtin().fingerprint());
    }

    #[test]
    fn missing_catalog_is_a_catalog_error() {
        assert_eq!(validate(Path::new("/nonexistent/opsengine/sops.json")), EXIT_CATALOG);
    }

    #[test]
    fn malformed_catalog_is_a_catalog_error() {
        let path = std::env::temp_dir()
            .join(format!("opsengine-malformed-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"sops": [{"id": "S1""#).unwrap();
        let code = validate(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(code, EXIT_CATALOG);
    }

    #[test]
    fn invalid_catalog_is_a_catalog_error() {
        let path = std::env::temp_dir()
            .join(format!("opsengine-invalid-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"sops": []}"#).unwrap();
        let code = validate(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(code, EXIT_CATALOG);
    }
}
