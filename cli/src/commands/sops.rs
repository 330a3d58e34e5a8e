use opsengine_core::TriageEngine;
use serde_json::{Value, json};

use crate::util::print_json;

/// The active catalog plus the settings that shape drafts.
pub fn catalog_listing(engine: &TriageEngine) -> Value {
    let repository = engine.repository();
    json!({
        "fingerprint": repository.fingerprint(),
        "sop_count": repository.len(),
        "company_name": engine.company_name(),
        "sops": repository.all_sops(),
    })
}

pub fn run(engine: &TriageEngine) -> i32 {
    print_json(&catalog_listing(engine))
}

#[cfg(test)]
mod tests {
    use opsengine_core::{DraftGenerator, SopRepository, TriageEngine};

    use super::{catalog_listing, run};
    use crate::util::EXIT_OK;

    #[test]
    fn listing_carries_fingerprint_and_ordered_sops() {
        let engine = TriageEngine::new(SopRepository::builtin(), DraftGenerator::new("Acme Pay"));
        let listing = catalog_listing(&engine);
        assert_eq!(listing["fingerprint"], SopRepository::builtin().fingerprint());
        assert_eq!(listing["sop_count"], 3);
        assert_eq!(listing["company_name"], "Acme Pay");
        assert_eq!(listing["sops"][0]["id"], "SOP-001");
        assert_eq!(listing["sops"][1]["category"], "aml");
    }

    #[test]
    fn run_succeeds() {
        assert_eq!(run(&TriageEngine::default()), EXIT_OK);
    }
}
