//! JSON reporter: structured output with the full feature snapshot.

use serde_json::json;

use super::{PageReport, Reporter};

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, reports: &[PageReport]) -> Result<String, String> {
        let pages: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| {
                let v = &r.verdict;
                json!({
                    "url": r.url,
                    "label": v.label,
                    "justification_axioms": v.justification_axioms,
                    "explanation": v.explanation,
                    "stage": v.stage,
                    "fallback_score": v.fallback_score,
                    "features": v.features_map(),
                })
            })
            .collect();

        let phishing_count = reports.iter().filter(|r| r.verdict.is_phishing()).count();

        let output = json!({
            "page_count": reports.len(),
            "phishing_count": phishing_count,
            "pages": pages,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
