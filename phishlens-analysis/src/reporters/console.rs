//! Console reporter: human-readable output with color codes.

use super::{PageReport, Reporter};
use crate::rules::Label;

/// Console reporter for terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
    pub show_features: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool, show_features: bool) -> Self {
        Self {
            use_color,
            show_features,
        }
    }

    fn symbol(&self, label: Label) -> &'static str {
        match label {
            Label::Phishing => "✗",
            Label::Legitimate => "✓",
        }
    }

    fn color_start(&self, label: Label) -> &'static str {
        if !self.use_color {
            return "";
        }
        match label {
            Label::Phishing => "\x1b[31m",   // red
            Label::Legitimate => "\x1b[32m", // green
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, reports: &[PageReport]) -> Result<String, String> {
        let mut output = String::new();

        for report in reports {
            let verdict = &report.verdict;
            output.push_str(&format!(
                "{}{} {}{}  {}\n",
                self.color_start(verdict.label),
                self.symbol(verdict.label),
                verdict.label,
                self.color_end(),
                report.url,
            ));

            let axioms = if verdict.justification_axioms.is_empty() {
                "-".to_string()
            } else {
                verdict.axiom_ids().join(", ")
            };
            output.push_str(&format!("  Justification: {axioms}\n"));
            output.push_str(&format!("  Explanation:   {}\n", verdict.explanation));

            if self.show_features {
                output.push_str("  Features:\n");
                for (name, value) in verdict.features.entries() {
                    output.push_str(&format!("    {name:<13} {value}\n"));
                }
            }
            output.push('\n');
        }

        let phishing = reports.iter().filter(|r| r.verdict.is_phishing()).count();
        output.push_str(&format!(
            "{} page(s) analyzed: {} phishing, {} legitimate\n",
            reports.len(),
            phishing,
            reports.len() - phishing,
        ));

        Ok(output)
    }
}
