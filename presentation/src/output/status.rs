//! Service status badge formatting

use colored::Colorize;
use council_domain::{HealthState, ServiceStatus};

/// Formats service health for console display
pub struct StatusFormatter;

impl StatusFormatter {
    pub fn format(status: &ServiceStatus) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "PC1 Chairman: {}\n",
            Self::badge(status.pc1_chairman)
        ));
        if let Some(model) = Self::meta_str(&status.chairman_meta, "model") {
            output.push_str(&format!("  model: {}\n", model.dimmed()));
        }

        output.push_str(&format!(
            "PC2 Council:  {}\n",
            Self::badge(status.pc2_council)
        ));
        if let Some(models) = status
            .council_meta
            .as_ref()
            .and_then(|meta| meta.get("models"))
            .and_then(|models| models.as_array())
        {
            let names: Vec<String> = models
                .iter()
                .filter_map(|m| m.as_str().map(String::from))
                .collect();
            if !names.is_empty() {
                output.push_str(&format!("  models: {}\n", names.join(", ").dimmed()));
            }
        }

        output
    }

    fn badge(state: HealthState) -> String {
        match state {
            HealthState::Healthy => "✓ Healthy".green().to_string(),
            HealthState::Error => "✗ Error".red().to_string(),
            HealthState::Unknown => "⚫ Unknown".dimmed().to_string(),
        }
    }

    fn meta_str<'a>(meta: &'a Option<serde_json::Value>, key: &str) -> Option<&'a str> {
        meta.as_ref()?.get(key)?.as_str()
    }
}
