//! Compiled-in configuration for the contact form.

use crate::multiselect::SelectOption;
use serde::{Deserialize, Serialize};

fn default_allowed_extensions() -> Vec<String> {
    [".png", ".pdf", ".docx"].iter().map(|s| s.to_string()).collect()
}

fn default_skill_options() -> Vec<SelectOption> {
    ["Junior", "Middle", "Senior", "Lead", "CTO"]
        .iter()
        .map(|s| SelectOption::new(*s, *s))
        .collect()
}

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Drop us a line".to_string(),
            width: 720.0,
            height: 900.0,
        }
    }
}

/// Settings the form is built from. Fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Extensions accepted by the drop zone, with leading dot
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    #[serde(default = "default_skill_options")]
    pub skill_options: Vec<SelectOption>,
    #[serde(default)]
    pub window: WindowSettings,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            skill_options: default_skill_options(),
            window: WindowSettings::default(),
        }
    }
}

impl FormConfig {
    /// Allow-list without leading dots, as native file dialogs expect.
    pub fn dialog_extensions(&self) -> Vec<&str> {
        self.allowed_extensions
            .iter()
            .map(|e| e.trim_start_matches('.'))
            .filter(|e| !e.is_empty())
            .collect()
    }

    /// Human-readable list for help text, e.g. "PDF, DOCX, PNG".
    pub fn extensions_label(&self) -> String {
        self.dialog_extensions()
            .iter()
            .map(|e| e.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allow_list() {
        let config = FormConfig::default();
        assert_eq!(config.allowed_extensions, vec![".png", ".pdf", ".docx"]);
        assert_eq!(config.skill_options.len(), 5);
        assert_eq!(config.skill_options[4].label, "CTO");
    }

    #[test]
    fn test_dialog_extensions() {
        let config = FormConfig::default();
        assert_eq!(config.dialog_extensions(), vec!["png", "pdf", "docx"]);
        assert_eq!(config.extensions_label(), "PNG, PDF, DOCX");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FormConfig =
            serde_json::from_str(r#"{"allowed_extensions": [".pdf"]}"#).unwrap();
        assert_eq!(config.allowed_extensions, vec![".pdf"]);
        assert_eq!(config.skill_options.len(), 5);
        assert_eq!(config.window.title, "Drop us a line");
    }
}
