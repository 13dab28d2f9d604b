//! Model configuration from TOML (`[model]` section)

use panel_domain::ModelConfig;
use serde::{Deserialize, Serialize};

/// Raw model configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Ollama model name
    pub name: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        let defaults = ModelConfig::default();
        Self {
            name: defaults.model,
            temperature: defaults.temperature,
            top_p: defaults.top_p,
        }
    }
}

impl FileModelConfig {
    pub fn to_model_config(&self) -> ModelConfig {
        ModelConfig::new(self.name.trim())
            .with_temperature(self.temperature)
            .with_top_p(self.top_p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_section_deserialize() {
        let toml_str = r#"
[model]
name = "mistral"
temperature = 0.2
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let model = config.model.to_model_config();
        assert_eq!(model.model, "mistral");
        assert_eq!(model.temperature, 0.2);
        assert_eq!(model.top_p, ModelConfig::default().top_p);
    }
}
