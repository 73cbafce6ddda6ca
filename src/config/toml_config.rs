use crate::app::render::OutputFormat;
use crate::core::InputProvider;
use crate::domain::model::BrewInputs;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{validate_positive_finite, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeFile {
    #[serde(default)]
    pub brew: BrewSection,
    pub output: Option<OutputSection>,
}

/// Every field is optional so a file can carry just the values it wants to pin;
/// the CLI fills the rest from flags or catalog defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrewSection {
    pub origin: Option<String>,
    pub process: Option<String>,
    pub roast_level: Option<String>,
    pub brewer: Option<String>,
    pub target_water_cc: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl RecipeFile {
    /// 從 TOML 檔案載入配方
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配方
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecipeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BREWER})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecipeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl Validate for RecipeFile {
    fn validate(&self) -> Result<()> {
        if let Some(water) = self.brew.target_water_cc {
            validate_positive_finite("brew.target_water_cc", water)?;
        }
        Ok(())
    }
}

/// A file used on its own must name all five inputs.
impl InputProvider for RecipeFile {
    fn brew_inputs(&self) -> Result<BrewInputs> {
        let brew = &self.brew;
        Ok(BrewInputs::new(
            validate_required_field("brew.origin", &brew.origin)?.as_str(),
            validate_required_field("brew.process", &brew.process)?.as_str(),
            validate_required_field("brew.roast_level", &brew.roast_level)?.as_str(),
            validate_required_field("brew.brewer", &brew.brewer)?.as_str(),
            *validate_required_field("brew.target_water_cc", &brew.target_water_cc)?,
        ))
    }
}
