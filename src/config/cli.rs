use crate::app::render::OutputFormat;
use crate::config::toml_config::RecipeFile;
use crate::core::engine::InputPolicy;
use crate::core::InputProvider;
use crate::domain::catalog::Brewer;
use crate::domain::model::BrewInputs;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_finite, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "lextract")]
#[command(about = "Generate a pour-over brewing recipe from bean and brewer parameters")]
pub struct CliConfig {
    /// Bean origin, e.g. "Kenya AA"
    #[arg(long)]
    pub origin: Option<String>,

    /// Processing method: washed, natural, honey, ...
    #[arg(long)]
    pub process: Option<String>,

    /// Roast level, lightest to darkest (see --list)
    #[arg(long)]
    pub roast: Option<String>,

    /// Brewer: V60, Kalita Wave, Origami, Chemex
    #[arg(long)]
    pub brewer: Option<String>,

    /// Total water to pour, in cc
    #[arg(long)]
    pub water: Option<f64>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML recipe file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the input catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Accept any positive water volume instead of the 150-1000cc catalog range
    #[arg(long)]
    pub lenient: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn recipe_file(&self) -> Result<Option<RecipeFile>> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading recipe file from {}", path.display());
                let file = RecipeFile::from_file(path)?;
                file.validate()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    pub fn input_policy(&self) -> InputPolicy {
        if self.lenient {
            InputPolicy::Lenient
        } else {
            InputPolicy::Strict
        }
    }

    /// Flag, then file, then text.
    pub fn output_format(&self, file: Option<&RecipeFile>) -> OutputFormat {
        self.format
            .or_else(|| file.and_then(|f| f.output_format()))
            .unwrap_or_default()
    }

    /// Merges flags over the recipe file over catalog defaults.
    pub fn resolve_inputs(&self, file: Option<&RecipeFile>) -> BrewInputs {
        let defaults = BrewInputs::default();
        let brew = file.map(|f| f.brew.clone()).unwrap_or_default();

        BrewInputs::new(
            self.origin
                .clone()
                .or(brew.origin)
                .unwrap_or(defaults.origin),
            self.process
                .clone()
                .or(brew.process)
                .unwrap_or(defaults.process),
            self.roast
                .clone()
                .or(brew.roast_level)
                .unwrap_or(defaults.roast_level),
            self.brewer
                .clone()
                .map(Brewer::from)
                .or(brew.brewer.map(Brewer::from))
                .unwrap_or(defaults.brewer),
            self.water
                .or(brew.target_water_cc)
                .unwrap_or(defaults.target_water_cc),
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(water) = self.water {
            validate_positive_finite("water", water)?;
        }
        Ok(())
    }
}

impl InputProvider for CliConfig {
    fn brew_inputs(&self) -> Result<BrewInputs> {
        let file = self.recipe_file()?;
        Ok(self.resolve_inputs(file.as_ref()))
    }
}
