pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::RecipeFile;

pub use crate::app::render::OutputFormat;
pub use crate::core::engine::{generate_recipe, InputPolicy, RecipeEngine};
pub use crate::domain::catalog::{Brewer, Origin, Process, RoastLevel};
pub use crate::domain::model::{
    BrewInputs, BrewProfile, GrindSize, PourPhase, PourStep, RecipeResult,
};
pub use crate::utils::error::{RecipeError, Result};
