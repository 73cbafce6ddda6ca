pub mod assembler;
pub mod classifier;
pub mod dose;
pub mod engine;
pub mod schedule;

pub use crate::domain::model::{BrewInputs, BrewProfile, PourStep, RecipeResult};
pub use crate::domain::ports::{InputProvider, Renderer};
pub use crate::utils::error::Result;
