use crate::domain::model::{BrewInputs, RecipeResult};
use crate::utils::error::Result;

/// Anything that can hand the engine a set of brew inputs: CLI flags, a TOML
/// recipe file, or an embedding application.
pub trait InputProvider {
    fn brew_inputs(&self) -> Result<BrewInputs>;
}

impl InputProvider for BrewInputs {
    fn brew_inputs(&self) -> Result<BrewInputs> {
        Ok(self.clone())
    }
}

/// Presentation side of the engine. Implementations only read the result.
pub trait Renderer {
    fn render(&self, recipe: &RecipeResult) -> Result<String>;
}
