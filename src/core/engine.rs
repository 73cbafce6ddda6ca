use crate::core::{assembler, classifier, dose, schedule};
use crate::domain::catalog::{
    Origin, Process, RoastLevel, WATER_MAX_CC, WATER_MIN_CC, WATER_STEP_CC,
};
use crate::domain::model::{BrewInputs, BrewProfile, RecipeResult};
use crate::domain::ports::InputProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_finite, validate_range, validate_step, Validate,
};

/// How strictly inputs are checked before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Any positive, finite water volume.
    #[default]
    Lenient,
    /// Catalog range and step for water, non-empty labels.
    Strict,
}

impl Validate for BrewInputs {
    fn validate(&self) -> Result<()> {
        validate_positive_finite("target_water_cc", self.target_water_cc)
    }
}

impl BrewInputs {
    pub fn validate_strict(&self) -> Result<()> {
        validate_non_empty_string("origin", &self.origin)?;
        validate_non_empty_string("process", &self.process)?;
        validate_non_empty_string("roast_level", &self.roast_level)?;
        validate_non_empty_string("brewer", self.brewer.label())?;
        self.validate()?;
        validate_range("target_water_cc", self.target_water_cc, WATER_MIN_CC, WATER_MAX_CC)?;
        validate_step("target_water_cc", self.target_water_cc, WATER_MIN_CC, WATER_STEP_CC)
    }
}

/// Stateless recipe generator: validate, classify, dose, schedule, assemble.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeEngine {
    policy: InputPolicy,
}

impl RecipeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            policy: InputPolicy::Strict,
        }
    }

    pub fn with_policy(policy: InputPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn generate(&self, inputs: &BrewInputs) -> Result<RecipeResult> {
        match self.policy {
            InputPolicy::Lenient => inputs.validate()?,
            InputPolicy::Strict => inputs.validate_strict()?,
        }

        if inputs.origin.parse::<Origin>().is_err()
            || inputs.process.parse::<Process>().is_err()
            || inputs.roast_level.parse::<RoastLevel>().is_err()
        {
            tracing::debug!(
                "Free-text labels outside the catalog: origin '{}', process '{}', roast '{}'",
                inputs.origin,
                inputs.process,
                inputs.roast_level
            );
        }

        if !inputs.brewer.is_listed() {
            tracing::warn!(
                "Brewer '{}' is not in the catalog, using the single continuous pour",
                inputs.brewer
            );
        }

        let classification = classifier::classify(&inputs.roast_level, &inputs.process);
        let dose_grams = dose::compute_dose(inputs.target_water_cc, classification.ratio)?;
        let profile = BrewProfile {
            dose_grams,
            ratio: classification.ratio,
            temperature_c: classification.temperature_c,
            grind: classification.grind,
        };

        let steps = schedule::build_schedule(dose_grams, inputs.target_water_cc, &inputs.brewer);
        tracing::info!(
            "Generated recipe: {:.1}g at 1:{:.0}, {}°C, {} steps",
            profile.dose_grams,
            profile.ratio,
            profile.temperature_c,
            steps.len()
        );

        Ok(assembler::assemble(inputs.clone(), profile, steps))
    }

    pub fn generate_from<P: InputProvider + ?Sized>(&self, provider: &P) -> Result<RecipeResult> {
        let inputs = provider.brew_inputs()?;
        self.generate(&inputs)
    }
}

/// Shorthand for a lenient one-off generation.
pub fn generate_recipe(inputs: &BrewInputs) -> Result<RecipeResult> {
    RecipeEngine::new().generate(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Brewer;
    use crate::utils::error::RecipeError;

    fn inputs(water: f64) -> BrewInputs {
        BrewInputs::new("Colombia", "Honey", "Medium", Brewer::Chemex, water)
    }

    #[test]
    fn test_lenient_accepts_off_catalog_volume() {
        let recipe = RecipeEngine::new().generate(&inputs(1234.5)).unwrap();
        assert_eq!(recipe.total_water_cc(), 1234.5);
    }

    #[test]
    fn test_strict_rejects_off_catalog_volume() {
        let engine = RecipeEngine::strict();
        assert!(engine.generate(&inputs(300.0)).is_ok());
        assert!(engine.generate(&inputs(140.0)).is_err());
        assert!(engine.generate(&inputs(1010.0)).is_err());
        assert!(engine.generate(&inputs(305.0)).is_err());
    }

    #[test]
    fn test_rejects_non_positive_volume_before_computing() {
        for water in [0.0, -150.0, f64::NAN] {
            match RecipeEngine::new().generate(&inputs(water)) {
                Err(RecipeError::InvalidParameter { field, .. }) => {
                    assert_eq!(field, "target_water_cc")
                }
                other => panic!("expected InvalidParameter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_strict_rejects_blank_labels() {
        let blank = BrewInputs::new("  ", "Washed", "Light", Brewer::V60, 300.0);
        assert!(RecipeEngine::strict().generate(&blank).is_err());
        assert!(RecipeEngine::new().generate(&blank).is_ok());
    }

    #[test]
    fn test_unlisted_brewer_is_not_an_error() {
        let odd = BrewInputs::new("Other", "Washed", "Light", "Hario Switch", 300.0);
        let recipe = RecipeEngine::strict().generate(&odd).unwrap();
        assert_eq!(recipe.steps.len(), 2);
    }

    #[test]
    fn test_generate_from_provider() {
        let recipe = RecipeEngine::new().generate_from(&inputs(300.0)).unwrap();
        assert_eq!(recipe.inputs.origin, "Colombia");
    }
}
