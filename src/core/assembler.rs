use crate::domain::model::{BrewInputs, BrewProfile, PourStep, RecipeResult};

pub fn flavor_note(origin: &str, process: &str) -> String {
    format!(
        "Optimized for {} {}, emphasizing bright acidity and a clean finish.",
        origin.trim(),
        process.trim()
    )
}

pub fn assemble(inputs: BrewInputs, profile: BrewProfile, steps: Vec<PourStep>) -> RecipeResult {
    let flavor_note = flavor_note(&inputs.origin, &inputs.process);
    RecipeResult {
        inputs,
        profile,
        steps,
        flavor_note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_note_uses_literal_labels() {
        assert_eq!(
            flavor_note("Ethiopia Yirgacheffe", "Washed"),
            "Optimized for Ethiopia Yirgacheffe Washed, emphasizing bright acidity and a clean finish."
        );
        assert!(flavor_note("肯亞 AA", "日曬 (Natural)").contains("肯亞 AA 日曬 (Natural)"));
    }
}
