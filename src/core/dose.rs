use crate::utils::error::{RecipeError, Result};

/// Coffee mass for `target_water_cc` at `ratio` (water:coffee). No rounding.
pub fn compute_dose(target_water_cc: f64, ratio: f64) -> Result<f64> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(RecipeError::invalid(
            "ratio",
            ratio,
            "Ratio must be a positive, finite number",
        ));
    }
    if !target_water_cc.is_finite() || target_water_cc <= 0.0 {
        return Err(RecipeError::invalid(
            "target_water_cc",
            target_water_cc,
            "Target water must be a positive, finite number",
        ));
    }

    let dose = target_water_cc / ratio;
    tracing::debug!("Dose for {}cc at 1:{} is {}g", target_water_cc, ratio, dose);
    Ok(dose)
}
