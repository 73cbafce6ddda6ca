use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Brewer, Origin, Process, RoastLevel, WATER_DEFAULT_CC};

/// Caller-supplied parameters for one recipe.
///
/// Origin, process and roast level stay plain labels: the classifier matches them
/// by marker containment, so free text outside the catalog is still meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewInputs {
    pub origin: String,
    pub process: String,
    pub roast_level: String,
    pub brewer: Brewer,
    pub target_water_cc: f64,
}

impl BrewInputs {
    pub fn new(
        origin: impl Into<String>,
        process: impl Into<String>,
        roast_level: impl Into<String>,
        brewer: impl Into<Brewer>,
        target_water_cc: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            process: process.into(),
            roast_level: roast_level.into(),
            brewer: brewer.into(),
            target_water_cc,
        }
    }

    pub fn from_catalog(
        origin: Origin,
        process: Process,
        roast_level: RoastLevel,
        brewer: Brewer,
        target_water_cc: f64,
    ) -> Self {
        Self::new(
            origin.label(),
            process.label(),
            roast_level.label(),
            brewer,
            target_water_cc,
        )
    }
}

impl Default for BrewInputs {
    fn default() -> Self {
        Self::from_catalog(
            Origin::default(),
            Process::default(),
            RoastLevel::default(),
            Brewer::default(),
            WATER_DEFAULT_CC,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrindSize {
    /// Baseline recommendation.
    MediumFine,
    /// Roughly sea-salt sized, a touch finer than baseline.
    MediumFineFiner,
    Medium,
}

impl GrindSize {
    pub fn label(&self) -> &'static str {
        match self {
            GrindSize::MediumFine => "Medium-fine",
            GrindSize::MediumFineFiner => "Medium-fine, slightly finer (about sea-salt size)",
            GrindSize::Medium => "Medium (avoids over-extracted off-flavors)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrewProfile {
    pub dose_grams: f64,
    /// Water to coffee, e.g. `16.0` for 1:16.
    pub ratio: f64,
    pub temperature_c: i32,
    pub grind: GrindSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PourPhase {
    Bloom,
    FirstPour,
    SecondPour,
    CenterPour,
}

impl PourPhase {
    pub fn name(&self) -> &'static str {
        match self {
            PourPhase::Bloom => "Bloom",
            PourPhase::FirstPour => "First Pour (acidity)",
            PourPhase::SecondPour => "Second Pour (sweetness)",
            PourPhase::CenterPour => "Center Pour",
        }
    }

    pub fn time_range(&self) -> &'static str {
        match self {
            PourPhase::Bloom => "0:00–0:40",
            PourPhase::FirstPour => "0:40–1:30",
            PourPhase::SecondPour => "1:30–2:15",
            PourPhase::CenterPour => "0:40–2:00",
        }
    }

    pub fn technique(&self) -> &'static str {
        match self {
            PourPhase::Bloom => {
                "Spiral quickly from the center outward so every ground is evenly wet. Watch the bubbles as the bed degasses."
            }
            PourPhase::FirstPour => {
                "Pour in wide, gentle circles to agitate the bed and draw out bright floral and fruit aromatics."
            }
            PourPhase::SecondPour => {
                "Pour slowly in the center with minimal agitation to keep late bitterness out and build body and sweetness."
            }
            PourPhase::CenterPour => {
                "Keep the water level steady without flooding the dripper; let the flat bed steep to build sweetness."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PourStep {
    pub phase: PourPhase,
    pub name: &'static str,
    pub time_range: &'static str,
    pub water_cc: f64,
    pub cumulative_cc: f64,
    pub technique: &'static str,
}

impl PourStep {
    pub fn new(phase: PourPhase, water_cc: f64, cumulative_cc: f64) -> Self {
        Self {
            phase,
            name: phase.name(),
            time_range: phase.time_range(),
            water_cc,
            cumulative_cc,
            technique: phase.technique(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeResult {
    pub inputs: BrewInputs,
    pub profile: BrewProfile,
    pub steps: Vec<PourStep>,
    pub flavor_note: String,
}

impl RecipeResult {
    pub fn total_water_cc(&self) -> f64 {
        self.steps.last().map(|s| s.cumulative_cc).unwrap_or(0.0)
    }
}
