//! Roast/process rules that pick ratio, water temperature and grind.
//!
//! Labels are reduced to two buckets by marker containment, then looked up in a
//! fixed decision table. Any label that carries the light marker ("Extra Light",
//! "Medium Light", "極淺焙", ...) lands in the light bucket.

use serde::Serialize;

use crate::domain::model::GrindSize;

const LIGHT_MARKERS: [&str; 2] = ["light", "淺"];
const WASHED_MARKERS: [&str; 2] = ["washed", "水洗"];
const NATURAL_MARKERS: [&str; 2] = ["natural", "日曬"];

pub const BASE_RATIO: f64 = 15.0;
pub const LIGHT_RATIO: f64 = 16.0;
pub const BASE_TEMPERATURE_C: i32 = 90;
/// Light roasts need hotter water.
pub const LIGHT_TEMPERATURE_BOOST: i32 = 3;
/// Washed coffees take one more degree on top of the light boost.
pub const WASHED_TEMPERATURE_BOOST: i32 = 1;

fn contains_marker(label: &str, markers: &[&str]) -> bool {
    let lowered = label.to_lowercase();
    markers.iter().any(|m| lowered.contains(m))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoastBucket {
    Light,
    Other,
}

impl RoastBucket {
    pub fn from_label(roast_level: &str) -> Self {
        if contains_marker(roast_level, &LIGHT_MARKERS) {
            RoastBucket::Light
        } else {
            RoastBucket::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessBucket {
    Washed,
    Natural,
    Other,
}

impl ProcessBucket {
    /// Washed is checked before natural.
    pub fn from_label(process: &str) -> Self {
        if contains_marker(process, &WASHED_MARKERS) {
            ProcessBucket::Washed
        } else if contains_marker(process, &NATURAL_MARKERS) {
            ProcessBucket::Natural
        } else {
            ProcessBucket::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub roast: RoastBucket,
    pub process: ProcessBucket,
    pub ratio: f64,
    pub temperature_c: i32,
    pub grind: GrindSize,
}

/// Row lookup. Kept separate from label parsing so every bucket pair is covered
/// by the match below.
pub fn decide(roast: RoastBucket, process: ProcessBucket) -> Classification {
    let (ratio, temperature_c, grind) = match (roast, process) {
        (RoastBucket::Light, ProcessBucket::Washed) => (
            LIGHT_RATIO,
            BASE_TEMPERATURE_C + LIGHT_TEMPERATURE_BOOST + WASHED_TEMPERATURE_BOOST,
            GrindSize::MediumFineFiner,
        ),
        (RoastBucket::Light, ProcessBucket::Natural) => (
            LIGHT_RATIO,
            BASE_TEMPERATURE_C + LIGHT_TEMPERATURE_BOOST,
            GrindSize::Medium,
        ),
        (RoastBucket::Light, ProcessBucket::Other) => (
            LIGHT_RATIO,
            BASE_TEMPERATURE_C + LIGHT_TEMPERATURE_BOOST,
            GrindSize::MediumFine,
        ),
        (RoastBucket::Other, _) => (BASE_RATIO, BASE_TEMPERATURE_C, GrindSize::MediumFine),
    };

    Classification {
        roast,
        process,
        ratio,
        temperature_c,
        grind,
    }
}

pub fn classify(roast_level: &str, process: &str) -> Classification {
    let classification = decide(
        RoastBucket::from_label(roast_level),
        ProcessBucket::from_label(process),
    );

    tracing::debug!(
        "Classified roast '{}' / process '{}' as {:?}/{:?}: ratio 1:{}, {}°C",
        roast_level,
        process,
        classification.roast,
        classification.process,
        classification.ratio,
        classification.temperature_c
    );

    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Process, RoastLevel};

    #[test]
    fn test_light_washed_row() {
        let c = classify("light", "washed");
        assert_eq!(c.ratio, 16.0);
        assert_eq!(c.temperature_c, 94);
        assert_eq!(c.grind, GrindSize::MediumFineFiner);
    }

    #[test]
    fn test_light_natural_row() {
        let c = classify("Light", "Natural");
        assert_eq!(c.ratio, 16.0);
        assert_eq!(c.temperature_c, 93);
        assert_eq!(c.grind, GrindSize::Medium);
    }

    #[test]
    fn test_light_other_process_keeps_baseline_grind() {
        for process in ["Honey", "Experimental Fermentation", "anaerobic"] {
            let c = classify("Light", process);
            assert_eq!(c.ratio, 16.0);
            assert_eq!(c.temperature_c, 93);
            assert_eq!(c.grind, GrindSize::MediumFine);
        }
    }

    #[test]
    fn test_non_light_roasts_ignore_process() {
        for process in Process::ALL {
            let c = classify("Medium", process.label());
            assert_eq!(c.ratio, 15.0);
            assert_eq!(c.temperature_c, 90);
            assert_eq!(c.grind, GrindSize::MediumFine);
        }
    }

    #[test]
    fn test_light_marker_is_matched_by_containment() {
        let light: Vec<RoastLevel> = RoastLevel::ALL
            .into_iter()
            .filter(|r| RoastBucket::from_label(r.label()) == RoastBucket::Light)
            .collect();
        assert_eq!(
            light,
            vec![RoastLevel::ExtraLight, RoastLevel::Light, RoastLevel::MediumLight]
        );

        for roast in RoastLevel::ALL {
            assert_eq!(
                RoastBucket::from_label(roast.label()),
                RoastBucket::from_label(roast.native_label()),
                "{} and {} should share a bucket",
                roast.label(),
                roast.native_label()
            );
        }
    }

    #[test]
    fn test_native_process_labels() {
        assert_eq!(ProcessBucket::from_label("水洗 (Washed)"), ProcessBucket::Washed);
        assert_eq!(ProcessBucket::from_label("日曬"), ProcessBucket::Natural);
        assert_eq!(ProcessBucket::from_label("蜜處理 (Honey)"), ProcessBucket::Other);
    }

    #[test]
    fn test_washed_wins_over_natural() {
        assert_eq!(
            ProcessBucket::from_label("washed natural blend"),
            ProcessBucket::Washed
        );
    }

    #[test]
    fn test_unrecognized_labels_fall_to_default() {
        let c = classify("", "???");
        assert_eq!(c.roast, RoastBucket::Other);
        assert_eq!(c.ratio, 15.0);
        assert_eq!(c.temperature_c, 90);
    }
}
