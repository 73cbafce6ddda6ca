use serde::Serialize;

use crate::domain::catalog::Brewer;
use crate::domain::model::{PourPhase, PourStep};

/// Bloom water per gram of coffee.
pub const BLOOM_FACTOR: f64 = 2.5;
/// Share of the post-bloom water used by the first of two pours.
pub const FIRST_POUR_SHARE: f64 = 0.6;

/// How the water left after the bloom is delivered.
///
/// Only V60 gets the split pour; every other brewer, listed or not, shares the
/// single continuous pour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PourStyle {
    TwoStagePour,
    SingleContinuousPour,
}

impl PourStyle {
    pub fn for_brewer(brewer: &Brewer) -> Self {
        match brewer {
            Brewer::V60 => PourStyle::TwoStagePour,
            Brewer::KalitaWave | Brewer::Origami | Brewer::Chemex | Brewer::Unlisted(_) => {
                PourStyle::SingleContinuousPour
            }
        }
    }

    pub fn step_count(&self) -> usize {
        match self {
            PourStyle::TwoStagePour => 3,
            PourStyle::SingleContinuousPour => 2,
        }
    }
}

/// Accumulates steps while tracking how much water has gone in so far.
struct ScheduleWriter {
    target_water_cc: f64,
    poured_cc: f64,
    steps: Vec<PourStep>,
}

impl ScheduleWriter {
    fn new(target_water_cc: f64, capacity: usize) -> Self {
        Self {
            target_water_cc,
            poured_cc: 0.0,
            steps: Vec::with_capacity(capacity),
        }
    }

    fn pour(&mut self, phase: PourPhase, water_cc: f64) {
        self.poured_cc += water_cc;
        self.steps.push(PourStep::new(phase, water_cc, self.poured_cc));
    }

    /// Final pour takes whatever is left; its cumulative is the target itself.
    ///
    /// The amounts must add up to the target in f64, not just on paper.
    fn finish(mut self, phase: PourPhase) -> Vec<PourStep> {
        let water_cc = closing_pour(self.poured_cc, self.target_water_cc)
            .or_else(|| self.rebalance_last_pour())
            .unwrap_or(self.target_water_cc - self.poured_cc);
        self.steps
            .push(PourStep::new(phase, water_cc, self.target_water_cc));
        self.steps
    }

    /// When the running total sits on a rounding tie no closing amount exists,
    /// so the previous pour moves by one ulp to get off it.
    fn rebalance_last_pour(&mut self) -> Option<f64> {
        let count = self.steps.len();
        let before_cc = match count {
            0 => return None,
            1 => 0.0,
            _ => self.steps[count - 2].cumulative_cc,
        };
        let last = &mut self.steps[count - 1];

        for upward in [true, false] {
            let water_cc = adjacent(last.water_cc, upward);
            let poured_cc = before_cc + water_cc;
            if let Some(closing) = closing_pour(poured_cc, self.target_water_cc) {
                tracing::debug!(
                    "Moved {:?} by one ulp to close on {}cc",
                    last.phase,
                    self.target_water_cc
                );
                last.water_cc = water_cc;
                last.cumulative_cc = poured_cc;
                self.poured_cc = poured_cc;
                return Some(closing);
            }
        }
        None
    }
}

/// Amount that brings `poured_cc` to exactly `target_cc` under f64 addition.
fn closing_pour(poured_cc: f64, target_cc: f64) -> Option<f64> {
    let mut water_cc = target_cc - poured_cc;
    for _ in 0..4 {
        let total = poured_cc + water_cc;
        if total == target_cc {
            return Some(water_cc);
        }
        water_cc = adjacent(water_cc, total < target_cc);
    }
    None
}

/// Neighbouring f64 above or below a finite value.
fn adjacent(value: f64, upward: bool) -> f64 {
    if value == 0.0 {
        let smallest = f64::from_bits(1);
        return if upward { smallest } else { -smallest };
    }
    let bits = value.to_bits();
    if (value > 0.0) == upward {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

pub fn build_schedule(dose_grams: f64, target_water_cc: f64, brewer: &Brewer) -> Vec<PourStep> {
    let style = PourStyle::for_brewer(brewer);
    let bloom_cc = dose_grams * BLOOM_FACTOR;
    let remaining_cc = target_water_cc - bloom_cc;

    tracing::debug!(
        "Building {:?} schedule for {}: bloom {}cc, remaining {}cc",
        style,
        brewer,
        bloom_cc,
        remaining_cc
    );

    let mut writer = ScheduleWriter::new(target_water_cc, style.step_count());
    writer.pour(PourPhase::Bloom, bloom_cc);

    match style {
        PourStyle::TwoStagePour => {
            writer.pour(PourPhase::FirstPour, remaining_cc * FIRST_POUR_SHARE);
            writer.finish(PourPhase::SecondPour)
        }
        PourStyle::SingleContinuousPour => writer.finish(PourPhase::CenterPour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(steps: &[PourStep]) -> Vec<f64> {
        steps.iter().map(|s| s.water_cc).collect()
    }

    #[test]
    fn test_v60_two_stage_split() {
        let steps = build_schedule(18.75, 300.0, &Brewer::V60);
        assert_eq!(steps.len(), 3);
        assert_eq!(amounts(&steps), vec![46.875, 151.875, 101.25]);
        assert_eq!(steps[0].phase, PourPhase::Bloom);
        assert_eq!(steps[1].phase, PourPhase::FirstPour);
        assert_eq!(steps[2].phase, PourPhase::SecondPour);
        assert_eq!(steps[1].cumulative_cc, 198.75);
        assert_eq!(steps[2].cumulative_cc, 300.0);
    }

    #[test]
    fn test_other_brewers_share_single_pour() {
        for brewer in [
            Brewer::KalitaWave,
            Brewer::Origami,
            Brewer::Chemex,
            Brewer::Unlisted("Clever Dripper".to_string()),
        ] {
            let steps = build_schedule(12.5, 200.0, &brewer);
            assert_eq!(steps.len(), 2);
            assert_eq!(amounts(&steps), vec![31.25, 168.75]);
            assert_eq!(steps[1].phase, PourPhase::CenterPour);
            assert_eq!(steps[1].time_range, "0:40–2:00");
        }
    }

    #[test]
    fn test_bloom_is_identical_across_brewers() {
        let v60 = build_schedule(20.0, 320.0, &Brewer::V60);
        let chemex = build_schedule(20.0, 320.0, &Brewer::Chemex);
        assert_eq!(v60[0], chemex[0]);
        assert_eq!(v60[0].water_cc, 50.0);
        assert_eq!(v60[0].time_range, "0:00–0:40");
    }

    #[test]
    fn test_second_pour_is_forty_percent_of_remaining() {
        let steps = build_schedule(62.5, 1000.0, &Brewer::V60);
        let remaining = 1000.0 - 156.25;
        assert_eq!(steps[1].water_cc, remaining * 0.6);
        assert!((steps[2].water_cc - remaining * 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_is_monotonic_and_ends_on_target() {
        for target in [150.0, 237.5, 333.3, 1000.0] {
            for brewer in [Brewer::V60, Brewer::Origami] {
                let steps = build_schedule(target / 15.0, target, &brewer);
                assert!(steps
                    .windows(2)
                    .all(|w| w[0].cumulative_cc <= w[1].cumulative_cc));
                assert_eq!(steps.last().unwrap().cumulative_cc, target);
            }
        }
    }

    fn folded(steps: &[PourStep]) -> f64 {
        steps.iter().fold(0.0, |acc, s| acc + s.water_cc)
    }

    #[test]
    fn test_single_pour_closes_on_rounding_tie() {
        // target - bloom here lands on a tie that rounds away from the target
        for (target, ratio) in [(153.33, 16.0), (155.92, 15.0), (155.92, 16.0)] {
            let dose = target / ratio;
            let steps = build_schedule(dose, target, &Brewer::Chemex);
            assert_eq!(folded(&steps), target, "{}cc at 1:{}", target, ratio);
            assert_eq!(steps[0].cumulative_cc, steps[0].water_cc);
            assert_eq!(steps[1].cumulative_cc, target);
            assert!((steps[0].water_cc - dose * BLOOM_FACTOR).abs() <= f64::EPSILON * target);
        }
    }

    #[test]
    fn test_off_grid_volumes_partition_exactly() {
        for i in 0..=2297 {
            let target = 150.0 + 0.37 * i as f64;
            for ratio in [15.0, 16.0] {
                for brewer in [Brewer::V60, Brewer::Chemex] {
                    let steps = build_schedule(target / ratio, target, &brewer);
                    assert_eq!(folded(&steps), target, "{}cc {}", target, brewer);
                    let mut running = 0.0;
                    for step in &steps[..steps.len() - 1] {
                        running += step.water_cc;
                        assert_eq!(step.cumulative_cc, running);
                    }
                    assert!(steps.iter().all(|s| s.water_cc > 0.0));
                }
            }
        }
    }

    #[test]
    fn test_adjacent_moves_one_ulp() {
        assert_eq!(adjacent(1.0, true), 1.0 + f64::EPSILON);
        assert_eq!(adjacent(1.0, false), 1.0 - f64::EPSILON / 2.0);
        assert_eq!(adjacent(-1.0, false), -1.0 - f64::EPSILON);
        assert!(adjacent(0.0, true) > 0.0);
    }
}
