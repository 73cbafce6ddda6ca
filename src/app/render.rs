//! Presentation of generated recipes. Rounding to display precision only happens
//! here; the engine hands over raw values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::catalog::{
    Brewer, Origin, Process, RoastLevel, WATER_DEFAULT_CC, WATER_MAX_CC, WATER_MIN_CC,
    WATER_STEP_CC,
};
use crate::domain::model::{PourPhase, PourStep, RecipeResult};
use crate::domain::ports::Renderer;
use crate::utils::error::{RecipeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Csv => Box::new(DelimitedRenderer::csv()),
            OutputFormat::Tsv => Box::new(DelimitedRenderer::tsv()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(RecipeError::invalid(
                "format",
                s,
                "Unsupported format. Valid formats: text, json, csv, tsv",
            )),
        }
    }
}

/// The instruction line shown under each step heading.
pub fn action_line(step: &PourStep) -> String {
    match step.phase {
        PourPhase::Bloom => format!("Pour {:.0}cc of water", step.water_cc),
        PourPhase::FirstPour | PourPhase::SecondPour => format!(
            "Pour {:.0}cc (total {:.0}cc)",
            step.water_cc, step.cumulative_cc
        ),
        PourPhase::CenterPour => format!("Slowly pour the remaining {:.0}cc", step.water_cc),
    }
}

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, recipe: &RecipeResult) -> Result<String> {
        let profile = &recipe.profile;
        let mut lines = vec![
            "BREWING PROFILE".to_string(),
            format!("  Coffee  {:.1}g", profile.dose_grams),
            format!("  Ratio   1:{:.0}", profile.ratio),
            format!("  Temp    {}°C", profile.temperature_c),
            format!("  Grind   {}", profile.grind.label()),
            format!("  Flavor  {}", recipe.flavor_note),
            String::new(),
            "STEPS".to_string(),
        ];

        for step in &recipe.steps {
            lines.push(format!("{} | {}", step.time_range, step.name));
            lines.push(format!("  {}", action_line(step)));
            lines.push(format!("  {}", step.technique));
        }

        Ok(join_lines(lines))
    }
}

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, recipe: &RecipeResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(recipe)?)
    }
}

/// One row per pour step.
pub struct DelimitedRenderer {
    delimiter: u8,
}

impl DelimitedRenderer {
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Renderer for DelimitedRenderer {
    fn render(&self, recipe: &RecipeResult) -> Result<String> {
        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(self.delimiter)
                .from_writer(&mut buf);

            writer.write_record([
                "step",
                "phase",
                "time_range",
                "water_cc",
                "cumulative_cc",
                "technique",
            ])?;
            for (index, step) in recipe.steps.iter().enumerate() {
                writer.write_record([
                    (index + 1).to_string(),
                    step.name.to_string(),
                    step.time_range.to_string(),
                    format!("{:.1}", step.water_cc),
                    format!("{:.1}", step.cumulative_cc),
                    step.technique.to_string(),
                ])?;
            }
            writer.flush()?;
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Human-readable list of every catalog value, for `--list`.
pub fn render_catalog() -> String {
    let mut lines = vec!["Origins:".to_string()];
    lines.extend(
        Origin::ALL
            .iter()
            .map(|o| catalog_entry(o.label(), o.native_label())),
    );
    lines.push("Processes:".to_string());
    lines.extend(
        Process::ALL
            .iter()
            .map(|p| catalog_entry(p.label(), p.native_label())),
    );
    lines.push("Roast levels (lightest to darkest):".to_string());
    lines.extend(
        RoastLevel::ALL
            .iter()
            .map(|r| catalog_entry(r.label(), r.native_label())),
    );
    lines.push("Brewers:".to_string());
    lines.extend(
        Brewer::LISTED
            .iter()
            .map(|b| catalog_entry(b.label(), b.native_label())),
    );
    lines.push(format!(
        "Water: {}-{}cc in steps of {} (default {})",
        WATER_MIN_CC, WATER_MAX_CC, WATER_STEP_CC, WATER_DEFAULT_CC
    ));

    join_lines(lines)
}

fn catalog_entry(label: &str, native_label: &str) -> String {
    format!("  {} / {}", label, native_label)
}

/// Newline-terminated block, one entry per line.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
