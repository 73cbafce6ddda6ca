//! Fixed input enumerations offered to callers.
//!
//! The engine itself works on labels, so every value here converts to the label
//! the classifier and schedule builder see. Parsing accepts the English label or
//! the original shop label, ignoring case and surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::RecipeError;

pub const WATER_MIN_CC: f64 = 150.0;
pub const WATER_MAX_CC: f64 = 1000.0;
pub const WATER_STEP_CC: f64 = 10.0;
pub const WATER_DEFAULT_CC: f64 = 300.0;

fn matches_label(input: &str, english: &str, native: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case(english) || input == native
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    #[default]
    EthiopiaYirgacheffe,
    KenyaAa,
    Colombia,
    PanamaGeisha,
    Other,
}

impl Origin {
    pub const ALL: [Origin; 5] = [
        Origin::EthiopiaYirgacheffe,
        Origin::KenyaAa,
        Origin::Colombia,
        Origin::PanamaGeisha,
        Origin::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Origin::EthiopiaYirgacheffe => "Ethiopia Yirgacheffe",
            Origin::KenyaAa => "Kenya AA",
            Origin::Colombia => "Colombia",
            Origin::PanamaGeisha => "Panama Geisha",
            Origin::Other => "Other",
        }
    }

    pub fn native_label(&self) -> &'static str {
        match self {
            Origin::EthiopiaYirgacheffe => "衣索比亞 耶加雪菲",
            Origin::KenyaAa => "肯亞 AA",
            Origin::Colombia => "哥倫比亞",
            Origin::PanamaGeisha => "巴拿馬 藝伎",
            Origin::Other => "其他",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Origin {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Origin::ALL
            .into_iter()
            .find(|o| matches_label(s, o.label(), o.native_label()))
            .ok_or_else(|| RecipeError::invalid("origin", s, "Unknown origin"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    #[default]
    Washed,
    Natural,
    Honey,
    ExperimentalFermentation,
}

impl Process {
    pub const ALL: [Process; 4] = [
        Process::Washed,
        Process::Natural,
        Process::Honey,
        Process::ExperimentalFermentation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Process::Washed => "Washed",
            Process::Natural => "Natural",
            Process::Honey => "Honey",
            Process::ExperimentalFermentation => "Experimental Fermentation",
        }
    }

    pub fn native_label(&self) -> &'static str {
        match self {
            Process::Washed => "水洗 (Washed)",
            Process::Natural => "日曬 (Natural)",
            Process::Honey => "蜜處理 (Honey)",
            Process::ExperimentalFermentation => "特殊發酵",
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Process {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Process::ALL
            .into_iter()
            .find(|p| matches_label(s, p.label(), p.native_label()))
            .ok_or_else(|| RecipeError::invalid("process", s, "Unknown processing method"))
    }
}

/// Ordered lightest to darkest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoastLevel {
    ExtraLight,
    #[default]
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl RoastLevel {
    pub const ALL: [RoastLevel; 6] = [
        RoastLevel::ExtraLight,
        RoastLevel::Light,
        RoastLevel::MediumLight,
        RoastLevel::Medium,
        RoastLevel::MediumDark,
        RoastLevel::Dark,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoastLevel::ExtraLight => "Extra Light",
            RoastLevel::Light => "Light",
            RoastLevel::MediumLight => "Medium Light",
            RoastLevel::Medium => "Medium",
            RoastLevel::MediumDark => "Medium Dark",
            RoastLevel::Dark => "Dark",
        }
    }

    pub fn native_label(&self) -> &'static str {
        match self {
            RoastLevel::ExtraLight => "極淺焙",
            RoastLevel::Light => "淺焙",
            RoastLevel::MediumLight => "中淺焙",
            RoastLevel::Medium => "中焙",
            RoastLevel::MediumDark => "中深焙",
            RoastLevel::Dark => "深焙",
        }
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RoastLevel {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoastLevel::ALL
            .into_iter()
            .find(|r| matches_label(s, r.label(), r.native_label()))
            .ok_or_else(|| RecipeError::invalid("roast_level", s, "Unknown roast level"))
    }
}

/// Brewer choices. Anything outside the catalog is kept verbatim as `Unlisted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Brewer {
    #[default]
    V60,
    KalitaWave,
    Origami,
    Chemex,
    Unlisted(String),
}

impl Brewer {
    pub const LISTED: [Brewer; 4] = [
        Brewer::V60,
        Brewer::KalitaWave,
        Brewer::Origami,
        Brewer::Chemex,
    ];

    pub fn label(&self) -> &str {
        match self {
            Brewer::V60 => "V60",
            Brewer::KalitaWave => "Kalita Wave",
            Brewer::Origami => "Origami",
            Brewer::Chemex => "Chemex",
            Brewer::Unlisted(label) => label,
        }
    }

    pub fn native_label(&self) -> &str {
        match self {
            Brewer::V60 => "V60",
            Brewer::KalitaWave => "Kalita Wave (蛋糕濾杯)",
            Brewer::Origami => "Origami (折紙濾杯)",
            Brewer::Chemex => "Chemex",
            Brewer::Unlisted(label) => label,
        }
    }

    /// Short names people use for the listed brewers.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Brewer::KalitaWave => &["Kalita", "蛋糕濾杯"],
            Brewer::Origami => &["折紙濾杯"],
            Brewer::V60 | Brewer::Chemex | Brewer::Unlisted(_) => &[],
        }
    }

    pub fn is_listed(&self) -> bool {
        !matches!(self, Brewer::Unlisted(_))
    }
}

impl fmt::Display for Brewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Brewer {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let known = Brewer::LISTED
            .into_iter()
            .find(|b| {
                matches_label(s, b.label(), b.native_label())
                    || b.aliases().iter().any(|alias| matches_label(s, alias, alias))
            });
        Ok(known.unwrap_or_else(|| Brewer::Unlisted(s.trim().to_string())))
    }
}

impl From<String> for Brewer {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(brewer) => brewer,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Brewer {
    fn from(label: &str) -> Self {
        Brewer::from(label.to_string())
    }
}

impl From<Brewer> for String {
    fn from(brewer: Brewer) -> Self {
        brewer.label().to_string()
    }
}
