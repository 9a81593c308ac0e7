//! FocusArea - Which aspect of a prompt suggestions should cover

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    #[default]
    All,
    Clarity,
    Structure,
    Examples,
    Reasoning,
    Expertise,
}

impl FocusArea {
    /// Whether suggestions for `area` are in scope under this focus.
    pub fn covers(&self, area: FocusArea) -> bool {
        *self == FocusArea::All || *self == area
    }

    /// Heading form, e.g. "Clarity".
    pub fn title(&self) -> &'static str {
        match self {
            FocusArea::All => "All",
            FocusArea::Clarity => "Clarity",
            FocusArea::Structure => "Structure",
            FocusArea::Examples => "Examples",
            FocusArea::Reasoning => "Reasoning",
            FocusArea::Expertise => "Expertise",
        }
    }
}

impl std::fmt::Display for FocusArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FocusArea::All => write!(f, "all"),
            FocusArea::Clarity => write!(f, "clarity"),
            FocusArea::Structure => write!(f, "structure"),
            FocusArea::Examples => write!(f, "examples"),
            FocusArea::Reasoning => write!(f, "reasoning"),
            FocusArea::Expertise => write!(f, "expertise"),
        }
    }
}

impl std::str::FromStr for FocusArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FocusArea::All),
            "clarity" => Ok(FocusArea::Clarity),
            "structure" => Ok(FocusArea::Structure),
            "examples" => Ok(FocusArea::Examples),
            "reasoning" => Ok(FocusArea::Reasoning),
            "expertise" => Ok(FocusArea::Expertise),
            _ => Err(format!("Unknown focus area: {}", s)),
        }
    }
}
