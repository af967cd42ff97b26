use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct WithClassifyIn { pub text: String }

#[derive(Debug, Serialize)]
pub struct WithClassifyOut { pub state: Classification }

/// Urgency label. Closed set; `Normal` is the fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    #[default]
    Normal,
    Elevated,
    Critical,
}

impl Classification {
    pub fn from_model_output(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "elevated" => Classification::Elevated,
            "critical" => Classification::Critical,
            _ => Classification::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Normal => "normal",
            Classification::Elevated => "elevated",
            Classification::Critical => "critical",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
