use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::TendencyThresholds;

/// A single assessment question, tagged with its owning style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub style_code: u16,
    /// Category tag carried from the bank source (e.g. "trait", "behavior").
    pub approach: String,
}

/// A named leadership style that questions are grouped under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub code: u16,
    pub name: String,
}

/// An answer as submitted: an ordinal level 1-5 or one of the five
/// canonical agreement labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Level(u8),
    Label(String),
}

impl AnswerValue {
    /// Resolve to an ordinal level 1-5. None for out-of-domain values.
    pub fn level(&self) -> Option<u8> {
        match self {
            AnswerValue::Level(n) if (1..=5).contains(n) => Some(*n),
            AnswerValue::Level(_) => None,
            AnswerValue::Label(s) => match s.trim().to_lowercase().as_str() {
                "strongly disagree" => Some(1),
                "disagree" => Some(2),
                "neutral" => Some(3),
                "agree" => Some(4),
                "strongly agree" => Some(5),
                _ => None,
            },
        }
    }
}

/// A completed submission: identifying info plus one answer per presented
/// question. Never mutated after it is received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub identifier: String,
    /// Question ids shown to the user, echoed back so completeness can be
    /// judged without server-side session state.
    pub presented: Vec<u32>,
    pub answers: HashMap<u32, AnswerValue>,
}

/// Low/Moderate/High banding of a style aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tendency {
    Low,
    Moderate,
    High,
}

impl Tendency {
    /// Classify an aggregate score against inclusive cutpoints.
    pub fn from_score(score: f64, thresholds: &TendencyThresholds) -> Self {
        if score >= thresholds.high {
            Tendency::High
        } else if score >= thresholds.low {
            Tendency::Moderate
        } else {
            Tendency::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tendency::Low => "Low",
            Tendency::Moderate => "Moderate",
            Tendency::High => "High",
        }
    }
}

/// One scored style ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSummary {
    pub style_code: u16,
    pub style_name: String,
    pub score: f64,
    pub answered: usize,
    pub tendency: Tendency,
    pub description: String,
}
