pub mod select;

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::config::BankConfig;
use crate::core::{Question, Style};

/// Failure to obtain a usable question bank. The service refuses to start
/// without one rather than serving an empty form.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("question bank fetch failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("question bank read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("question bank contains no questions")]
    Empty,
}

/// The full question set, partitioned by style. Immutable once loaded;
/// shared behind an Arc for the lifetime of the process.
pub struct QuestionBank {
    /// Styles in first-appearance order. This is the display order.
    styles: Vec<Style>,
    questions: Vec<Question>,
    by_id: HashMap<u32, usize>,
    by_style: HashMap<u16, Vec<usize>>,
}

impl QuestionBank {
    /// Parse the bank from CSV text.
    /// Columns: style_num,style_name,approach,question — question text comes
    /// last so it may contain commas. Malformed rows are skipped.
    pub fn from_csv(text: &str) -> Result<Self, BankError> {
        let mut styles: Vec<Style> = Vec::new();
        let mut questions = Vec::new();
        let mut by_id = HashMap::new();
        let mut by_style: HashMap<u16, Vec<usize>> = HashMap::new();

        for (lineno, line) in text.lines().enumerate().skip(1) {
            // skip header
            if line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.splitn(4, ',').collect();
            if parts.len() < 4 {
                tracing::warn!("Skipping malformed bank row at line {}", lineno + 1);
                continue;
            }
            let code: u16 = match parts[0].trim().parse() {
                Ok(c) => c,
                Err(_) => {
                    tracing::warn!("Skipping bank row with bad style code at line {}", lineno + 1);
                    continue;
                }
            };
            let name = parts[1].trim();
            let approach = parts[2].trim().to_lowercase();
            let question_text = parts[3].trim();
            if question_text.is_empty() {
                continue;
            }

            if !styles.iter().any(|s| s.code == code) {
                styles.push(Style {
                    code,
                    name: name.to_string(),
                });
            }

            let id = questions.len() as u32 + 1;
            let idx = questions.len();
            questions.push(Question {
                id,
                text: question_text.to_string(),
                style_code: code,
                approach,
            });
            by_id.insert(id, idx);
            by_style.entry(code).or_default().push(idx);
        }

        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        Ok(Self {
            styles,
            questions,
            by_id,
            by_style,
        })
    }

    /// Load from the configured source: remote URL when set, local CSV file
    /// otherwise. The fetch has a bounded timeout so startup cannot hang.
    pub async fn load(config: &BankConfig) -> Result<Self, BankError> {
        let text = match config.url {
            Some(ref url) => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(config.fetch_timeout_secs))
                    .build()?;
                client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
            None => std::fs::read_to_string(Path::new(&config.path))?,
        };
        Self::from_csv(&text)
    }

    /// Styles in display order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.by_id.get(&id).map(|&idx| &self.questions[idx])
    }

    pub fn questions_for(&self, style_code: u16) -> Vec<&Question> {
        self.by_style
            .get(&style_code)
            .map(|idxs| idxs.iter().map(|&idx| &self.questions[idx]).collect())
            .unwrap_or_default()
    }

    pub fn style_name(&self, code: u16) -> Option<&str> {
        self.styles
            .iter()
            .find(|s| s.code == code)
            .map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
