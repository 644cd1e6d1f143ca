pub mod descriptions;
pub mod weights;

use std::collections::HashMap;

use tracing::warn;

use crate::bank::QuestionBank;
use crate::config::{AggregationMode, ScoringConfig, TendencyThresholds};
use crate::core::{StyleSummary, Submission, Tendency};

/// Aggregates weighted answers per style and classifies each aggregate.
/// A pure function of (bank, submission, config) — rescoring the same
/// submission always yields the same summaries.
#[derive(Clone)]
pub struct ScoreEngine {
    mode: AggregationMode,
    thresholds: TendencyThresholds,
}

impl ScoreEngine {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            mode: config.mode,
            thresholds: config.thresholds,
        }
    }

    pub fn mode(&self) -> AggregationMode {
        self.mode
    }

    /// One summary per bank style, in bank display order. Answers whose
    /// question is not in the bank are skipped and logged.
    pub fn summarize(&self, bank: &QuestionBank, submission: &Submission) -> Vec<StyleSummary> {
        let mut sums: HashMap<u16, f64> = HashMap::new();
        let mut counts: HashMap<u16, usize> = HashMap::new();

        for (&question_id, answer) in &submission.answers {
            let Some(question) = bank.question(question_id) else {
                warn!("Answer references unknown question {question_id}, skipping");
                continue;
            };
            let weight = answer
                .level()
                .map(weights::weight_for_level)
                .unwrap_or(0.0);
            *sums.entry(question.style_code).or_insert(0.0) += weight;
            *counts.entry(question.style_code).or_insert(0) += 1;
        }

        bank.styles()
            .iter()
            .map(|style| {
                let sum = sums.get(&style.code).copied().unwrap_or(0.0);
                let answered = counts.get(&style.code).copied().unwrap_or(0);
                let score = match self.mode {
                    AggregationMode::Sum => sum,
                    AggregationMode::Mean => {
                        if answered > 0 {
                            sum / answered as f64
                        } else {
                            0.0
                        }
                    }
                };
                let tendency = Tendency::from_score(score, &self.thresholds);
                let description = descriptions::describe(&style.name, tendency)
                    .map(str::to_string)
                    .unwrap_or_else(|| descriptions::placeholder(&style.name, tendency));
                StyleSummary {
                    style_code: style.code,
                    style_name: style.name.clone(),
                    score,
                    answered,
                    tendency,
                    description,
                }
            })
            .collect()
    }

    /// Chart ceiling for the configured mode: each answer contributes at most
    /// ±2, so sum mode scales with the per-style cap and mean mode does not.
    pub fn chart_max(&self, max_per_style: usize) -> f64 {
        match self.mode {
            AggregationMode::Sum => 2.0 * max_per_style as f64,
            AggregationMode::Mean => 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnswerValue;

    const EPS: f64 = 1e-9;

    fn bank() -> QuestionBank {
        QuestionBank::from_csv(
            "style_num,style_name,approach,question\n\
             1,Democratic,behavior,I ask the team for input before deciding\n\
             1,Democratic,behavior,I put decisions to a vote when time allows\n\
             2,Autocratic,behavior,I decide quickly and expect the team to follow\n",
        )
        .unwrap()
    }

    fn engine(mode: AggregationMode) -> ScoreEngine {
        ScoreEngine::new(&ScoringConfig {
            mode,
            ..ScoringConfig::default()
        })
    }

    fn submission(answers: &[(u32, u8)]) -> Submission {
        Submission {
            name: "Jo".into(),
            identifier: "19930510".into(),
            presented: answers.iter().map(|(id, _)| *id).collect(),
            answers: answers
                .iter()
                .map(|&(id, level)| (id, AnswerValue::Level(level)))
                .collect(),
        }
    }

    #[test]
    fn sum_and_mean_from_same_inputs() {
        // q1:5 and q2:5, both Democratic → weights +2 and +2
        let sub = submission(&[(1, 5), (2, 5)]);

        let summed = engine(AggregationMode::Sum).summarize(&bank(), &sub);
        assert!((summed[0].score - 4.0).abs() < EPS);

        let averaged = engine(AggregationMode::Mean).summarize(&bank(), &sub);
        assert!((averaged[0].score - 2.0).abs() < EPS);
    }

    #[test]
    fn tendency_follows_the_configured_mode() {
        // Democratic sum = 4.0 → Moderate under the default thresholds
        let sub = submission(&[(1, 5), (2, 5)]);
        let summaries = engine(AggregationMode::Sum).summarize(&bank(), &sub);
        assert_eq!(summaries[0].tendency, Tendency::Moderate);

        // All ones → sum -4.0 → Low
        let sub = submission(&[(1, 1), (2, 1)]);
        let summaries = engine(AggregationMode::Sum).summarize(&bank(), &sub);
        assert_eq!(summaries[0].tendency, Tendency::Low);
    }

    #[test]
    fn one_summary_per_style_in_display_order() {
        let sub = submission(&[(1, 4)]);
        let summaries = engine(AggregationMode::Sum).summarize(&bank(), &sub);
        let names: Vec<&str> = summaries.iter().map(|s| s.style_name.as_str()).collect();
        assert_eq!(names, vec!["Democratic", "Autocratic"]);
    }

    #[test]
    fn unanswered_style_scores_zero() {
        let sub = submission(&[(1, 4)]);
        let summaries = engine(AggregationMode::Sum).summarize(&bank(), &sub);
        assert_eq!(summaries[1].answered, 0);
        assert_eq!(summaries[1].score, 0.0);
        assert_eq!(summaries[1].tendency, Tendency::Moderate);
    }

    #[test]
    fn unmapped_question_is_skipped() {
        let mut sub = submission(&[(1, 5)]);
        sub.answers.insert(999, AnswerValue::Level(5));
        let summaries = engine(AggregationMode::Sum).summarize(&bank(), &sub);
        // only the mapped answer counts
        assert!((summaries[0].score - 2.0).abs() < EPS);
        assert_eq!(summaries[0].answered, 1);
    }

    #[test]
    fn rescoring_is_idempotent() {
        let sub = submission(&[(1, 2), (2, 5), (3, 1)]);
        let eng = engine(AggregationMode::Sum);
        let first = eng.summarize(&bank(), &sub);
        let second = eng.summarize(&bank(), &sub);
        assert_eq!(first, second);
    }

    #[test]
    fn every_summary_has_a_description() {
        let sub = submission(&[(1, 5), (2, 5), (3, 1)]);
        let summaries = engine(AggregationMode::Sum).summarize(&bank(), &sub);
        for summary in &summaries {
            assert!(!summary.description.is_empty());
        }
    }

    #[test]
    fn unknown_style_gets_a_placeholder() {
        let bank = QuestionBank::from_csv(
            "style_num,style_name,approach,question\n\
             9,Freeform,behavior,I make it up as I go\n",
        )
        .unwrap();
        let sub = submission(&[(1, 5)]);
        let summaries = engine(AggregationMode::Sum).summarize(&bank, &sub);
        assert!(summaries[0].description.starts_with("[No interpretation"));
    }

    #[test]
    fn label_answers_score_like_levels() {
        let mut sub = submission(&[]);
        sub.presented = vec![1, 2];
        sub.answers
            .insert(1, AnswerValue::Label("Strongly Agree".into()));
        sub.answers.insert(2, AnswerValue::Label("Disagree".into()));
        let summaries = engine(AggregationMode::Sum).summarize(&bank(), &sub);
        // +2 - 1 = 1.0
        assert!((summaries[0].score - 1.0).abs() < EPS);
    }

    #[test]
    fn chart_max_tracks_mode() {
        assert_eq!(engine(AggregationMode::Sum).chart_max(5), 10.0);
        assert_eq!(engine(AggregationMode::Mean).chart_max(5), 2.0);
    }
}
