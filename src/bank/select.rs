use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use super::QuestionBank;

/// A question as shown to the user. The style is a direct field, so the
/// submission round-trip never has to parse it out of a composite key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentedQuestion {
    pub id: u32,
    pub text: String,
    pub style_code: u16,
    pub style_name: String,
}

/// Sample up to `max_per_style` questions per style without replacement,
/// then shuffle the combined list. A fresh selection on every call.
pub fn select_questions(bank: &QuestionBank, max_per_style: usize) -> Vec<PresentedQuestion> {
    select_with_rng(bank, max_per_style, &mut rand::thread_rng())
}

pub fn select_with_rng<R: Rng + ?Sized>(
    bank: &QuestionBank,
    max_per_style: usize,
    rng: &mut R,
) -> Vec<PresentedQuestion> {
    let mut picked = Vec::new();
    for style in bank.styles() {
        let pool = bank.questions_for(style.code);
        // choose_multiple yields min(max_per_style, pool.len()) items
        for q in pool.choose_multiple(rng, max_per_style) {
            picked.push(PresentedQuestion {
                id: q.id,
                text: q.text.clone(),
                style_code: style.code,
                style_name: style.name.clone(),
            });
        }
    }
    picked.shuffle(rng);
    picked
}
