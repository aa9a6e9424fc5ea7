use rand::Rng;
use tracing::{debug, info};

use crate::models::{Difficulty, Question};

use super::client::QuestionGenerator;
use super::fallback::fallback_question;
use super::prompt::build_prompt;
use super::topics::pick_topic;

/// Questions in one play-through.
pub const QUESTIONS_PER_QUIZ: usize = 10;

/// Produce exactly [`QUESTIONS_PER_QUIZ`] questions for `level`.
///
/// Requests go out one at a time, in draw order. `on_progress` is called
/// with the zero-based ordinal before each request. A draw the generator
/// cannot fill gets a fallback question, so this never fails.
pub async fn acquire_questions<G, R, F>(
    generator: &G,
    level: Difficulty,
    rng: &mut R,
    mut on_progress: F,
) -> Vec<Question>
where
    G: QuestionGenerator + ?Sized,
    R: Rng + Send + ?Sized,
    F: FnMut(usize) + Send,
{
    let mut questions = Vec::with_capacity(QUESTIONS_PER_QUIZ);
    let mut fallbacks = 0;

    for ordinal in 0..QUESTIONS_PER_QUIZ {
        on_progress(ordinal);

        let topic = pick_topic(rng);
        let prompt = build_prompt(level, topic);
        debug!(ordinal, topic, %level, "requesting question");

        let question = match generator.request(&prompt).await {
            Some(question) => question,
            None => {
                fallbacks += 1;
                fallback_question(topic, level, ordinal)
            }
        };
        questions.push(question);
    }

    info!(%level, fallbacks, "acquired {} questions", questions.len());
    questions
}
