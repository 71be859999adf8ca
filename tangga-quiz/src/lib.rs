//! Tangga Quiz - random unit-conversion problems with scoring
//!
//! Cycle: `new_session` -> `submit_answer` (any number of times) ->
//! `next_problem` -> `submit_answer` ...
//!
//! Sessions are plain owned values. Nothing here is global, so independent
//! sessions can run side by side.

mod problem;
mod session;
mod engine;

pub use problem::{QuizProblem, GradeResult, QuizError, ANSWER_TOLERANCE, SOURCE_VALUE_RANGE};
pub use session::{QuizSession, QuizPhase, SCORE_PER_CORRECT};
pub use engine::QuizEngine;
