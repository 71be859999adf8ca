//! Quiz session state
//!
//! A session is an owned value. Callers keep it and pass it back into the
//! engine on every call.

use serde::Serialize;
use crate::{GradeResult, QuizProblem};

/// Points awarded for each correct submission
pub const SCORE_PER_CORRECT: u32 = 10;

/// Where a session is in the answer cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// A problem is showing and has not been graded yet
    AwaitingAnswer,
    /// At least one answer was graded against the current problem
    Graded,
}

/// One learner's quiz: the current problem and the running score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSession {
    problem: QuizProblem,
    score: u32,
    phase: QuizPhase,
    last_grade: Option<GradeResult>,
}

impl QuizSession {
    /// Fresh session on the default problem (5 km to m) with score 0
    pub fn new() -> Self {
        Self::with_problem(QuizProblem::default())
    }

    /// Fresh session on a chosen problem
    pub fn with_problem(problem: QuizProblem) -> Self {
        QuizSession {
            problem,
            score: 0,
            phase: QuizPhase::AwaitingAnswer,
            last_grade: None,
        }
    }

    pub fn problem(&self) -> &QuizProblem {
        &self.problem
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn last_grade(&self) -> Option<GradeResult> {
        self.last_grade
    }

    /// Grade an answer against the current problem.
    ///
    /// Every correct submission scores, including repeats on the same problem.
    pub(crate) fn record(&mut self, candidate: f64) -> GradeResult {
        let grade = self.problem.grade(candidate);
        if grade.correct {
            self.score += SCORE_PER_CORRECT;
        }
        self.phase = QuizPhase::Graded;
        self.last_grade = Some(grade);
        grade
    }

    /// Swap in a new problem, keeping the score
    pub(crate) fn advance(&mut self, problem: QuizProblem) {
        self.problem = problem;
        self.phase = QuizPhase::AwaitingAnswer;
        self.last_grade = None;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
