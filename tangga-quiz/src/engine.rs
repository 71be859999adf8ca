//! Problem generation and the submit / advance cycle

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use tangga_units::{Domain, UNITS};
use crate::problem::SOURCE_VALUE_RANGE;
use crate::{GradeResult, QuizProblem, QuizSession};

/// Upper bound on target redraws before stepping to a neighbouring rung
const MAX_TARGET_REDRAWS: usize = 64;

/// Drives quiz sessions with a random source
///
/// The engine owns no session state; it only owns the RNG.
#[derive(Debug)]
pub struct QuizEngine<R = SmallRng> {
    rng: R,
}

impl QuizEngine<SmallRng> {
    /// Engine seeded from OS entropy
    pub fn from_entropy() -> Self {
        QuizEngine { rng: SmallRng::from_entropy() }
    }

    /// Engine with a fixed seed, for reproducible quizzes
    pub fn seeded(seed: u64) -> Self {
        QuizEngine { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn new(rng: R) -> Self {
        QuizEngine { rng }
    }

    /// Start a session on the default problem with score 0
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new()
    }

    /// Draw a random problem.
    ///
    /// Without a domain, Length and Mass are equally likely. The source unit
    /// is drawn once; only the target is redrawn while it equals the source.
    pub fn generate_problem(&mut self, domain: Option<Domain>) -> QuizProblem {
        let domain = domain.unwrap_or_else(|| Domain::ALL[self.rng.gen_range(0..Domain::ALL.len())]);
        let ladder = UNITS.ladder(domain);
        debug_assert!(ladder.len() >= 2);

        let source_value = self.rng.gen_range(SOURCE_VALUE_RANGE);
        let source_index = self.rng.gen_range(0..ladder.len());
        let mut target_index = self.rng.gen_range(0..ladder.len());

        let mut redraws = 0;
        while target_index == source_index {
            if redraws == MAX_TARGET_REDRAWS {
                warn!(%domain, redraws, "target kept matching source, using neighbouring rung");
                target_index = (source_index + 1) % ladder.len();
                break;
            }
            target_index = self.rng.gen_range(0..ladder.len());
            redraws += 1;
        }

        let problem = QuizProblem::from_units(domain, &ladder[source_index], &ladder[target_index], source_value);
        debug!(
            %domain,
            source = problem.source.name,
            target = problem.target.name,
            source_value,
            redraws,
            "generated problem"
        );
        problem
    }

    /// Grade an answer against the session's current problem.
    ///
    /// A correct answer adds 10 points every time it is submitted, even
    /// repeatedly against the same problem. The problem is left in place.
    pub fn submit_answer(&self, session: &mut QuizSession, candidate: f64) -> GradeResult {
        let grade = session.record(candidate);
        info!(
            correct = grade.correct,
            expected = grade.expected,
            candidate,
            score = session.score(),
            "graded answer"
        );
        grade
    }

    /// Replace the session's problem with a fresh one, keeping the score
    pub fn next_problem(&mut self, session: &mut QuizSession, domain: Option<Domain>) {
        let problem = self.generate_problem(domain);
        session.advance(problem);
    }
}
