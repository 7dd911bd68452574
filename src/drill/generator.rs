//! Random problem generation.
//!
//! Subtraction bounds the second operand by the first and division draws the
//! divisor and quotient before multiplying, so every problem has a
//! non-negative integer answer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::{Operator, Problem};

/// Draw a problem with an operator chosen uniformly among the four.
///
/// The returned problem has `id == 0`; callers stamp their own id.
pub fn generate<R: Rng>(rng: &mut R) -> Problem {
    let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
    generate_with(operator, rng)
}

/// Draw a problem for a fixed operator.
pub fn generate_with<R: Rng>(operator: Operator, rng: &mut R) -> Problem {
    let (operand1, operand2, answer) = match operator {
        Operator::Add => {
            let a = rng.gen_range(1..=20);
            let b = rng.gen_range(1..=20);
            (a, b, a + b)
        }
        Operator::Subtract => {
            let a = rng.gen_range(3..=21);
            let b = rng.gen_range(1..a);
            (a, b, a - b)
        }
        Operator::Multiply => {
            let a = rng.gen_range(1..=10);
            let b = rng.gen_range(1..=10);
            (a, b, a * b)
        }
        Operator::Divide => {
            let divisor = rng.gen_range(2..=10);
            let quotient = rng.gen_range(1..=10);
            (divisor * quotient, divisor, quotient)
        }
    };

    Problem {
        id: 0,
        operand1,
        operand2,
        operator,
        answer,
    }
}

/// Owns the session RNG and hands out problems with unique ids.
pub struct ProblemGenerator {
    rng: StdRng,
    last_id: u64,
}

impl ProblemGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            last_id: 0,
        }
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            last_id: 0,
        }
    }

    /// Next problem, stamped with `now_ms` (bumped if not past the last id).
    pub fn next_problem(&mut self, now_ms: u64) -> Problem {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        Problem {
            id,
            ..generate(&mut self.rng)
        }
    }
}
