//! Math Drill game state.

use serde::Serialize;

use super::config::DrillConfig;
use crate::log::DrillEvent;

/// Maximum lines kept in the result log.
const LOG_CAPACITY: usize = 30;

/// Arithmetic operator of a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Hint shown next to the worked answer after a miss.
    pub fn hint(self) -> &'static str {
        match self {
            Operator::Add => "Add them together!",
            Operator::Subtract => "Take the second number away!",
            Operator::Multiply => "Count the groups!",
            Operator::Divide => "Split into equal groups!",
        }
    }
}

/// A single two-operand problem. Replaced wholesale, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Refresh token; strictly increasing within a session.
    pub id: u64,
    pub operand1: u32,
    pub operand2: u32,
    pub operator: Operator,
    pub answer: u32,
}

impl Problem {
    /// `"12 + 7"`
    pub fn question(&self) -> String {
        format!(
            "{} {} {}",
            self.operand1,
            self.operator.symbol(),
            self.operand2
        )
    }

    /// `"12 + 7 = 19"`
    pub fn equation(&self) -> String {
        format!("{} = {}", self.question(), self.answer)
    }
}

/// Outcome of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Deferred auto-advance scheduled after a correct answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    /// Problem this advance belongs to; a mismatch means it is stale.
    pub problem_id: u64,
    pub remaining_ticks: u32,
}

/// Presentation phase: Idle → Correct/Incorrect → Idle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Correct { pending: PendingAdvance },
    Incorrect { given: String },
}

impl Phase {
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            Phase::Idle => None,
            Phase::Correct { .. } => Some(Feedback::Correct),
            Phase::Incorrect { .. } => Some(Feedback::Incorrect),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }
}

/// Score and streak for the running session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub score: u64,
    /// Consecutive first-try correct answers.
    pub streak: u32,
    pub best_streak: u32,
    /// Submissions accepted (correct or not).
    pub answered: u32,
    pub correct: u32,
}

/// A line in the result log.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub feedback: Option<Feedback>,
}

pub struct DrillState {
    pub config: DrillConfig,
    pub current_problem: Problem,
    pub stats: SessionStats,
    pub phase: Phase,
    /// Digits typed into the answer field.
    pub input: String,
    /// Result log, newest last.
    pub log: Vec<LogEntry>,
    /// Events waiting to be written to the console.
    pub events: Vec<DrillEvent>,
    /// Remaining ticks of the card flash after a submission.
    pub flash: u32,
    /// Animation frame counter.
    pub anim_frame: u32,
}

impl DrillState {
    pub fn new(config: DrillConfig, first: Problem) -> Self {
        let mut state = Self {
            config,
            current_problem: first,
            stats: SessionStats::default(),
            phase: Phase::Idle,
            input: String::new(),
            log: Vec::new(),
            events: Vec::new(),
            flash: 0,
            anim_frame: 0,
        };
        state.events.push(DrillEvent::ProblemShown {
            problem: state.current_problem.clone(),
        });
        state
    }

    pub fn add_log(&mut self, text: impl Into<String>, feedback: Option<Feedback>) {
        self.log.push(LogEntry {
            text: text.into(),
            feedback,
        });
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }

    /// Share of accepted submissions that were correct, in percent.
    pub fn accuracy_percent(&self) -> Option<u32> {
        if self.stats.answered == 0 {
            return None;
        }
        Some(self.stats.correct * 100 / self.stats.answered)
    }
}
