//! Structured session events written to the browser console as JSON.

use serde::Serialize;

use crate::drill::state::{Feedback, Problem};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DrillEvent {
    ProblemShown {
        problem: Problem,
    },
    AnswerSubmitted {
        problem_id: u64,
        given: String,
        feedback: Feedback,
    },
    /// Auto-advance after a correct answer fired.
    Advanced {
        awarded: u64,
        score: u64,
        streak: u32,
    },
    /// The player moved on after a miss.
    Continued {
        problem_id: u64,
    },
    Restarted {
        final_score: u64,
        best_streak: u32,
    },
}

/// One JSON line per event.
pub fn to_line(event: &DrillEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

/// Write events to the console.
#[cfg(target_arch = "wasm32")]
pub fn emit(events: &[DrillEvent]) {
    for event in events {
        match to_line(event) {
            Ok(line) => web_sys::console::log_1(&line.into()),
            Err(e) => web_sys::console::warn_1(
                &format!("Math Drill: イベントのシリアライズに失敗: {e}").into(),
            ),
        }
    }
}

/// No console off the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(_events: &[DrillEvent]) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill::state::Operator;

    #[test]
    fn events_are_tagged_json() {
        let line = to_line(&DrillEvent::Advanced {
            awarded: 12,
            score: 22,
            streak: 2,
        })
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["event"], "advanced");
        assert_eq!(v["awarded"], 12);
        assert_eq!(v["streak"], 2);
    }

    #[test]
    fn problem_shown_carries_operator_name() {
        let line = to_line(&DrillEvent::ProblemShown {
            problem: Problem {
                id: 7,
                operand1: 9,
                operand2: 3,
                operator: Operator::Subtract,
                answer: 6,
            },
        })
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["event"], "problem_shown");
        assert_eq!(v["problem"]["operator"], "subtract");
        assert_eq!(v["problem"]["answer"], 6);
    }

    #[test]
    fn submitted_feedback_is_snake_case() {
        let line = to_line(&DrillEvent::AnswerSubmitted {
            problem_id: 1,
            given: "4".into(),
            feedback: Feedback::Incorrect,
        })
        .unwrap();
        assert!(line.contains(r#""feedback":"incorrect""#), "got: {}", line);
    }
}
