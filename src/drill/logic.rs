//! Math Drill session logic — pure functions over `DrillState`, fully testable.

use super::generator::ProblemGenerator;
use super::state::{DrillState, Feedback, PendingAdvance, Phase, Problem};
use crate::log::DrillEvent;

/// Ticks the problem card flashes after a submission.
const FLASH_TICKS: u32 = 6;

/// Parse a submitted answer. `None` for anything that is not a whole
/// non-negative number ("", "-", "8a", "1.5").
pub fn parse_answer(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Append a digit to the answer field. Other characters are rejected here so
/// the field only ever holds a number.
pub fn type_digit(state: &mut DrillState, c: char) -> bool {
    if !state.phase.is_idle()
        || !c.is_ascii_digit()
        || state.input.len() >= state.config.max_input_len
    {
        return false;
    }
    state.input.push(c);
    true
}

/// Remove the last typed digit.
pub fn erase(state: &mut DrillState) -> bool {
    if !state.phase.is_idle() {
        return false;
    }
    state.input.pop().is_some()
}

/// Submit whatever is in the answer field.
pub fn submit_input(state: &mut DrillState) -> Option<Feedback> {
    let text = state.input.clone();
    submit_answer(state, &text)
}

/// Check `text` against the current problem.
///
/// Returns `None` (and changes nothing) when the text is blank or feedback is
/// already showing. Non-numeric text is judged incorrect.
pub fn submit_answer(state: &mut DrillState, text: &str) -> Option<Feedback> {
    let given = text.trim();
    if given.is_empty() || !state.phase.is_idle() {
        return None;
    }

    let problem_id = state.current_problem.id;
    let is_correct = parse_answer(given) == Some(state.current_problem.answer);
    let feedback = if is_correct {
        Feedback::Correct
    } else {
        Feedback::Incorrect
    };

    state.stats.answered += 1;
    state.flash = FLASH_TICKS;
    let equation = state.current_problem.equation();
    match feedback {
        Feedback::Correct => {
            state.stats.correct += 1;
            state.phase = Phase::Correct {
                pending: PendingAdvance {
                    problem_id,
                    remaining_ticks: state.config.correct_delay_ticks(),
                },
            };
            state.add_log(format!("✔ {}", equation), Some(feedback));
        }
        Feedback::Incorrect => {
            state.stats.streak = 0;
            state.phase = Phase::Incorrect {
                given: given.to_string(),
            };
            state.add_log(format!("✘ {} (you: {})", equation, given), Some(feedback));
        }
    }

    state.events.push(DrillEvent::AnswerSubmitted {
        problem_id,
        given: given.to_string(),
        feedback,
    });
    Some(feedback)
}

/// Move on after an incorrect answer. Only valid while the miss is shown.
pub fn continue_after_incorrect(
    state: &mut DrillState,
    generator: &mut ProblemGenerator,
    now_ms: u64,
) -> bool {
    if !matches!(state.phase, Phase::Incorrect { .. }) {
        return false;
    }
    state.stats.streak = 0;
    state.events.push(DrillEvent::Continued {
        problem_id: state.current_problem.id,
    });
    install_problem(state, generator.next_problem(now_ms));
    true
}

/// Advance the session by `delta_ticks`. Fires the pending auto-advance once
/// its delay has elapsed. Returns true if a new problem was installed.
pub fn tick(
    state: &mut DrillState,
    delta_ticks: u32,
    generator: &mut ProblemGenerator,
    now_ms: u64,
) -> bool {
    if delta_ticks == 0 {
        return false;
    }
    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);
    state.flash = state.flash.saturating_sub(delta_ticks);

    let current_id = state.current_problem.id;
    let stale = matches!(
        &state.phase,
        Phase::Correct { pending } if pending.problem_id != current_id
    );
    if stale {
        // Scheduled for a problem that is no longer shown.
        cancel_pending(state);
        return false;
    }
    let due = match &mut state.phase {
        Phase::Correct { pending } => {
            pending.remaining_ticks = pending.remaining_ticks.saturating_sub(delta_ticks);
            pending.remaining_ticks == 0
        }
        _ => false,
    };
    if !due {
        return false;
    }

    let awarded = state.config.award_for(state.stats.streak);
    state.stats.score += awarded;
    state.stats.streak += 1;
    state.stats.best_streak = state.stats.best_streak.max(state.stats.streak);
    state.events.push(DrillEvent::Advanced {
        awarded,
        score: state.stats.score,
        streak: state.stats.streak,
    });
    install_problem(state, generator.next_problem(now_ms));
    true
}

/// Throw away the session (and any pending advance) and start over.
pub fn restart(state: &mut DrillState, generator: &mut ProblemGenerator, now_ms: u64) {
    state.events.push(DrillEvent::Restarted {
        final_score: state.stats.score,
        best_streak: state.stats.best_streak,
    });
    state.stats = Default::default();
    state.log.clear();
    state.add_log("New session started", None);
    install_problem(state, generator.next_problem(now_ms));
}

/// Discard a scheduled auto-advance, if any.
pub fn cancel_pending(state: &mut DrillState) {
    if matches!(state.phase, Phase::Correct { .. }) {
        state.phase = Phase::Idle;
    }
}

/// Replace the current problem wholesale and reset the answer field.
fn install_problem(state: &mut DrillState, problem: Problem) {
    cancel_pending(state);
    state.phase = Phase::Idle;
    state.input.clear();
    state.flash = 0;
    state.events.push(DrillEvent::ProblemShown {
        problem: problem.clone(),
    });
    state.current_problem = problem;
}
