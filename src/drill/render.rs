//! Math Drill rendering: score bar, problem card, answer field, feedback,
//! keypad and result log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{render_button, ClickableList};

use super::actions::{digit_for, CONTINUE, ERASE, KEYPAD, RESTART, SUBMIT};
use super::state::{DrillState, Feedback, Phase};

/// Keypad rows × cell height plus borders.
const KEYPAD_HEIGHT: u16 = 4 * 2 + 2;
/// One row per keypad row, for short screens.
const KEYPAD_COMPACT_HEIGHT: u16 = 4 + 2;
/// Smallest results log worth drawing: borders plus two entries.
const LOG_MIN_HEIGHT: u16 = 4;

pub fn render(state: &DrillState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cs = click_state.borrow_mut();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    render_score_bar(state, f, chunks[0]);
    if is_narrow_layout(area.width) {
        render_narrow(state, f, chunks[1], &mut cs);
    } else {
        render_wide(state, f, chunks[1], &mut cs);
    }
    render_button(
        f,
        chunks[2],
        &mut cs,
        Line::from(Span::styled(
            "[R] Restart session",
            Style::default().fg(Color::DarkGray),
        )),
        Style::default().fg(Color::DarkGray),
        RESTART,
    );
}

/// Wide: drill column | keypad + log column.
fn render_wide(state: &DrillState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(cols[0]);
    render_problem_card(state, f, left[0]);
    render_answer_field(state, f, left[1], cs);
    render_feedback(state, f, left[2], cs);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(KEYPAD_HEIGHT), Constraint::Min(3)])
        .split(cols[1]);
    render_keypad(state, f, right[0], cs);
    render_log(state, f, right[1]);
}

/// Narrow: everything stacked. Short screens get a one-row-per-key keypad;
/// the results log only shows up when the full keypad already fits.
fn render_narrow(state: &DrillState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let (keypad_height, log_height) = narrow_heights(area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(keypad_height),
            Constraint::Length(log_height),
        ])
        .split(area);
    render_problem_card(state, f, chunks[0]);
    render_answer_field(state, f, chunks[1], cs);
    render_feedback(state, f, chunks[2], cs);
    render_keypad(state, f, chunks[3], cs);
    if log_height > 0 {
        render_log(state, f, chunks[4]);
    }
}

/// Keypad and log heights for a narrow main area of `height` rows.
fn narrow_heights(height: u16) -> (u16, u16) {
    const ABOVE: u16 = 5 + 3 + 6;
    if height < ABOVE + KEYPAD_HEIGHT {
        return (KEYPAD_COMPACT_HEIGHT, 0);
    }
    let spare = height - ABOVE - KEYPAD_HEIGHT;
    let log_height = if spare >= LOG_MIN_HEIGHT { spare.min(8) } else { 0 };
    (KEYPAD_HEIGHT, log_height)
}

fn feedback_color(state: &DrillState) -> Color {
    match state.phase.feedback() {
        None => Color::Cyan,
        Some(Feedback::Correct) => Color::Green,
        Some(Feedback::Incorrect) => Color::Red,
    }
}

fn render_score_bar(state: &DrillState, f: &mut Frame, area: Rect) {
    let stats = &state.stats;
    let accuracy = match state.accuracy_percent() {
        Some(p) => format!("{}%", p),
        None => "-".to_string(),
    };
    let streak_style = if stats.streak >= 3 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let line = Line::from(vec![
        Span::styled("Score ", Style::default().fg(Color::Gray)),
        Span::styled(
            stats.score.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  Streak ", Style::default().fg(Color::Gray)),
        Span::styled(stats.streak.to_string(), streak_style),
        Span::styled(
            format!(" (best {})", stats.best_streak),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("  │  Accuracy ", Style::default().fg(Color::Gray)),
        Span::styled(accuracy, Style::default().fg(Color::White)),
    ]);
    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Math Drill "),
    );
    f.render_widget(widget, area);
}

fn render_problem_card(state: &DrillState, f: &mut Frame, area: Rect) {
    let color = feedback_color(state);
    let mut border = Style::default().fg(color);
    // Blink the border while the submission flash runs.
    if state.flash > 0 && state.flash % 2 == 0 {
        border = border.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let question = Span::styled(
        state.current_problem.question(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    );
    let lines = vec![Line::from(""), Line::from(question)];
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Problem "),
    );
    f.render_widget(widget, area);
}

fn render_answer_field(state: &DrillState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let idle = state.phase.is_idle();
    let mut spans = Vec::new();
    if state.input.is_empty() {
        spans.push(Span::styled("?", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(
            state.input.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }
    if idle && (state.anim_frame / 5) % 2 == 0 {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let border = if idle { Color::Blue } else { Color::DarkGray };
    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Your answer "),
        );
    f.render_widget(widget, area);

    // Tapping the field checks the answer.
    if idle && !state.input.is_empty() {
        cs.add_click_target(area, SUBMIT);
    }
}

fn render_feedback(state: &DrillState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let mut cl = ClickableList::new();
    let problem = &state.current_problem;

    match &state.phase {
        Phase::Idle => {
            cl.push(Line::from(Span::styled(
                "Type the answer and press Enter.",
                Style::default().fg(Color::Gray),
            )));
            if !state.input.is_empty() {
                cl.push(Line::from(""));
                cl.push_clickable(
                    Line::from(Span::styled(
                        " ▶ Check answer",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
                    SUBMIT,
                );
            }
        }
        Phase::Correct { .. } => {
            // Small bounce: shift the banner one column every few ticks.
            let pad = if (state.anim_frame / 3) % 2 == 0 { "" } else { " " };
            cl.push(Line::from(Span::styled(
                format!("{}★ Correct! ★", pad),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(Span::styled(
                format!("+{} points", state.config.award_for(state.stats.streak)),
                Style::default().fg(Color::Yellow),
            )));
        }
        Phase::Incorrect { given } => {
            cl.push(Line::from(Span::styled(
                "Not quite!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(Span::styled(
                format!("You answered {}", given),
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(vec![
                Span::styled(
                    "Hint: ",
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Span::styled(problem.operator.hint(), Style::default().fg(Color::White)),
            ]));
            cl.push(Line::from(Span::styled(
                problem.equation(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    " [N] Next problem",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                CONTINUE,
            );
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(feedback_color(state)))
        .title(" Feedback ");
    let inner_width = block.inner(area).width;
    cl.register_targets(area, cs, 1, 1, inner_width);

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn keypad_label(action_id: u16) -> String {
    match action_id {
        ERASE => "⌫".to_string(),
        SUBMIT => "✓".to_string(),
        id => digit_for(id).map(String::from).unwrap_or_default(),
    }
}

fn render_keypad(state: &DrillState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let idle = state.phase.is_idle();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if idle { Color::Yellow } else { Color::DarkGray }))
        .title(" Keypad ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = cs.register_grid_targets(inner, 3, &KEYPAD);
    for (rect, &action_id) in cells.iter().zip(KEYPAD.iter()) {
        let style = if !idle {
            Style::default().fg(Color::DarkGray)
        } else if action_id == SUBMIT {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if action_id == ERASE {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let cell = Paragraph::new(Line::from(Span::styled(keypad_label(action_id), style)))
            .alignment(Alignment::Center);
        f.render_widget(cell, *rect);
    }
}

fn render_log(state: &DrillState, f: &mut Frame, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible);
    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            let color = match entry.feedback {
                Some(Feedback::Correct) => Color::Green,
                Some(Feedback::Incorrect) => Color::Red,
                None => Color::Gray,
            };
            Line::from(Span::styled(entry.text.as_str(), Style::default().fg(color)))
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Results "),
    );
    f.render_widget(widget, area);
}
