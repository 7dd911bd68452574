//! Math Drill — arithmetic practice with score and streak bonuses.

pub mod actions;
pub mod config;
pub mod generator;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::log::DrillEvent;
use crate::time::wall_clock_ms;

use actions::*;
use config::DrillConfig;
use generator::ProblemGenerator;
use state::{DrillState, Phase};

/// Session controller: owns the state and the problem source.
pub struct DrillGame {
    pub state: DrillState,
    generator: ProblemGenerator,
}

impl DrillGame {
    pub fn new(config: DrillConfig) -> Self {
        Self::with_generator(config, ProblemGenerator::new())
    }

    pub fn with_generator(config: DrillConfig, mut generator: ProblemGenerator) -> Self {
        let first = generator.next_problem(wall_clock_ms());
        let mut state = DrillState::new(config, first);
        state.add_log("Solve the problem and press Enter", None);
        Self { state, generator }
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Enter => self.submit_or_continue(),
            InputEvent::Backspace => logic::erase(&mut self.state),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            '0'..='9' => logic::type_digit(&mut self.state, key),
            'n' | ' ' => self.continue_after_incorrect(),
            'r' => {
                self.restart();
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        if let Some(d) = digit_for(action_id) {
            return logic::type_digit(&mut self.state, d);
        }
        match action_id {
            ERASE => logic::erase(&mut self.state),
            SUBMIT => self.submit_or_continue(),
            CONTINUE => self.continue_after_incorrect(),
            RESTART => {
                self.restart();
                true
            }
            _ => false,
        }
    }

    /// Enter checks the answer, or moves on when a miss is showing.
    fn submit_or_continue(&mut self) -> bool {
        match self.state.phase {
            Phase::Idle => logic::submit_input(&mut self.state).is_some(),
            Phase::Incorrect { .. } => self.continue_after_incorrect(),
            Phase::Correct { .. } => false,
        }
    }

    fn continue_after_incorrect(&mut self) -> bool {
        logic::continue_after_incorrect(&mut self.state, &mut self.generator, wall_clock_ms())
    }

    pub fn restart(&mut self) {
        logic::restart(&mut self.state, &mut self.generator, wall_clock_ms());
    }

    /// Advance game logic by `delta_ticks` discrete ticks.
    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(
            &mut self.state,
            delta_ticks,
            &mut self.generator,
            wall_clock_ms(),
        );
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    /// Take the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<DrillEvent> {
        std::mem::take(&mut self.state.events)
    }
}
