use std::time::Instant;

use log::info;

use crate::engine::GameEngine;
use crate::input::GameInput;
use crate::ticker::Ticker;

/// Whether the main loop should keep going.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Couples the engine with its tick schedule.
///
/// The ticker runs only while the engine can make progress: pausing or
/// losing stops it, resuming or resetting starts a fresh interval.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    ticker: Ticker,
}

impl App {
    /// Wraps `engine` and starts ticking at its configured interval.
    #[must_use]
    pub fn new(engine: GameEngine, now: Instant) -> Self {
        let mut ticker = Ticker::new(engine.config().tick_interval);
        ticker.start(now);
        Self { engine, ticker }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Applies one decoded input event.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Control {
        match input {
            GameInput::Direction(direction) => self.engine.change_direction(direction),
            GameInput::Pause => self.toggle_pause(now),
            GameInput::Reset => self.reset(now),
            GameInput::Confirm => self.start_or_resume(now),
            GameInput::Quit => {
                info!("quit requested");
                return Control::Quit;
            }
        }

        Control::Continue
    }

    /// Runs the engine tick if one is due. Returns true when state changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }

        let continues = self.engine.tick();
        if !continues && self.engine.state().is_game_over {
            self.ticker.stop();
        }

        true
    }

    fn toggle_pause(&mut self, now: Instant) {
        self.engine.toggle_pause();

        let state = self.engine.state();
        if state.is_game_over {
            return;
        }

        if state.is_paused {
            self.ticker.stop();
        } else {
            self.ticker.restart(now);
        }
    }

    fn reset(&mut self, now: Instant) {
        self.ticker.stop();
        self.engine.reset_game();
        self.ticker.restart(now);
    }

    fn start_or_resume(&mut self, now: Instant) {
        let state = self.engine.state();
        if state.is_game_over {
            self.reset(now);
        } else if state.is_paused {
            self.toggle_pause(now);
        } else {
            self.ticker.start(now);
        }
    }
}
