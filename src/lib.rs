//! Single-player Snake: a fixed-interval grid simulation with a persisted
//! top-10 table, plus the terminal front end that drives it.

pub mod app;
pub mod config;
pub mod engine;
pub mod food;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod state;
pub mod terminal_runtime;
pub mod ticker;
pub mod ui;
