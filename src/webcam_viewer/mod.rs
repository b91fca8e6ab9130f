pub mod core;
pub mod dispatcher;
pub mod gui;
pub mod listeners;
pub mod poll_timer;
pub mod render;
pub mod run_effect;
