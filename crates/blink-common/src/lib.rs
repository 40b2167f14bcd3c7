#![doc = "Common types shared across the blink timer workspace."]

pub mod config;
pub mod state;
pub mod time;

pub use config::*;
pub use state::*;
pub use time::*;
