//! Terminal rendering split across logical submodules.

mod display;
mod helpers;

pub use display::{print_day, print_passage, print_pick};
