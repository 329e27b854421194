//! Terminal rendering module
//!
//! Draws the world as colored cells with crossterm. The simulation never
//! depends on anything in here.

pub mod term;

pub use term::TermRenderer;
