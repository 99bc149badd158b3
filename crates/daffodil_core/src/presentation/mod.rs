//! Screen models bound by the UI layer.
//!
//! # Responsibility
//! - Hold the data each application screen displays.
//! - Keep one collection component per screen, built with the screen.
//!
//! # Invariants
//! - A collection's `items` sequence always exists; it may be empty.
//! - A screen keeps the same collection component for its whole lifetime.

pub mod books_screen;
pub mod splash_screen;
