//! Core engine — team selection and the statistics derived from it.

pub mod selection;
pub mod stats;

pub use selection::TeamSelectionEngine;
