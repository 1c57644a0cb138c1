//! CLI command implementations
//!
//! `interpolate` drives a run; `generate` and `plot` supply its input and
//! consume its output.

pub mod generate;
pub mod interpolate;
pub mod plot;
