//! # Primitives
//!
//! Surface samplers for the four parametric primitives (pipe, arrow,
//! Möbius strip, Klein-bottle bagel).

pub mod arrow;
pub mod bagel;
pub mod mobius;
pub mod pipe;

pub use arrow::{arrow, ArrowParams};
pub use bagel::{bagel, BagelParams};
pub use mobius::{mobius, MobiusParams};
pub use pipe::{pipe, Caps, PipeParams};
