//! # Config Crate
//!
//! Centralized configuration constants for the parametric-surface
//! tessellation pipeline. All magic numbers and tunable parameters are
//! defined here to ensure consistency across crates and easy configuration
//! management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_DETAIL};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use the default resolution for tessellation
//! let user_detail: Option<u32> = None;
//! let detail = user_detail.unwrap_or(DEFAULT_DETAIL);
//! assert_eq!(detail, DEFAULT_DETAIL);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
