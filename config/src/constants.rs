//! # Configuration Constants
//!
//! Centralized constants for the tessellation pipeline. All geometry
//! calculations, tessellation resolutions, and precision values are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation detail counts
//! - **Primitive Defaults**: Default radii and heights per primitive
//! - **Arrow Proportions**: Head/body ratios of the composed arrow

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default detail (sample count) for single-parameter primitives.
///
/// Controls how finely the pipe, arrow, and Möbius samplers subdivide
/// their parameter range. A primitive with detail `n` traces `n + 1`
/// samples (both endpoints inclusive).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DETAIL;
///
/// let samples = DEFAULT_DETAIL + 1;
/// assert_eq!(samples, 17);
/// ```
pub const DEFAULT_DETAIL: u32 = 16;

/// Default detail for both directions of the Klein-bottle bagel.
///
/// The bagel subdivides two parameter ranges (major and minor) and
/// defaults to a finer resolution than the single-parameter primitives.
pub const DEFAULT_BAGEL_DETAIL: u32 = 32;

// =============================================================================
// PRIMITIVE DEFAULT DIMENSIONS
// =============================================================================

/// Default radius for the pipe and arrow primitives.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// Default height for the pipe and arrow primitives.
pub const DEFAULT_HEIGHT: f64 = 50.0;

/// Default radius for the Möbius strip.
///
/// The Möbius parametrization is computed on a unit ring and scaled by
/// this radius at emission time.
pub const DEFAULT_MOBIUS_RADIUS: f64 = 50.0;

/// Default major (ring) radius for the Klein-bottle bagel.
pub const DEFAULT_BAGEL_MAJOR_RADIUS: f64 = 30.0;

/// Default minor (tube) radius for the Klein-bottle bagel.
pub const DEFAULT_BAGEL_MINOR_RADIUS: f64 = 20.0;

// =============================================================================
// ARROW PROPORTIONS
// =============================================================================

/// Fraction of the arrow's total height occupied by the head cone.
///
/// # Example
///
/// ```rust
/// use config::constants::{ARROW_HEAD_HEIGHT_RATIO, ARROW_BODY_HEIGHT_RATIO};
///
/// // Head and body always partition the full height
/// assert_eq!(ARROW_HEAD_HEIGHT_RATIO + ARROW_BODY_HEIGHT_RATIO, 1.0);
/// ```
pub const ARROW_HEAD_HEIGHT_RATIO: f64 = 0.3;

/// Fraction of the arrow's total height occupied by the cylindrical body.
pub const ARROW_BODY_HEIGHT_RATIO: f64 = 0.7;

/// Ratio of the head cone's base radius to the arrow's nominal radius.
///
/// The head flares out wider than the body so the silhouette reads as an
/// arrow rather than a capped rod.
pub const ARROW_HEAD_RADIUS_RATIO: f64 = 1.6;
