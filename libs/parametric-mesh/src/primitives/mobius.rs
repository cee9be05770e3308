//! # Möbius Strip Primitive
//!
//! Samples a Möbius strip using the standard half-twist parametrization.

use std::f64::consts::TAU;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use config::constants::{DEFAULT_DETAIL, DEFAULT_MOBIUS_RADIUS};

use crate::error::MeshError;
use crate::recorder::GeometryRecorder;

/// Parameters for the Möbius strip sampler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobiusParams {
    /// Number of subdivisions along the strip (≥ 1)
    pub detail: u32,
    /// Scale applied to the unit parametrization (≥ 0)
    pub radius: f64,
}

impl Default for MobiusParams {
    fn default() -> Self {
        Self {
            detail: DEFAULT_DETAIL,
            radius: DEFAULT_MOBIUS_RADIUS,
        }
    }
}

/// Samples a Möbius strip into the open capture.
///
/// Steps the ring parameter by integer index (u = step · 2π/detail,
/// endpoints inclusive) and emits the two cross-section edge points per
/// step. The sign pairing is fixed: edge 0 takes the −½cos(u/2) radial
/// offset together with −½sin(u/2) for z, edge 1 the +½ pair; mixing the
/// signs differently would break the single half-twist.
///
/// After the loop one explicit closing pair is emitted at
/// (1.5·radius, 0, 0) and (0.5·radius, 0, 0), since the stepped parameter
/// is not guaranteed to land the strip exactly back on its start.
/// Total vertices: `2 * (detail + 1) + 2`.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] for `detail == 0` or a negative
///   radius, before any vertex is emitted.
/// - [`MeshError::CaptureState`] when no capture is open.
pub fn mobius(recorder: &mut GeometryRecorder, params: &MobiusParams) -> Result<(), MeshError> {
    if params.detail == 0 {
        return Err(MeshError::invalid_parameter(format!(
            "Möbius detail must be at least 1: {}",
            params.detail
        )));
    }
    if params.radius < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Möbius radius must be non-negative: {}",
            params.radius
        )));
    }

    if !recorder.is_capturing() {
        return Err(MeshError::capture_state("mobius requires an open capture"));
    }

    let detail = params.detail;
    let radius = params.radius;

    let state = recorder.push_state();

    recorder.begin_strip()?;
    for step in 0..=detail {
        let u = f64::from(step) * TAU / f64::from(detail);
        let half_cos = 0.5 * (u / 2.0).cos();
        let half_sin = 0.5 * (u / 2.0).sin();

        let edge0 = DVec3::new(
            (1.0 - half_cos) * u.cos(),
            (1.0 - half_cos) * u.sin(),
            -half_sin,
        );
        let edge1 = DVec3::new(
            (1.0 + half_cos) * u.cos(),
            (1.0 + half_cos) * u.sin(),
            half_sin,
        );

        let s = u / TAU;
        recorder.vertex(edge0 * radius, s, 0.0)?;
        recorder.vertex(edge1 * radius, s, 1.0)?;
    }

    // Close the loop back onto the starting cross-section
    recorder.vertex(DVec3::new(1.5 * radius, 0.0, 0.0), 1.0, 0.0)?;
    recorder.vertex(DVec3::new(0.5 * radius, 0.0, 0.0), 1.0, 1.0)?;
    recorder.end_strip()?;

    recorder.pop_state(state);
    Ok(())
}
