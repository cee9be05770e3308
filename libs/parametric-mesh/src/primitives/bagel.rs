//! # Klein-Bottle "Bagel" Primitive
//!
//! Samples the figure-8 ("bagel") immersion of the Klein bottle.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use config::constants::{
    DEFAULT_BAGEL_DETAIL, DEFAULT_BAGEL_MAJOR_RADIUS, DEFAULT_BAGEL_MINOR_RADIUS,
};

use crate::error::MeshError;
use crate::recorder::GeometryRecorder;

/// Parameters for the Klein-bottle bagel sampler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagelParams {
    /// Subdivisions around the major (ring) direction (≥ 1)
    pub major_detail: u32,
    /// Subdivisions around the minor (tube) direction (≥ 1)
    pub minor_detail: u32,
    /// Ring radius (≥ 0)
    pub major_radius: f64,
    /// Tube radius (≥ 0)
    pub minor_radius: f64,
}

impl Default for BagelParams {
    fn default() -> Self {
        Self {
            major_detail: DEFAULT_BAGEL_DETAIL,
            minor_detail: DEFAULT_BAGEL_DETAIL,
            major_radius: DEFAULT_BAGEL_MAJOR_RADIUS,
            minor_radius: DEFAULT_BAGEL_MINOR_RADIUS,
        }
    }
}

/// Evaluates the immersion at ring angle `theta` and tube angle `phi`.
fn bagel_point(theta: f64, phi: f64, major_radius: f64, minor_radius: f64) -> DVec3 {
    let half = theta / 2.0;
    let common =
        major_radius + minor_radius * (half.cos() * phi.sin() - half.sin() * (2.0 * phi).sin());
    DVec3::new(
        common * theta.cos(),
        common * theta.sin(),
        minor_radius * (half.sin() * phi.sin() + half.cos() * (2.0 * phi).sin()),
    )
}

/// Samples the bagel immersion into the open capture.
///
/// Walks major rings i = 0..=major_detail; within each ring, minor index
/// j = 0..=minor_detail. A rolling buffer keeps the previous major ring's
/// `minor_detail + 1` points; from the second ring onward every minor
/// index emits a (previous, current) strip pair. The first ring only
/// seeds the buffer, so the strip holds exactly
/// `major_detail * (minor_detail + 1)` pairs.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] for a zero detail or a negative
///   radius, before any vertex is emitted.
/// - [`MeshError::CaptureState`] when no capture is open.
pub fn bagel(recorder: &mut GeometryRecorder, params: &BagelParams) -> Result<(), MeshError> {
    if params.major_detail == 0 || params.minor_detail == 0 {
        return Err(MeshError::invalid_parameter(format!(
            "Bagel details must be at least 1: major={}, minor={}",
            params.major_detail, params.minor_detail
        )));
    }
    if params.major_radius < 0.0 || params.minor_radius < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Bagel radii must be non-negative: major={}, minor={}",
            params.major_radius, params.minor_radius
        )));
    }

    if !recorder.is_capturing() {
        return Err(MeshError::capture_state("bagel requires an open capture"));
    }

    let major = params.major_detail;
    let minor = params.minor_detail;

    let mut last_ring: Vec<(DVec3, DVec2)> = Vec::with_capacity(minor as usize + 1);

    let state = recorder.push_state();

    recorder.begin_strip()?;
    for i in 0..=major {
        let theta = f64::from(i) * TAU / f64::from(major);
        for j in 0..=minor {
            let phi = f64::from(j) * TAU / f64::from(minor);
            let point = bagel_point(theta, phi, params.major_radius, params.minor_radius);
            let uv = DVec2::new(f64::from(j) / f64::from(minor), f64::from(i) / f64::from(major));

            if i == 0 {
                last_ring.push((point, uv));
            } else {
                let (last_point, last_uv) = last_ring[j as usize];
                recorder.vertex(last_point, last_uv.x, last_uv.y)?;
                recorder.vertex(point, uv.x, uv.y)?;
                last_ring[j as usize] = (point, uv);
            }
        }
    }
    recorder.end_strip()?;

    recorder.pop_state(state);
    Ok(())
}
