//! # Arrow Primitive
//!
//! Composes two pipes into an arrow: a cone head followed by a
//! cylindrical body, translated along +Z between the two.

use serde::{Deserialize, Serialize};

use config::constants::{
    ARROW_BODY_HEIGHT_RATIO, ARROW_HEAD_HEIGHT_RATIO, ARROW_HEAD_RADIUS_RATIO, DEFAULT_DETAIL,
    DEFAULT_HEIGHT, DEFAULT_RADIUS,
};

use crate::error::MeshError;
use crate::primitives::pipe::{pipe, Caps, PipeParams};
use crate::recorder::GeometryRecorder;

/// Parameters for the arrow composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowParams {
    /// Number of angular subdivisions shared by head and body (≥ 1)
    pub detail: u32,
    /// Radius of the cylindrical body (≥ 0); the head base is wider
    pub radius: f64,
    /// Total height of head plus body (> 0)
    pub height: f64,
}

impl Default for ArrowParams {
    fn default() -> Self {
        Self {
            detail: DEFAULT_DETAIL,
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Samples an arrow into the open capture.
///
/// The head is a pipe with a zero top radius (cone apex at the origin)
/// and a closed base; the body follows after a +Z translation by the head
/// height, also with a closed base. The top of the body is intentionally
/// left open: it sits flush against the head base plane.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] for `detail == 0`, a negative radius,
///   or a non-positive height, before any vertex is emitted.
/// - [`MeshError::CaptureState`] when no capture is open.
pub fn arrow(recorder: &mut GeometryRecorder, params: &ArrowParams) -> Result<(), MeshError> {
    if params.detail == 0 {
        return Err(MeshError::invalid_parameter(format!(
            "Arrow detail must be at least 1: {}",
            params.detail
        )));
    }
    if params.radius < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Arrow radius must be non-negative: {}",
            params.radius
        )));
    }
    if params.height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Arrow height must be positive: {}",
            params.height
        )));
    }

    if !recorder.is_capturing() {
        return Err(MeshError::capture_state("arrow requires an open capture"));
    }

    let head_height = params.height * ARROW_HEAD_HEIGHT_RATIO;
    let head_radius = params.radius * ARROW_HEAD_RADIUS_RATIO;
    let body_height = params.height * ARROW_BODY_HEIGHT_RATIO;

    let state = recorder.push_state();

    pipe(
        recorder,
        &PipeParams {
            detail: params.detail,
            top_radius: 0.0,
            bottom_radius: head_radius,
            height: head_height,
            caps: Caps::BOTTOM,
            ..PipeParams::default()
        },
    )?;

    recorder.translate(0.0, 0.0, head_height);

    pipe(
        recorder,
        &PipeParams {
            detail: params.detail,
            top_radius: params.radius,
            bottom_radius: params.radius,
            height: body_height,
            caps: Caps::BOTTOM,
            ..PipeParams::default()
        },
    )?;

    recorder.pop_state(state);
    Ok(())
}
