//! # Pipe Primitive
//!
//! Samples a cylinder whose end faces can be oriented by arbitrary plane
//! normals, with optional end caps.

use std::f64::consts::TAU;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use config::constants::{DEFAULT_DETAIL, DEFAULT_HEIGHT, DEFAULT_RADIUS, EPSILON};

use crate::error::MeshError;
use crate::recorder::GeometryRecorder;

/// Fixed direction along which ring points are reprojected onto the cap
/// planes.
const PROJECTION_AXIS: DVec3 = DVec3::Z;

/// Which end caps of a pipe to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caps {
    pub top: bool,
    pub bottom: bool,
}

impl Caps {
    /// No caps; the tube is open at both ends.
    pub const NONE: Caps = Caps {
        top: false,
        bottom: false,
    };
    /// Top cap only.
    pub const TOP: Caps = Caps {
        top: true,
        bottom: false,
    };
    /// Bottom cap only.
    pub const BOTTOM: Caps = Caps {
        top: false,
        bottom: true,
    };
    /// Both caps.
    pub const BOTH: Caps = Caps {
        top: true,
        bottom: true,
    };
}

impl Default for Caps {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Parameters for the pipe sampler.
///
/// The top ring lies in the plane through the origin with normal
/// `top_normal`; the bottom ring in the plane through (0, 0, `height`)
/// with normal `bottom_normal`. `bottom_radius` defaults to the top
/// radius, so a plain `PipeParams::default()` is a straight cylinder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeParams {
    /// Number of angular subdivisions (≥ 1)
    pub detail: u32,
    /// Radius of the top ring (≥ 0)
    pub top_radius: f64,
    /// Radius of the bottom ring (≥ 0)
    pub bottom_radius: f64,
    /// Distance between the nominal cap planes along +Z
    pub height: f64,
    /// Normal of the top cap plane
    pub top_normal: DVec3,
    /// Normal of the bottom cap plane
    pub bottom_normal: DVec3,
    /// Which end caps to close
    pub caps: Caps,
}

impl Default for PipeParams {
    fn default() -> Self {
        Self {
            detail: DEFAULT_DETAIL,
            top_radius: DEFAULT_RADIUS,
            bottom_radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            top_normal: DVec3::Z,
            bottom_normal: DVec3::NEG_Z,
            caps: Caps::BOTH,
        }
    }
}

impl PipeParams {
    /// Cylinder with the same radius at both ends.
    pub fn uniform(detail: u32, radius: f64, height: f64) -> Self {
        Self {
            detail,
            top_radius: radius,
            bottom_radius: radius,
            height,
            ..Self::default()
        }
    }
}

/// Samples a pipe into the open capture.
///
/// The side surface is one strip interleaving top and bottom ring points
/// (`2 * (detail + 1)` vertices). Each enabled cap is a further strip
/// alternating the cap-plane anchor with the saved ring points; a
/// requested cap whose radius is exactly zero is skipped as a no-op.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] for `detail == 0` or a negative
///   radius, before any vertex is emitted.
/// - [`MeshError::SingularProjection`] when a cap normal is perpendicular
///   to the projection axis, before any vertex is emitted.
/// - [`MeshError::CaptureState`] when no capture is open.
pub fn pipe(recorder: &mut GeometryRecorder, params: &PipeParams) -> Result<(), MeshError> {
    if params.detail == 0 {
        return Err(MeshError::invalid_parameter(format!(
            "Pipe detail must be at least 1: {}",
            params.detail
        )));
    }
    if params.top_radius < 0.0 || params.bottom_radius < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Pipe radii must be non-negative: top={}, bottom={}",
            params.top_radius, params.bottom_radius
        )));
    }

    // The ray/plane denominators are loop-invariant, so a singular
    // configuration is detected before anything is emitted.
    let top_denom = params.top_normal.dot(PROJECTION_AXIS);
    if top_denom.abs() < EPSILON {
        return Err(MeshError::singular_projection(format!(
            "Top normal {} is perpendicular to the projection axis",
            params.top_normal
        )));
    }
    let bottom_denom = params.bottom_normal.dot(PROJECTION_AXIS);
    if bottom_denom.abs() < EPSILON {
        return Err(MeshError::singular_projection(format!(
            "Bottom normal {} is perpendicular to the projection axis",
            params.bottom_normal
        )));
    }

    if !recorder.is_capturing() {
        return Err(MeshError::capture_state("pipe requires an open capture"));
    }

    let detail = params.detail;
    let top_anchor = DVec3::ZERO;
    let bottom_anchor = DVec3::new(0.0, 0.0, params.height);

    let mut top_ring = Vec::with_capacity(detail as usize + 1);
    let mut bottom_ring = Vec::with_capacity(detail as usize + 1);

    let state = recorder.push_state();

    recorder.begin_strip()?;
    for t in 0..=detail {
        let theta = f64::from(t) * TAU / f64::from(detail);
        let unit = DVec3::new(theta.cos(), theta.sin(), 0.0);
        let u = f64::from(t) / f64::from(detail);

        let top = project_onto_plane(
            unit * params.top_radius,
            top_anchor,
            params.top_normal,
            top_denom,
        );
        top_ring.push(top);
        recorder.vertex(top, u, 0.0)?;

        let bottom = project_onto_plane(
            unit * params.bottom_radius,
            bottom_anchor,
            params.bottom_normal,
            bottom_denom,
        );
        bottom_ring.push(bottom);
        recorder.vertex(bottom, u, 1.0)?;
    }
    recorder.end_strip()?;

    if params.caps.top && params.top_radius > 0.0 {
        emit_cap(recorder, top_anchor, &top_ring, params.top_radius)?;
    }
    if params.caps.bottom && params.bottom_radius > 0.0 {
        emit_cap(recorder, bottom_anchor, &bottom_ring, params.bottom_radius)?;
    }

    recorder.pop_state(state);
    Ok(())
}

/// Intersects the ray `point + s * PROJECTION_AXIS` with the plane through
/// `plane_point` with the given normal.
///
/// `denom` is the precomputed `normal · PROJECTION_AXIS`, already checked
/// against zero by the caller.
fn project_onto_plane(point: DVec3, plane_point: DVec3, normal: DVec3, denom: f64) -> DVec3 {
    let s = normal.dot(plane_point - point) / denom;
    point + PROJECTION_AXIS * s
}

/// Emits one cap as a strip alternating the anchor with the ring points.
///
/// The ring UVs map the cap disk onto the unit square, assuming the ring
/// lies near its nominal plane. `radius` must be positive.
fn emit_cap(
    recorder: &mut GeometryRecorder,
    anchor: DVec3,
    ring: &[DVec3],
    radius: f64,
) -> Result<(), MeshError> {
    recorder.begin_strip()?;
    for point in ring {
        recorder.vertex(anchor, 0.5, 0.5)?;
        recorder.vertex(
            *point,
            (point.x + radius) / (2.0 * radius),
            (point.y + radius) / (2.0 * radius),
        )?;
    }
    recorder.end_strip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture_pipe(params: &PipeParams) -> crate::mesh::Mesh {
        let mut rec = GeometryRecorder::new();
        rec.capture(|r| pipe(r, params)).unwrap()
    }

    #[test]
    fn test_side_surface_vertex_count() {
        let params = PipeParams {
            caps: Caps::NONE,
            ..PipeParams::default()
        };
        let mesh = capture_pipe(&params);
        assert_eq!(mesh.strip_count(), 1);
        assert_eq!(mesh.vertex_count(), 2 * (params.detail as usize + 1));
    }

    #[test]
    fn test_both_caps_add_a_strip_each() {
        let params = PipeParams::default();
        let mesh = capture_pipe(&params);
        let ring = params.detail as usize + 1;
        assert_eq!(mesh.strip_count(), 3);
        // Side strip plus one center/ring pair per ring vertex per cap
        assert_eq!(mesh.vertex_count(), 2 * ring + 2 * (2 * ring));
    }

    #[test]
    fn test_axis_aligned_pipe_is_right_cylinder() {
        let params = PipeParams {
            caps: Caps::NONE,
            ..PipeParams::default()
        };
        let mesh = capture_pipe(&params);
        for (i, p) in mesh.positions().iter().enumerate() {
            let expected_z = if i % 2 == 0 { 0.0 } else { params.height };
            assert!((p.z - expected_z).abs() < EPSILON, "vertex {i}: {p}");
            let radial = (p.x * p.x + p.y * p.y).sqrt();
            assert!((radial - params.top_radius).abs() < EPSILON);
        }
    }

    #[test]
    fn test_oriented_top_ring_lies_in_its_plane() {
        let normal = DVec3::new(0.3, -0.2, 1.0).normalize();
        let params = PipeParams {
            top_normal: normal,
            caps: Caps::NONE,
            ..PipeParams::default()
        };
        let mesh = capture_pipe(&params);
        for (i, p) in mesh.positions().iter().enumerate() {
            if i % 2 == 0 {
                // Plane through the origin with the tilted normal
                assert!(normal.dot(*p).abs() < 1e-9, "vertex {i}: {p}");
            }
        }
    }

    #[test]
    fn test_cap_uv_maps_disk_to_unit_square() {
        let params = PipeParams {
            caps: Caps::TOP,
            ..PipeParams::default()
        };
        let mesh = capture_pipe(&params);
        let (first, count) = mesh.strips()[1];
        for i in first..first + count {
            let uv = mesh.uv(i);
            assert!(uv.x >= -EPSILON && uv.x <= 1.0 + EPSILON);
            assert!(uv.y >= -EPSILON && uv.y <= 1.0 + EPSILON);
        }
    }

    #[test]
    fn test_zero_radius_cap_is_skipped() {
        // A cone apex cannot carry a cap fan; the request is a no-op
        let params = PipeParams {
            top_radius: 0.0,
            caps: Caps::BOTH,
            ..PipeParams::default()
        };
        let mesh = capture_pipe(&params);
        let ring = params.detail as usize + 1;
        assert_eq!(mesh.strip_count(), 2);
        assert_eq!(mesh.vertex_count(), 2 * ring + 2 * ring);
    }

    #[test]
    fn test_zero_detail_is_rejected() {
        let mut rec = GeometryRecorder::new();
        let result = rec.capture(|r| {
            pipe(
                r,
                &PipeParams {
                    detail: 0,
                    ..PipeParams::default()
                },
            )
        });
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));
        assert!(!rec.is_capturing());
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let mut rec = GeometryRecorder::new();
        let result = rec.capture(|r| {
            pipe(
                r,
                &PipeParams {
                    bottom_radius: -1.0,
                    ..PipeParams::default()
                },
            )
        });
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));
    }

    #[test]
    fn test_perpendicular_normal_is_singular() {
        let mut rec = GeometryRecorder::new();
        let result = rec.capture(|r| {
            pipe(
                r,
                &PipeParams {
                    top_normal: DVec3::X,
                    ..PipeParams::default()
                },
            )
        });
        assert!(matches!(result, Err(MeshError::SingularProjection { .. })));
        // Nothing may have been emitted before the failure was detected
        let mesh = rec.capture(|_| Ok(())).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_pipe_outside_capture_is_rejected() {
        let mut rec = GeometryRecorder::new();
        let result = pipe(&mut rec, &PipeParams::default());
        assert!(matches!(result, Err(MeshError::CaptureState { .. })));
    }

    #[test]
    fn test_uniform_constructor() {
        let params = PipeParams::uniform(8, 3.0, 12.0);
        assert_eq!(params.top_radius, params.bottom_radius);
        assert_eq!(params.caps, Caps::BOTH);
    }
}
