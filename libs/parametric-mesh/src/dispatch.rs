//! # Primitive Dispatch
//!
//! Selects a surface sampler — caller-chosen or drawn uniformly at random
//! — and runs it inside a capture, deriving normals on the result.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{arrow, bagel, mobius, pipe};
use crate::primitives::{ArrowParams, BagelParams, MobiusParams, PipeParams};
use crate::recorder::GeometryRecorder;

/// The closed set of surface primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Pipe,
    Arrow,
    Mobius,
    Bagel,
}

impl PrimitiveKind {
    /// All primitive kinds, in dispatch order.
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Pipe,
        PrimitiveKind::Arrow,
        PrimitiveKind::Mobius,
        PrimitiveKind::Bagel,
    ];
}

/// Parameters for one sampler invocation, tagged by primitive kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SurfaceParams {
    Pipe(PipeParams),
    Arrow(ArrowParams),
    Mobius(MobiusParams),
    Bagel(BagelParams),
}

impl SurfaceParams {
    /// Returns the primitive kind this parameter set selects.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            SurfaceParams::Pipe(_) => PrimitiveKind::Pipe,
            SurfaceParams::Arrow(_) => PrimitiveKind::Arrow,
            SurfaceParams::Mobius(_) => PrimitiveKind::Mobius,
            SurfaceParams::Bagel(_) => PrimitiveKind::Bagel,
        }
    }

    /// Default parameters for the given kind.
    pub fn default_for(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Pipe => SurfaceParams::Pipe(PipeParams::default()),
            PrimitiveKind::Arrow => SurfaceParams::Arrow(ArrowParams::default()),
            PrimitiveKind::Mobius => SurfaceParams::Mobius(MobiusParams::default()),
            PrimitiveKind::Bagel => SurfaceParams::Bagel(BagelParams::default()),
        }
    }
}

/// Draws one primitive kind uniformly at random.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PrimitiveKind {
    PrimitiveKind::ALL[rng.random_range(0..PrimitiveKind::ALL.len())]
}

/// Runs the selected sampler inside a capture and derives normals.
///
/// The capture is closed on every exit path: a failing sampler never
/// leaves the recorder with a dangling open capture, and no partial mesh
/// is returned.
pub fn generate(
    recorder: &mut GeometryRecorder,
    params: &SurfaceParams,
) -> Result<Mesh, MeshError> {
    debug!("generating {:?} primitive", params.kind());
    let mut mesh = recorder.capture(|rec| match params {
        SurfaceParams::Pipe(p) => pipe(rec, p),
        SurfaceParams::Arrow(p) => arrow(rec, p),
        SurfaceParams::Mobius(p) => mobius(rec, p),
        SurfaceParams::Bagel(p) => bagel(rec, p),
    })?;
    mesh.compute_normals();
    Ok(mesh)
}

/// Draws a primitive kind uniformly at random and generates it with its
/// default parameters.
pub fn generate_random<R: Rng + ?Sized>(
    recorder: &mut GeometryRecorder,
    rng: &mut R,
) -> Result<Mesh, MeshError> {
    let kind = random_kind(rng);
    generate(recorder, &SurfaceParams::default_for(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_generate_derives_normals() {
        let mut rec = GeometryRecorder::new();
        let mesh = generate(&mut rec, &SurfaceParams::Pipe(PipeParams::default())).unwrap();
        let normals = mesh.normals().expect("normals must be derived");
        assert_eq!(normals.len(), mesh.vertex_count());
        assert!(mesh.validate());
    }

    #[test]
    fn test_generate_each_kind() {
        let mut rec = GeometryRecorder::new();
        for kind in PrimitiveKind::ALL {
            let mesh = generate(&mut rec, &SurfaceParams::default_for(kind)).unwrap();
            assert!(!mesh.is_empty(), "{kind:?} produced an empty mesh");
            assert!(mesh.normals().is_some());
        }
    }

    #[test]
    fn test_failure_closes_capture() {
        let mut rec = GeometryRecorder::new();
        let bad = SurfaceParams::Mobius(MobiusParams {
            detail: 0,
            radius: 1.0,
        });
        let result = generate(&mut rec, &bad);
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));
        assert!(!rec.is_capturing());
        // The next, unrelated generation starts cleanly
        let mesh = generate(&mut rec, &SurfaceParams::Arrow(ArrowParams::default())).unwrap();
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_random_kind_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 10_000;
        let mut counts: HashMap<PrimitiveKind, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(random_kind(&mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 4, "every kind must be drawn");
        for (kind, count) in counts {
            let frequency = count as f64 / draws as f64;
            assert!(
                (frequency - 0.25).abs() < 0.03,
                "{kind:?} drawn with frequency {frequency}"
            );
        }
    }

    #[test]
    fn test_generate_random_produces_a_mesh() {
        let mut rec = GeometryRecorder::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            let mesh = generate_random(&mut rec, &mut rng).unwrap();
            assert!(!mesh.is_empty());
            assert!(mesh.validate());
        }
    }
}
