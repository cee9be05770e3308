//! # Parametric Mesh
//!
//! Tessellation of parametric surface primitives into triangle-strip
//! meshes with per-vertex texture coordinates and derived normals.
//!
//! ## Architecture
//!
//! ```text
//! SurfaceParams → dispatch (capture) → sampler → GeometryRecorder → Mesh
//! ```
//!
//! ## Primitives
//!
//! - **Pipe**: cylinder whose end faces follow arbitrary plane normals,
//!   with optional fan caps
//! - **Arrow**: cone head plus cylindrical body, composed from two pipes
//! - **Möbius strip**: half-twist band with an explicit closing pair
//! - **Bagel**: figure-8 immersion of the Klein bottle
//!
//! ## Usage
//!
//! ```rust
//! use parametric_mesh::{generate, PipeParams, SurfaceParams};
//!
//! let mesh = generate(&SurfaceParams::Pipe(PipeParams::default()))?;
//! assert!(mesh.normals().is_some());
//! # Ok::<(), parametric_mesh::MeshError>(())
//! ```

pub mod dispatch;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod recorder;

pub use dispatch::{PrimitiveKind, SurfaceParams};
pub use error::MeshError;
pub use mesh::Mesh;
pub use primitives::{ArrowParams, BagelParams, Caps, MobiusParams, PipeParams};
pub use recorder::{GeometryRecorder, StateHandle};

use rand::Rng;

/// Generates one primitive with a throwaway recorder.
///
/// Convenience wrapper around [`dispatch::generate`] for callers that do
/// not keep a [`GeometryRecorder`] of their own.
pub fn generate(params: &SurfaceParams) -> Result<Mesh, MeshError> {
    let mut recorder = GeometryRecorder::new();
    dispatch::generate(&mut recorder, params)
}

/// Generates a uniformly drawn primitive with default parameters.
pub fn generate_random<R: Rng + ?Sized>(rng: &mut R) -> Result<Mesh, MeshError> {
    let mut recorder = GeometryRecorder::new();
    dispatch::generate_random(&mut recorder, rng)
}
