//! # Geometry Recorder
//!
//! Capture context that accumulates sampler output into a [`Mesh`].
//!
//! A capture scopes one mesh: samplers open strips, emit vertices, and the
//! recorder applies the current model transform to every position. The
//! closure-based [`GeometryRecorder::capture`] guarantees the capture is
//! closed on every exit path, including sampler errors.

use glam::{DMat4, DVec2, DVec3};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Opaque handle to a saved transform state.
///
/// Returned by [`GeometryRecorder::push_state`] and consumed by
/// [`GeometryRecorder::pop_state`], so restoration is exact even when
/// pushes nest.
#[derive(Debug, Clone, Copy)]
pub struct StateHandle {
    depth: usize,
}

/// Records strip-ordered vertex streams into meshes.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::GeometryRecorder;
/// use glam::DVec3;
///
/// let mut recorder = GeometryRecorder::new();
/// let mesh = recorder
///     .capture(|rec| {
///         rec.begin_strip()?;
///         rec.vertex(DVec3::ZERO, 0.0, 0.0)?;
///         rec.vertex(DVec3::X, 1.0, 0.0)?;
///         rec.vertex(DVec3::Y, 0.0, 1.0)?;
///         rec.end_strip()
///     })
///     .unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug)]
pub struct GeometryRecorder {
    /// Mesh under construction; Some while a capture is open
    mesh: Option<Mesh>,
    /// First vertex index of the currently open strip
    strip_start: Option<u32>,
    /// Current model transform applied to emitted positions
    transform: DMat4,
    /// Saved transform states
    stack: Vec<DMat4>,
}

impl Default for GeometryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryRecorder {
    /// Creates a recorder with no open capture and an identity transform.
    pub fn new() -> Self {
        Self {
            mesh: None,
            strip_start: None,
            transform: DMat4::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// Returns true while a capture is open.
    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.mesh.is_some()
    }

    /// Opens a capture.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::CaptureState`] if a capture is already open.
    pub fn begin_capture(&mut self) -> Result<(), MeshError> {
        if self.mesh.is_some() {
            return Err(MeshError::capture_state(
                "begin_capture while a capture is already open",
            ));
        }
        self.mesh = Some(Mesh::new());
        Ok(())
    }

    /// Closes the capture and returns the recorded mesh.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::CaptureState`] if no capture is open or a strip
    /// is still open.
    pub fn end_capture(&mut self) -> Result<Mesh, MeshError> {
        if self.strip_start.is_some() {
            return Err(MeshError::capture_state(
                "end_capture with an open strip",
            ));
        }
        self.mesh
            .take()
            .ok_or_else(|| MeshError::capture_state("end_capture without an open capture"))
    }

    /// Runs `f` inside a capture and returns the recorded mesh.
    ///
    /// The capture is closed on every exit path: if `f` fails, the partial
    /// mesh is discarded, any open strip is abandoned, the transform stack
    /// is restored to its depth at entry, and the error propagates. A
    /// subsequent capture can always begin cleanly afterwards.
    pub fn capture<F>(&mut self, f: F) -> Result<Mesh, MeshError>
    where
        F: FnOnce(&mut Self) -> Result<(), MeshError>,
    {
        self.begin_capture()?;
        let saved_transform = self.transform;
        let saved_depth = self.stack.len();

        let result = f(self);

        // Unconditionally close the capture before propagating anything
        self.strip_start = None;
        self.stack.truncate(saved_depth);
        self.transform = saved_transform;
        let mesh = self.mesh.take().unwrap_or_default();

        result.map(|()| mesh)
    }

    /// Opens a triangle strip within the current capture.
    pub fn begin_strip(&mut self) -> Result<(), MeshError> {
        let mesh = self
            .mesh
            .as_ref()
            .ok_or_else(|| MeshError::capture_state("begin_strip without an open capture"))?;
        if self.strip_start.is_some() {
            return Err(MeshError::capture_state(
                "begin_strip while a strip is already open",
            ));
        }
        self.strip_start = Some(mesh.vertex_count() as u32);
        Ok(())
    }

    /// Closes the open strip, recording its vertex range.
    pub fn end_strip(&mut self) -> Result<(), MeshError> {
        let first = self
            .strip_start
            .take()
            .ok_or_else(|| MeshError::capture_state("end_strip without an open strip"))?;
        let mesh = self
            .mesh
            .as_mut()
            .ok_or_else(|| MeshError::capture_state("end_strip without an open capture"))?;
        let count = mesh.vertex_count() as u32 - first;
        mesh.add_strip(first, count);
        Ok(())
    }

    /// Appends one vertex to the open strip.
    ///
    /// The position is transformed by the current model transform before
    /// it is stored; the texture coordinate passes through unchanged.
    pub fn vertex(&mut self, position: DVec3, u: f64, v: f64) -> Result<(), MeshError> {
        if self.strip_start.is_none() {
            return Err(MeshError::capture_state("vertex without an open strip"));
        }
        let mesh = self
            .mesh
            .as_mut()
            .ok_or_else(|| MeshError::capture_state("vertex without an open capture"))?;
        let transformed = self.transform.transform_point3(position);
        mesh.add_vertex(transformed, DVec2::new(u, v));
        Ok(())
    }

    /// Saves the current transform and returns a handle for restoring it.
    pub fn push_state(&mut self) -> StateHandle {
        self.stack.push(self.transform);
        StateHandle {
            depth: self.stack.len(),
        }
    }

    /// Restores the transform saved by the matching [`push_state`].
    ///
    /// Also discards any states pushed after the handle was taken.
    ///
    /// [`push_state`]: GeometryRecorder::push_state
    pub fn pop_state(&mut self, handle: StateHandle) {
        debug_assert!(handle.depth <= self.stack.len(), "stale state handle");
        if handle.depth == 0 || handle.depth > self.stack.len() {
            return;
        }
        self.transform = self.stack[handle.depth - 1];
        self.stack.truncate(handle.depth - 1);
    }

    /// Composes a translation onto the current transform.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.transform *= DMat4::from_translation(DVec3::new(dx, dy, dz));
    }
}
