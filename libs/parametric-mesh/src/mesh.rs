//! # Mesh Data Structure
//!
//! Strip-grouped mesh representation with vertices, texture coordinates,
//! and derived normals.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A triangle-strip mesh with per-vertex texture coordinates.
///
/// Vertices are stored in emission order and grouped into triangle strips:
/// within one strip, every run of three consecutive vertices forms a
/// triangle, with winding alternating per triangle. All geometry
/// calculations use f64.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::Mesh;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = Mesh::new();
/// let first = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec2::new(0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec2::new(1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec2::new(0.0, 1.0));
/// mesh.add_strip(first, 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions in emission order
    positions: Vec<DVec3>,
    /// Texture coordinates, one per position
    uvs: Vec<DVec2>,
    /// Strips as (first vertex index, vertex count)
    strips: Vec<(u32, u32)>,
    /// Optional derived vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            uvs: Vec::new(),
            strips: Vec::new(),
            normals: None,
        }
    }

    /// Creates a mesh with pre-allocated vertex capacity.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            strips: Vec::new(),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of strips.
    #[inline]
    pub fn strip_count(&self) -> usize {
        self.strips.len()
    }

    /// Returns the number of triangles implied by the strip topology.
    pub fn triangle_count(&self) -> usize {
        self.strips
            .iter()
            .map(|&(_, count)| (count as usize).saturating_sub(2))
            .sum()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex with its texture coordinate and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        index
    }

    /// Records a strip covering `count` vertices starting at `first`.
    pub fn add_strip(&mut self, first: u32, count: u32) {
        self.strips.push((first, count));
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the recorded strips as (first index, vertex count) pairs.
    #[inline]
    pub fn strips(&self) -> &[(u32, u32)] {
        &self.strips
    }

    /// Returns the position at the given index.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the texture coordinate at the given index.
    #[inline]
    pub fn uv(&self, index: u32) -> DVec2 {
        self.uvs[index as usize]
    }

    /// Returns the derived vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns the vertices of one strip as a position slice.
    pub fn strip_positions(&self, strip: usize) -> &[DVec3] {
        let (first, count) = self.strips[strip];
        &self.positions[first as usize..(first + count) as usize]
    }

    /// Computes and sets area-weighted vertex normals from the strips.
    ///
    /// Each strip contributes one triangle per vertex run of three, with
    /// winding alternating per triangle. Degenerate triangles (repeated
    /// vertices, zero area) contribute nothing.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.positions.len()];

        for &(first, count) in &self.strips {
            if count < 3 {
                continue;
            }
            for k in 0..(count - 2) as usize {
                let i0 = first as usize + k;
                let i1 = i0 + 1;
                let i2 = i0 + 2;

                let v0 = self.positions[i0];
                let v1 = self.positions[i1];
                let v2 = self.positions[i2];

                let mut normal = (v1 - v0).cross(v2 - v0);
                // Every other strip triangle has reversed winding
                if k % 2 == 1 {
                    normal = -normal;
                }

                normals[i0] += normal;
                normals[i1] += normal;
                normals[i2] += normal;
            }
        }

        // Normalize
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Validates the mesh for internal consistency.
    ///
    /// Checks:
    /// - One texture coordinate per position
    /// - Every strip range lies within the vertex stream
    /// - Normals, when present, match the vertex count
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.uvs.len() != self.positions.len() {
            return false;
        }

        let vertex_count = self.positions.len() as u64;
        for &(first, count) in &self.strips {
            if u64::from(first) + u64::from(count) > vertex_count {
                return false;
            }
        }

        if let Some(normals) = &self.normals {
            if normals.len() != self.positions.len() {
                return false;
            }
        }

        true
    }
}
