//! Triangle meshes.
//!
//! A [`Mesh`] owns its triangles by value: vertices are resolved from the
//! attribute pools at load time, so the pools are kept only for reference.
//! The mesh also carries its [`TransformContext`], the model matrix that
//! persists from one rendered frame to the next.

use crate::error::{Error, Result};
use crate::math::{Mat4, Vec4};
use crate::transform::TransformContext;

/// A mesh vertex: position (point), texture coordinate and normal (direction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec4,
    pub uv: Vec4,
    pub normal: Vec4,
}

impl Vertex {
    pub fn new(position: Vec4, uv: Vec4, normal: Vec4) -> Self {
        Self {
            position,
            uv,
            normal,
        }
    }

    /// A vertex with only a position; uv is the origin and the normal is zero.
    pub fn at(position: Vec4) -> Self {
        Self::new(position, Vec4::point(0.0, 0.0, 0.0), Vec4::ZERO)
    }
}

/// Exactly three vertices. Their order defines the winding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(vertices: [Vertex; 3]) -> Self {
        Self { vertices }
    }

    /// Fails with [`Error::VertexCount`] unless `vertices` has three entries.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Result<Self> {
        let count = vertices.len();
        <[Vertex; 3]>::try_from(vertices)
            .map(Self::new)
            .map_err(|_| Error::VertexCount(count))
    }

    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    /// The three vertex positions, in winding order.
    pub fn positions(&self) -> [Vec4; 3] {
        self.vertices.map(|v| v.position)
    }

    /// A triangle with `f` applied to every vertex, keeping the winding.
    pub fn map_vertices<F: FnMut(Vertex) -> Vertex>(&self, f: F) -> Self {
        Self::new(self.vertices.map(f))
    }

    /// The same triangle with the opposite winding.
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new([a, c, b])
    }
}

impl TryFrom<Vec<Vertex>> for Triangle {
    type Error = Error;

    fn try_from(vertices: Vec<Vertex>) -> Result<Self> {
        Self::from_vertices(vertices)
    }
}

pub const CUBE_VERTICES: [Vec4; 8] = [
    Vec4::point(-1.0, -1.0, -1.0),
    Vec4::point(-1.0, 1.0, -1.0),
    Vec4::point(1.0, 1.0, -1.0),
    Vec4::point(1.0, -1.0, -1.0),
    Vec4::point(1.0, 1.0, 1.0),
    Vec4::point(1.0, -1.0, 1.0),
    Vec4::point(-1.0, 1.0, 1.0),
    Vec4::point(-1.0, -1.0, 1.0),
];

/// Cube faces as 0-based indices into [`CUBE_VERTICES`], counter-clockwise
/// seen from outside, paired with the outward face normal.
pub const CUBE_FACES: [([usize; 3], Vec4); 12] = [
    // Front face
    ([0, 1, 2], Vec4::direction(0.0, 0.0, -1.0)),
    ([0, 2, 3], Vec4::direction(0.0, 0.0, -1.0)),
    // Right face
    ([3, 2, 4], Vec4::direction(1.0, 0.0, 0.0)),
    ([3, 4, 5], Vec4::direction(1.0, 0.0, 0.0)),
    // Back face
    ([5, 4, 6], Vec4::direction(0.0, 0.0, 1.0)),
    ([5, 6, 7], Vec4::direction(0.0, 0.0, 1.0)),
    // Left face
    ([7, 6, 1], Vec4::direction(-1.0, 0.0, 0.0)),
    ([7, 1, 0], Vec4::direction(-1.0, 0.0, 0.0)),
    // Top face
    ([1, 6, 4], Vec4::direction(0.0, 1.0, 0.0)),
    ([1, 4, 2], Vec4::direction(0.0, 1.0, 0.0)),
    // Bottom face
    ([5, 7, 0], Vec4::direction(0.0, -1.0, 0.0)),
    ([5, 0, 3], Vec4::direction(0.0, -1.0, 0.0)),
];

/// An ordered list of triangles plus the attribute pools they were built from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    faces: Vec<Triangle>,
    positions: Vec<Vec4>,
    uvs: Vec<Vec4>,
    normals: Vec<Vec4>,
    context: TransformContext,
}

impl Mesh {
    pub fn new(
        faces: Vec<Triangle>,
        positions: Vec<Vec4>,
        uvs: Vec<Vec4>,
        normals: Vec<Vec4>,
    ) -> Self {
        Self {
            faces,
            positions,
            uvs,
            normals,
            context: TransformContext::new(),
        }
    }

    /// A mesh made only of `faces`, with pools collected from their vertices.
    pub fn from_triangles(faces: Vec<Triangle>) -> Self {
        let vertices = || faces.iter().flat_map(|t| t.vertices().iter());
        let positions = vertices().map(|v| v.position).collect();
        let uvs = vertices().map(|v| v.uv).collect();
        let normals = vertices().map(|v| v.normal).collect();
        Self::new(faces, positions, uvs, normals)
    }

    /// The 2x2x2 cube centered at the origin.
    pub fn cube() -> Self {
        let faces = CUBE_FACES
            .iter()
            .map(|&([a, b, c], normal)| {
                let vertex = |i: usize| {
                    Vertex::new(CUBE_VERTICES[i], Vec4::point(0.0, 0.0, 0.0), normal)
                };
                Triangle::new([vertex(a), vertex(b), vertex(c)])
            })
            .collect();
        let mut normals: Vec<Vec4> = CUBE_FACES.iter().map(|&(_, n)| n).collect();
        normals.dedup();
        Self::new(
            faces,
            CUBE_VERTICES.to_vec(),
            vec![Vec4::point(0.0, 0.0, 0.0)],
            normals,
        )
    }

    pub fn faces(&self) -> &[Triangle] {
        &self.faces
    }

    pub fn positions(&self) -> &[Vec4] {
        &self.positions
    }

    pub fn uvs(&self) -> &[Vec4] {
        &self.uvs
    }

    pub fn normals(&self) -> &[Vec4] {
        &self.normals
    }

    // ============ Transform Context ============

    /// The model matrix at call time.
    pub fn model_matrix(&self) -> Mat4 {
        self.context.matrix()
    }

    pub fn context(&self) -> &TransformContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut TransformContext {
        &mut self.context
    }

    pub fn reset_context(&mut self) -> &mut Self {
        self.context.reset();
        self
    }

    pub fn compose(&mut self, transform: Mat4) -> &mut Self {
        self.context.compose(transform);
        self
    }

    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) -> &mut Self {
        self.context.scale(sx, sy, sz);
        self
    }

    pub fn translate(&mut self, tx: f64, ty: f64, tz: f64) -> &mut Self {
        self.context.translate(tx, ty, tz);
        self
    }

    /// Rotate `angle` radians counter-clockwise around the direction `axis`.
    pub fn rotate(&mut self, axis: Vec4, angle: f64) -> Result<&mut Self> {
        self.context.rotate(axis, angle)?;
        Ok(self)
    }
}
