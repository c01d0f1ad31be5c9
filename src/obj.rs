//! Wavefront OBJ loading.
//!
//! Parsing is delegated to `tobj`; this module resolves the per-face index
//! triples into [`Vertex`] values. The source text is scanned once more for
//! face arity and for the uv and normal references each corner names. Faces
//! are not triangulated: anything other than a triangle is rejected.

use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, LoadError};
use crate::math::Vec4;
use crate::mesh::{Mesh, Triangle, Vertex};

const DEFAULT_UV: Vec4 = Vec4::point(0.0, 0.0, 0.0);
const DEFAULT_NORMAL: Vec4 = Vec4::ZERO;

/// Attribute pools of the whole file, merged across OBJ objects/groups.
#[derive(Default)]
struct Pools {
    positions: Vec<Vec4>,
    uvs: Vec<Vec4>,
    normals: Vec<Vec4>,
}

/// Where one tobj model's attributes start inside [`Pools`].
#[derive(Clone, Copy)]
struct Offsets {
    position: usize,
    uv: usize,
    normal: usize,
}

impl Pools {
    fn append(&mut self, mesh: &tobj::Mesh) -> Offsets {
        let offsets = Offsets {
            position: self.positions.len(),
            uv: self.uvs.len(),
            normal: self.normals.len(),
        };

        self.positions.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| Vec4::point(p[0], p[1], p[2])),
        );
        self.uvs.extend(
            mesh.texcoords
                .chunks_exact(2)
                .map(|t| Vec4::point(t[0], t[1], 0.0)),
        );
        self.normals.extend(
            mesh.normals
                .chunks_exact(3)
                .map(|n| Vec4::direction(n[0], n[1], n[2])),
        );

        offsets
    }
}

fn lookup(
    pool: &[Vec4],
    attribute: &'static str,
    offset: usize,
    index: u32,
) -> Result<Vec4, LoadError> {
    let index = offset + index as usize;
    pool.get(index).copied().ok_or(LoadError::IndexOutOfRange {
        attribute,
        index,
        len: pool.len(),
    })
}

/// Which attributes each corner of one `f` record names in the source text.
///
/// tobj fills in uv and normal indices for corners that omit them as soon as
/// any other face of the same object has them, so presence is read here.
#[derive(Clone, Copy)]
struct FaceRefs {
    uv: [bool; 3],
    normal: [bool; 3],
}

impl FaceRefs {
    const ALL: Self = Self {
        uv: [true; 3],
        normal: [true; 3],
    };
}

/// Collect the `f` records of `data` in file order.
///
/// Fails on the first face that is not a triangle. tobj would turn two- and
/// one-vertex faces into lines and points, which the load options discard.
fn scan_faces(data: &str) -> Result<Vec<FaceRefs>, LoadError> {
    let mut faces = Vec::new();
    for (line, text) in data.lines().enumerate() {
        let text = text.split('#').next().unwrap_or_default();
        let mut tokens = text.split_whitespace();
        if tokens.next() != Some("f") {
            continue;
        }

        let corners: Vec<&str> = tokens.collect();
        if corners.len() != 3 {
            warn!(
                "OBJ line {}: face has {} vertices, only triangles are supported",
                line + 1,
                corners.len()
            );
            return Err(Error::VertexCount(corners.len()).into());
        }

        let mut refs = FaceRefs {
            uv: [false; 3],
            normal: [false; 3],
        };
        for (k, corner) in corners.iter().enumerate() {
            // v, v/vt, v//vn or v/vt/vn
            let mut parts = corner.split('/').skip(1);
            refs.uv[k] = parts.next().is_some_and(|p| !p.is_empty());
            refs.normal[k] = parts.next().is_some_and(|p| !p.is_empty());
        }
        faces.push(refs);
    }
    Ok(faces)
}

/// Resolve one corner of a face. uv and normal references are optional.
fn resolve_vertex(
    pools: &Pools,
    mesh: &tobj::Mesh,
    offsets: Offsets,
    corner: usize,
    has_uv: bool,
    has_normal: bool,
) -> Result<Vertex, LoadError> {
    let position = lookup(
        &pools.positions,
        "position",
        offsets.position,
        mesh.indices[corner],
    )?;
    let uv = match mesh.texcoord_indices.get(corner) {
        Some(&i) if has_uv => lookup(&pools.uvs, "uv", offsets.uv, i)?,
        _ => DEFAULT_UV,
    };
    let normal = match mesh.normal_indices.get(corner) {
        Some(&i) if has_normal => lookup(&pools.normals, "normal", offsets.normal, i)?,
        _ => DEFAULT_NORMAL,
    };
    Ok(Vertex::new(position, uv, normal))
}

fn resolve_faces<'a>(
    pools: &Pools,
    mesh: &tobj::Mesh,
    offsets: Offsets,
    refs: &mut impl Iterator<Item = &'a FaceRefs>,
) -> Result<Vec<Triangle>, LoadError> {
    // `face_arities` is empty when every face is a triangle.
    if let Some(&arity) = mesh.face_arities.iter().find(|&&a| a != 3) {
        return Err(Error::VertexCount(arity as usize).into());
    }

    let count = mesh.indices.len() / 3;
    let mut faces = Vec::with_capacity(count);
    for face in 0..count {
        let face_refs = refs.next().copied().unwrap_or(FaceRefs::ALL);
        let vertex = |k: usize| {
            resolve_vertex(
                pools,
                mesh,
                offsets,
                3 * face + k,
                face_refs.uv[k],
                face_refs.normal[k],
            )
        };
        faces.push(Triangle::new([vertex(0)?, vertex(1)?, vertex(2)?]));
    }
    Ok(faces)
}

impl Mesh {
    /// Build a mesh from OBJ source text.
    ///
    /// Positions become points, uvs `(u, v, 0, 1)` and normals directions.
    /// Every object and group in the file is merged into a single mesh, in
    /// file order.
    pub fn from_obj_str(data: &str) -> Result<Self, LoadError> {
        let refs = scan_faces(data)?;

        // `l` and `p` records are not faces.
        let options = tobj::LoadOptions {
            single_index: false,
            triangulate: false,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        };

        let mut reader = data.as_bytes();
        // Materials are irrelevant to flat shading; `mtllib` lines resolve to nothing.
        let (models, _materials) =
            tobj::load_obj_buf(&mut reader, &options, |_| Ok(Default::default()))?;

        let mut pools = Pools::default();
        let mut faces = Vec::with_capacity(refs.len());
        let mut refs = refs.iter();
        for model in &models {
            let offsets = pools.append(&model.mesh);
            faces.extend(resolve_faces(&pools, &model.mesh, offsets, &mut refs)?);
        }

        debug!(
            "loaded OBJ: {} objects, {} faces, {} positions, {} uvs, {} normals",
            models.len(),
            faces.len(),
            pools.positions.len(),
            pools.uvs.len(),
            pools.normals.len()
        );

        Ok(Mesh::new(faces, pools.positions, pools.uvs, pools.normals))
    }

    /// Load a mesh from an OBJ file on disk.
    pub fn from_obj_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_obj_str(&data)
    }
}
