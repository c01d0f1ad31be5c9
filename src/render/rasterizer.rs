//! The rendering pipeline.
//!
//! [`Rasterizer::render`] runs every face of a [`Scene`] through:
//!
//! 1. **Vertex shader**: model → view → projection → divide by w → viewport
//! 2. **Back-face culling**: drop faces that are clockwise on screen
//! 3. **Viewport culling**: drop faces whose bounding box misses the screen
//! 4. **Scan conversion**: flat fill with edge functions
//!
//! Faces are drawn in mesh order. There is no depth buffer, so the last face
//! to cover a pixel wins.

use log::{debug, trace};

use crate::aabb::Aabb;
use crate::camera::Camera;
use crate::colors::Color;
use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::math::{Mat4, Vec4};
use crate::mesh::{Mesh, Triangle, Vertex};
use crate::render::edgefunction::fill_triangle;
use crate::render::framebuffer::FrameBuffer;

/// Direction the camera looks along in screen space.
const VIEW_DIRECTION: Vec4 = Vec4::direction(0.0, 0.0, -1.0);

/// What to draw: a mesh seen through a camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub mesh: Mesh,
    pub camera: Camera,
}

impl Scene {
    pub fn new(mesh: Mesh, camera: Camera) -> Self {
        Self { mesh, camera }
    }
}

/// The matrices shared by every vertex of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub viewport: Mat4,
    /// `projection * view * model`, computed once per frame.
    mvp: Mat4,
}

impl Uniforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4, viewport: Mat4) -> Self {
        Self {
            model,
            view,
            projection,
            viewport,
            mvp: projection * view * model,
        }
    }

    pub fn mvp(&self) -> Mat4 {
        self.mvp
    }
}

/// Per-frame triangle counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub back_faces: usize,
    pub off_screen: usize,
    /// Faces with a vertex that projected to infinity or NaN.
    pub non_finite: usize,
}

impl RenderStats {
    pub fn culled(&self) -> usize {
        self.back_faces + self.off_screen + self.non_finite
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rasterizer {
    width: u32,
    height: u32,
    fill_color: Color,
    backface_culling: bool,
    viewport_culling: bool,
}

impl Rasterizer {
    /// Fails with [`Error::SizeTooSmall`] unless both sizes exceed 0.5.
    /// Sizes are rounded to the nearest integer.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width > 0.5 && height > 0.5) {
            return Err(Error::SizeTooSmall { width, height });
        }
        Ok(Self {
            width: width.round() as u32,
            height: height.round() as u32,
            fill_color: Color::FILL,
            backface_culling: true,
            viewport_culling: true,
        })
    }

    pub fn from_config(config: &RasterConfig) -> Result<Self> {
        Ok(Self::new(config.width, config.height)?
            .with_fill_color(config.fill_color)
            .with_backface_culling(config.backface_culling)
            .with_viewport_culling(config.viewport_culling))
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_backface_culling(mut self, enabled: bool) -> Self {
        self.backface_culling = enabled;
        self
    }

    pub fn with_viewport_culling(mut self, enabled: bool) -> Self {
        self.viewport_culling = enabled;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn init_frame_buffer(&self) -> FrameBuffer {
        FrameBuffer::new(self.width, self.height)
    }

    /// Maps NDC x and y in [-1, 1] onto [0, width] and [0, height]; z and w
    /// pass through.
    pub fn viewport_matrix(&self) -> Mat4 {
        let (w, h) = (self.width as f64, self.height as f64);
        Mat4::new([
            [w / 2.0, 0.0, 0.0, w / 2.0],
            [0.0, h / 2.0, 0.0, h / 2.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Fails if the camera has no projection or a degenerate view basis.
    pub fn uniforms(&self, scene: &Scene) -> Result<Uniforms> {
        Ok(Uniforms::new(
            scene.mesh.model_matrix(),
            scene.camera.view_matrix()?,
            scene.camera.proj_matrix()?,
            self.viewport_matrix(),
        ))
    }

    /// Render a scene into a fresh frame buffer.
    pub fn render(&self, scene: &Scene) -> Result<FrameBuffer> {
        let mut buffer = self.init_frame_buffer();
        self.render_into(scene, &mut buffer)?;
        Ok(buffer)
    }

    /// Render a scene on top of an existing buffer without clearing it.
    ///
    /// All uniforms are built before the first pixel is written, so an error
    /// leaves `buffer` untouched.
    pub fn render_into(&self, scene: &Scene, buffer: &mut FrameBuffer) -> Result<RenderStats> {
        let uniforms = self.uniforms(scene)?;
        let mut stats = RenderStats::default();

        for (index, face) in scene.mesh.faces().iter().enumerate() {
            let shaded = self.vertex_processing(face, &uniforms);
            if !shaded.positions().iter().all(Vec4::is_finite) {
                trace!("face {}: non-finite screen position, skipped", index);
                stats.non_finite += 1;
                continue;
            }
            if self.backface_culling && self.is_back_face(&shaded)? {
                trace!("face {}: back face, culled", index);
                stats.back_faces += 1;
                continue;
            }
            if self.viewport_culling && !self.is_in_viewport(&shaded) {
                trace!("face {}: outside viewport, culled", index);
                stats.off_screen += 1;
                continue;
            }

            self.draw_triangle(&shaded, buffer);
            stats.drawn += 1;
        }

        debug!(
            "rendered {} faces at {}x{}: {} drawn, {} back faces, {} off screen, {} non-finite",
            scene.mesh.faces().len(),
            self.width,
            self.height,
            stats.drawn,
            stats.back_faces,
            stats.off_screen,
            stats.non_finite
        );
        Ok(stats)
    }

    /// Run the vertex shader over all three vertices.
    pub fn vertex_processing(&self, triangle: &Triangle, uniforms: &Uniforms) -> Triangle {
        triangle.map_vertices(|vertex| self.vertex_shader(&vertex, uniforms))
    }

    /// Position to screen space; uv and normal are carried unchanged.
    pub fn vertex_shader(&self, vertex: &Vertex, uniforms: &Uniforms) -> Vertex {
        let clip = uniforms.mvp * vertex.position;
        let ndc = clip.scale(1.0 / clip.w);
        Vertex::new(uniforms.viewport * ndc, vertex.uv, vertex.normal)
    }

    /// A face is a back face when its screen-space normal does not point
    /// against the viewing direction. Edge-on faces count as back faces.
    pub fn is_back_face(&self, triangle: &Triangle) -> Result<bool> {
        let [a, b, c] = triangle.positions();
        let normal = a.displacement(b)?.cross(a.displacement(c)?)?;
        Ok(normal.dot(VIEW_DIRECTION)? >= 0.0)
    }

    /// Whether the triangle's bounding box touches the screen rectangle.
    /// Depth is unbounded.
    pub fn is_in_viewport(&self, triangle: &Triangle) -> bool {
        let [a, b, c] = triangle.positions();
        let screen = Aabb::from_corners(
            Vec4::point(0.0, 0.0, f64::NEG_INFINITY),
            Vec4::point(self.width as f64, self.height as f64, f64::INFINITY),
        );
        Aabb::new(a, b, c).intersect(&screen)
    }

    pub fn draw_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let [a, b, c] = triangle.positions();
        fill_triangle(a, b, c, buffer, self.fill_color);
    }
}
