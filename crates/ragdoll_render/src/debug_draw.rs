//! Physics debug view as line geometry
//!
//! Rapier's debug render pipeline walks the world and reports every collider
//! outline, body axis, joint and contact as line segments. [`DebugLines`]
//! collects those segments into GPU vertices; [`DebugDrawer`] owns the
//! pipeline and decides which categories are drawn.

use ragdoll_physics::rapier2d::pipeline::{
    DebugColor, DebugRenderBackend, DebugRenderMode, DebugRenderObject, DebugRenderPipeline,
    DebugRenderStyle,
};
use ragdoll_physics::rapier2d::prelude::{Point, Real};
use ragdoll_physics::PhysicsWorld;

use crate::pipeline::LineVertex;

/// Which parts of the physics world get drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebugDrawFlags {
    pub shapes: bool,
    pub joints: bool,
    pub body_axes: bool,
    pub contacts: bool,
    pub aabbs: bool,
}

impl Default for DebugDrawFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl DebugDrawFlags {
    /// Draw everything the physics library can show
    pub fn all() -> Self {
        Self {
            shapes: true,
            joints: true,
            body_axes: true,
            contacts: true,
            aabbs: true,
        }
    }

    /// Collider outlines only
    pub fn shapes_only() -> Self {
        Self {
            shapes: true,
            joints: false,
            body_axes: false,
            contacts: false,
            aabbs: false,
        }
    }

    fn render_mode(&self) -> DebugRenderMode {
        let mut mode = DebugRenderMode::empty();
        mode.set(DebugRenderMode::COLLIDER_SHAPES, self.shapes);
        mode.set(DebugRenderMode::JOINTS, self.joints);
        mode.set(DebugRenderMode::RIGID_BODY_AXES, self.body_axes);
        mode.set(DebugRenderMode::CONTACTS, self.contacts);
        mode.set(DebugRenderMode::SOLVER_CONTACTS, self.contacts);
        mode.set(DebugRenderMode::COLLIDER_AABBS, self.aabbs);
        mode
    }
}

/// Line segments collected from one debug render pass
#[derive(Debug, Default)]
pub struct DebugLines {
    vertices: Vec<LineVertex>,
}

impl DebugLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment with an RGBA color
    pub fn push_line(&mut self, a: [f32; 2], b: [f32; 2], color: [f32; 4]) {
        self.vertices.push(LineVertex::new(a, color));
        self.vertices.push(LineVertex::new(b, color));
    }

    /// Vertex pairs, ready for upload
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl DebugRenderBackend for DebugLines {
    fn draw_line(&mut self, _object: DebugRenderObject, a: Point<Real>, b: Point<Real>, color: DebugColor) {
        self.push_line([a.x, a.y], [b.x, b.y], hsla_to_rgba(color));
    }
}

/// Convert rapier's HSLA debug colors (hue in degrees) to RGBA
pub fn hsla_to_rgba(hsla: [f32; 4]) -> [f32; 4] {
    let [h, s, l, a] = hsla;
    let h = h.rem_euclid(360.0) / 60.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, a]
}

/// Owns the debug render pipeline and produces a frame's lines
pub struct DebugDrawer {
    pipeline: DebugRenderPipeline,
    flags: DebugDrawFlags,
    lines: DebugLines,
}

impl DebugDrawer {
    pub fn new(flags: DebugDrawFlags) -> Self {
        Self {
            pipeline: DebugRenderPipeline::new(DebugRenderStyle::default(), flags.render_mode()),
            flags,
            lines: DebugLines::new(),
        }
    }

    pub fn flags(&self) -> DebugDrawFlags {
        self.flags
    }

    /// Change what gets drawn from the next frame on
    pub fn set_flags(&mut self, flags: DebugDrawFlags) {
        self.flags = flags;
        self.pipeline.mode = flags.render_mode();
    }

    /// Render the world into line geometry
    ///
    /// The returned lines are reused across calls, so they are only valid
    /// until the next `draw`.
    pub fn draw(&mut self, world: &PhysicsWorld) -> &DebugLines {
        self.lines.clear();
        world.debug_render(&mut self.pipeline, &mut self.lines);
        &self.lines
    }
}

impl Default for DebugDrawer {
    fn default() -> Self {
        Self::new(DebugDrawFlags::all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragdoll_physics::{PhysicsMaterial, PhysicsWorld};

    fn approx(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn test_hsla_primaries() {
        assert!(approx(hsla_to_rgba([0.0, 1.0, 0.5, 1.0]), [1.0, 0.0, 0.0, 1.0]));
        assert!(approx(hsla_to_rgba([120.0, 1.0, 0.5, 1.0]), [0.0, 1.0, 0.0, 1.0]));
        assert!(approx(hsla_to_rgba([240.0, 1.0, 0.5, 0.5]), [0.0, 0.0, 1.0, 0.5]));
        assert!(approx(hsla_to_rgba([360.0, 1.0, 0.5, 1.0]), [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsla_greys() {
        assert!(approx(hsla_to_rgba([200.0, 0.0, 0.25, 1.0]), [0.25, 0.25, 0.25, 1.0]));
        assert!(approx(hsla_to_rgba([10.0, 1.0, 1.0, 1.0]), [1.0, 1.0, 1.0, 1.0]));
        assert!(approx(hsla_to_rgba([10.0, 1.0, 0.0, 1.0]), [0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_push_line() {
        let mut lines = DebugLines::new();
        lines.push_line([0.0, 0.0], [1.0, 1.0], [1.0; 4]);
        assert_eq!(lines.line_count(), 1);
        assert_eq!(lines.vertices()[1].position, [1.0, 1.0]);
        lines.clear();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_flags_map_to_render_mode() {
        let mode = DebugDrawFlags::shapes_only().render_mode();
        assert!(mode.contains(DebugRenderMode::COLLIDER_SHAPES));
        assert!(!mode.contains(DebugRenderMode::COLLIDER_AABBS));
        assert!(DebugDrawFlags::all().render_mode().contains(DebugRenderMode::JOINTS));
    }

    #[test]
    fn test_draw_box_outline() {
        let mut world = PhysicsWorld::new();
        world.add_static_rect(10.0, 4.0, [20.0, 30.0]);

        let mut drawer = DebugDrawer::new(DebugDrawFlags::shapes_only());
        let lines = drawer.draw(&world);

        assert!(lines.line_count() >= 4, "box outline needs at least 4 segments");
        for v in lines.vertices() {
            assert!(v.position[0] >= 15.0 - 1e-3 && v.position[0] <= 25.0 + 1e-3);
            assert!(v.position[1] >= 28.0 - 1e-3 && v.position[1] <= 32.0 + 1e-3);
            assert!(v.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_draw_replaces_previous_frame() {
        let mut world = PhysicsWorld::new();
        world.add_dynamic_circle(2.0, [0.0, 0.0], PhysicsMaterial::DEFAULT);

        let mut drawer = DebugDrawer::default();
        let first = drawer.draw(&world).line_count();
        let second = drawer.draw(&world).line_count();
        assert!(first > 0);
        assert_eq!(first, second);
    }
}
