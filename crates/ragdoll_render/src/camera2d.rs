//! 2D camera describing the visible world rectangle
//!
//! The camera maps a world-space rectangle onto the whole viewport. The
//! rectangle is stretched to fit, so a non-square window distorts the view
//! the same way a fixed-size view would. World Y grows downward on screen.

/// Orthographic 2D camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera2D {
    /// World-space point at the centre of the viewport
    pub center: [f32; 2],
    /// World-space width and height of the visible area
    pub size: [f32; 2],
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera2D {
    /// 100 x 100 view centred on (50, 50)
    pub fn new() -> Self {
        Self {
            center: [50.0, 50.0],
            size: [100.0, 100.0],
        }
    }

    /// Builder: set the view centre
    pub fn with_center(mut self, center: [f32; 2]) -> Self {
        self.center = center;
        self
    }

    /// Builder: set the visible size (components must be non-zero)
    pub fn with_size(mut self, size: [f32; 2]) -> Self {
        self.size = [non_zero(size[0]), non_zero(size[1])];
        self
    }

    /// Visible bounds as (min, max) corners in world space
    pub fn visible_bounds(&self) -> ([f32; 2], [f32; 2]) {
        let half = [self.size[0] / 2.0, self.size[1] / 2.0];
        (
            [self.center[0] - half[0], self.center[1] - half[1]],
            [self.center[0] + half[0], self.center[1] + half[1]],
        )
    }

    fn scale_and_offset(&self) -> ([f32; 2], [f32; 2]) {
        let sx = 2.0 / self.size[0];
        let sy = -2.0 / self.size[1];
        ([sx, sy], [-self.center[0] * sx, -self.center[1] * sy])
    }

    /// Column-major view-projection matrix for the line shader
    pub fn view_projection(&self) -> [[f32; 4]; 4] {
        let ([sx, sy], [tx, ty]) = self.scale_and_offset();
        [
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, 0.0, 1.0],
        ]
    }

    /// Map a world point to normalized device coordinates
    pub fn world_to_ndc(&self, point: [f32; 2]) -> [f32; 2] {
        let ([sx, sy], [tx, ty]) = self.scale_and_offset();
        [point[0] * sx + tx, point[1] * sy + ty]
    }
}

fn non_zero(v: f32) -> f32 {
    if v.abs() < f32::EPSILON {
        1.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-5 && (a[1] - b[1]).abs() < 1e-5
    }

    #[test]
    fn test_default_view() {
        let cam = Camera2D::new();
        assert_eq!(cam.visible_bounds(), ([0.0, 0.0], [100.0, 100.0]));
    }

    #[test]
    fn test_corners_map_to_ndc_with_y_flipped() {
        let cam = Camera2D::new();
        assert!(approx(cam.world_to_ndc([0.0, 0.0]), [-1.0, 1.0]));
        assert!(approx(cam.world_to_ndc([100.0, 100.0]), [1.0, -1.0]));
        assert!(approx(cam.world_to_ndc([50.0, 50.0]), [0.0, 0.0]));
    }

    #[test]
    fn test_matrix_matches_world_to_ndc() {
        let cam = Camera2D::new().with_center([10.0, -4.0]).with_size([40.0, 20.0]);
        let m = cam.view_projection();
        let p = [25.0, 3.0];
        let x = m[0][0] * p[0] + m[1][0] * p[1] + m[3][0];
        let y = m[0][1] * p[0] + m[1][1] * p[1] + m[3][1];
        assert!(approx([x, y], cam.world_to_ndc(p)));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let cam = Camera2D::new().with_size([0.0, 10.0]);
        assert_eq!(cam.size, [1.0, 10.0]);
    }
}
