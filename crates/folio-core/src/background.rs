//! Decorative floating shapes behind the page.
//!
//! Purely cosmetic: each shape bobs vertically on a sine or cosine and
//! spins at a fixed rate. Positions are scene units around the origin.

/// Geometry of a floating shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Cube,
}

/// Vertical motion curve.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Bob {
    Sin { speed: f64, amplitude: f64 },
    Cos { speed: f64, amplitude: f64 },
}

/// Static description of one shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub base: [f64; 3],
    pub scale: f64,
    pub color: &'static str,
    pub opacity: f64,
    /// Radians per second around x and y.
    pub spin: [f64; 2],
    bob: Bob,
}

/// Position and rotation of a shape at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapePose {
    pub position: [f64; 3],
    pub rotation: [f64; 2],
}

impl FloatingShape {
    pub fn pose_at(&self, elapsed_secs: f64) -> ShapePose {
        let offset = match self.bob {
            Bob::Sin { speed, amplitude } => (elapsed_secs * speed).sin() * amplitude,
            Bob::Cos { speed, amplitude } => (elapsed_secs * speed).cos() * amplitude,
        };
        ShapePose {
            position: [self.base[0], self.base[1] + offset, self.base[2]],
            rotation: [elapsed_secs * self.spin[0], elapsed_secs * self.spin[1]],
        }
    }
}

/// The three shapes of the scene.
pub const SHAPES: [FloatingShape; 3] = [
    FloatingShape {
        kind: ShapeKind::Sphere,
        base: [-3.0, -2.0, -4.0],
        scale: 0.5,
        color: "#8b5cf6",
        opacity: 0.6,
        spin: [0.5, 0.3],
        bob: Bob::Sin { speed: 1.0, amplitude: 0.5 },
    },
    FloatingShape {
        kind: ShapeKind::Sphere,
        base: [3.0, 2.0, -5.0],
        scale: 0.4,
        color: "#06b6d4",
        opacity: 0.5,
        spin: [0.3, 0.5],
        bob: Bob::Cos { speed: 0.8, amplitude: 0.3 },
    },
    FloatingShape {
        kind: ShapeKind::Cube,
        base: [0.0, 0.0, -6.0],
        scale: 0.3,
        color: "#f59e0b",
        opacity: 0.4,
        spin: [0.4, 0.6],
        bob: Bob::Sin { speed: 1.2, amplitude: 0.4 },
    },
];

/// Perspective camera of the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub fov_degrees: f64,
}

pub const CAMERA: CameraConfig = CameraConfig {
    position: [0.0, 0.0, 5.0],
    fov_degrees: 75.0,
};

/// Ambient and point light intensities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f64,
    pub point: f64,
}

/// Light is dimmer on the dark palette.
pub fn lighting(dark_mode: bool) -> Lighting {
    if dark_mode {
        Lighting { ambient: 0.2, point: 0.3 }
    } else {
        Lighting { ambient: 0.3, point: 0.5 }
    }
}

/// Projects a scene point onto the viewport, returning percentages of
/// width and height plus the perspective scale factor.
pub fn project(point: [f64; 3], camera: &CameraConfig) -> (f64, f64, f64) {
    let depth = (camera.position[2] - point[2]).max(0.1);
    let half_fov = (camera.fov_degrees.to_radians() / 2.0).tan();
    let scale = 1.0 / (depth * half_fov);
    let x = 50.0 + (point[0] - camera.position[0]) * scale * 50.0;
    let y = 50.0 - (point[1] - camera.position[1]) * scale * 50.0;
    (x, y, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_at_zero_uses_base_for_sine_shapes() {
        let pose = SHAPES[0].pose_at(0.0);
        assert_eq!(pose.position, [-3.0, -2.0, -4.0]);
        assert_eq!(pose.rotation, [0.0, 0.0]);
    }

    #[test]
    fn test_cosine_shape_starts_at_peak() {
        let pose = SHAPES[1].pose_at(0.0);
        assert!((pose.position[1] - 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_bob_stays_within_amplitude() {
        for step in 0..200 {
            let t = step as f64 * 0.05;
            let y = SHAPES[2].pose_at(t).position[1];
            assert!(y.abs() <= 0.4 + 1e-9);
        }
    }

    #[test]
    fn test_origin_projects_to_center() {
        let (x, y, _) = project([0.0, 0.0, -6.0], &CAMERA);
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_lighting_by_mode() {
        assert_eq!(lighting(true).ambient, 0.2);
        assert_eq!(lighting(false).point, 0.5);
    }
}
