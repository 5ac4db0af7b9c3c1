//! Decorative floating shapes behind the page content.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use folio_core::background::{lighting, project, FloatingShape, ShapeKind, CAMERA, SHAPES};

use crate::theme::use_theme;

/// Frame interval of the shape animation.
const FRAME: Duration = Duration::from_millis(50);

/// On-screen size in pixels of a unit-scale shape at unit perspective.
const BASE_SIZE_PX: f64 = 220.0;

/// Fixed full-window layer animating the floating shapes.
#[component]
pub fn FloatingShapes() -> Element {
    let mut elapsed = use_signal(|| 0.0_f64);

    use_future(move || async move {
        let start = Instant::now();
        loop {
            tokio::time::sleep(FRAME).await;
            elapsed.set(start.elapsed().as_secs_f64());
        }
    });

    let dark_mode = use_theme().state().is_dark_mode;
    let light = lighting(dark_mode);
    let filter = format!("filter: brightness({:.2});", 0.6 + light.ambient + light.point);
    let t = *elapsed.read();

    rsx! {
        div {
            class: "floating-shapes",
            style: "{filter}",
            for (i, shape) in SHAPES.iter().enumerate() {
                div {
                    key: "{i}",
                    class: shape_class(shape),
                    style: shape_style(shape, t),
                }
            }
        }
    }
}

fn shape_class(shape: &FloatingShape) -> &'static str {
    match shape.kind {
        ShapeKind::Sphere => "floating-shape shape-sphere",
        ShapeKind::Cube => "floating-shape shape-cube",
    }
}

fn shape_style(shape: &FloatingShape, elapsed_secs: f64) -> String {
    let pose = shape.pose_at(elapsed_secs);
    let (x, y, perspective) = project(pose.position, &CAMERA);
    let size = BASE_SIZE_PX * shape.scale * perspective;
    let [rx, ry] = pose.rotation.map(f64::to_degrees);
    format!(
        "left: {x:.2}%; top: {y:.2}%; width: {size:.1}px; height: {size:.1}px; \
         --shape-color: {}; opacity: {}; \
         transform: translate(-50%, -50%) rotateX({rx:.1}deg) rotateY({ry:.1}deg);",
        shape.color, shape.opacity
    )
}
