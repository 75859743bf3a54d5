//! SVG rendering for the computed torus scene.

use std::fmt::Write;

use paradox_core::{Polygon, Scene};

/// Single solid fill; the illusion is carried entirely by shape order and
/// the gaps, not by styling.
const FILL: &str = "#000000";

/// Render the scene's shapes, already ordered back to front, as an SVG
/// document on a square canvas.
pub fn render_svg(scene: &Scene) -> String {
    let size = scene.config.canvas_size;
    let mut svg = String::new();
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" fill="none">"#,
        size, size, size, size
    ).unwrap();
    for shape in scene.shapes() {
        writeln!(&mut svg, r#"  <path d="{}" fill="{}"/>"#, path_data(&shape), FILL).unwrap();
    }
    writeln!(&mut svg, "</svg>").unwrap();
    svg
}

/// Path data for a closed polygon, coordinates at 3 decimal places.
fn path_data(polygon: &Polygon) -> String {
    let mut d = String::new();
    for (i, v) in polygon.vertices.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        write!(&mut d, "{}{:.3},{:.3}", cmd, v.x, v.y).unwrap();
    }
    d.push('Z');
    d
}
