//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a straight line as a thin quad
///
/// A zero-length line has no direction and produces nothing.
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }

    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_circle_vertices_on_rim() {
        let center = Vec2::new(125.0, 125.0);
        let verts = circle(center, 16.0, RED, 12);
        assert_eq!(verts.len(), 36);
        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [125.0, 125.0]);
            for v in &tri[1..] {
                let d = Vec2::from(v.position).distance(center);
                assert!((d - 16.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_line_quad_has_requested_width() {
        let verts = line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0, RED);
        assert_eq!(verts.len(), 6);
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 1.0).abs() < 1e-6));
        assert!(verts.iter().all(|v| v.color == RED));
    }

    #[test]
    fn test_zero_length_line_is_empty() {
        let p = Vec2::new(3.0, 4.0);
        assert!(line(p, p, 1.0, RED).is_empty());
    }
}
