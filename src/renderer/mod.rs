//! WebGPU rendering module
//!
//! Turns a frame's draw list into coloured triangles in surface-local
//! logical pixels; the pipeline maps them to clip space.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, logical_to_ndc};
pub use vertex::Vertex;

use crate::consts::CIRCLE_SEGMENTS;
use crate::sim::DrawCommand;

/// Tessellate a draw list in order
///
/// Returns whether the surface is cleared first, and the vertices to draw.
/// A `Clear` discards anything tessellated before it.
pub fn tessellate(commands: &[DrawCommand]) -> (bool, Vec<Vertex>) {
    let mut clear = false;
    let mut vertices = Vec::new();

    for command in commands {
        match *command {
            DrawCommand::Clear => {
                clear = true;
                vertices.clear();
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => vertices.extend(shapes::line(from, to, width, color)),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => vertices.extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS)),
        }
    }

    (clear, vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Simulation, build_frame};
    use glam::Vec2;

    #[test]
    fn test_tessellate_idle_frame() {
        let sim = Simulation::with_default_surface();
        let (clear, vertices) = tessellate(&build_frame(&sim));
        assert!(clear);
        assert_eq!(vertices.len(), (CIRCLE_SEGMENTS * 3) as usize);
    }

    #[test]
    fn test_line_is_drawn_before_ball() {
        let mut sim = Simulation::with_default_surface();
        sim.pointer.engaged = true;
        sim.pointer.pos = Vec2::new(10.0, 10.0);

        let (_, vertices) = tessellate(&build_frame(&sim));
        assert_eq!(vertices.len(), 6 + (CIRCLE_SEGMENTS * 3) as usize);
        // Line first, in black
        assert!(vertices[..6].iter().all(|v| v.color == [0.0, 0.0, 0.0, 1.0]));
        assert!(vertices[6..].iter().all(|v| v.color != [0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_clear_discards_earlier_shapes() {
        let commands = [
            DrawCommand::Circle {
                center: Vec2::ZERO,
                radius: 1.0,
                color: [1.0; 4],
            },
            DrawCommand::Clear,
        ];
        let (clear, vertices) = tessellate(&commands);
        assert!(clear);
        assert!(vertices.is_empty());
    }
}
