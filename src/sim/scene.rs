//! Per-frame draw list
//!
//! Rendering is described as data so the draw order can be checked without
//! a GPU. The renderer consumes the list front to back.

use glam::Vec2;

use super::state::Simulation;
use crate::consts::*;
use crate::hex_to_linear;

/// One drawing operation in surface-local logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear,
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: [f32; 4],
    },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

/// Build the draw list for the current state
pub fn build_frame(sim: &Simulation) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(3);
    commands.push(DrawCommand::Clear);

    if sim.pointer.engaged {
        commands.push(DrawCommand::Line {
            from: sim.body.pos,
            to: sim.pointer.pos,
            width: LINE_WIDTH,
            color: hex_to_linear(LINE_COLOR_HEX),
        });
    }

    commands.push(DrawCommand::Circle {
        center: sim.body.pos,
        radius: sim.constants.radius,
        color: hex_to_linear(BALL_COLOR_HEX),
    });

    commands
}
