//! Pull Ball - a single ball bouncing around a canvas, pulled toward the mouse
//!
//! Core modules:
//! - `sim`: Pure simulation (body, pointer, tick steps, wall collisions, draw list)
//! - `frame`: Frame scheduling contract between the host callback and the simulation
//! - `renderer`: WebGPU rendering of a frame's draw list
//! - `error`: Host setup errors

pub mod error;
pub mod frame;
pub mod renderer;
pub mod sim;

pub use error::SetupError;
pub use frame::{Frame, FrameLoop};
pub use sim::{LoopState, PointerEvent, SimConstants, Simulation};

/// Fixed configuration constants
pub mod consts {
    /// Ball radius (logical pixels)
    pub const BALL_RADIUS: f32 = 16.0;
    /// Downward acceleration added to vy every tick
    pub const GRAVITY: f32 = 0.1;
    /// Per-tick velocity multiplier
    pub const DAMPENING: f32 = 0.995;
    /// Pull force per unit of distance to the pointer
    pub const MOUSE_PULL_STRENGTH: f32 = 0.005;

    /// Drawing surface size in CSS pixels (square)
    pub const SURFACE_SIZE: f32 = 250.0;

    /// Ball fill colour
    pub const BALL_COLOR_HEX: u32 = 0x45b6fe;
    /// Pull line colour
    pub const LINE_COLOR_HEX: u32 = 0x000000;
    /// Pull line width (logical pixels)
    pub const LINE_WIDTH: f32 = 1.0;
    /// Triangles per ball
    pub const CIRCLE_SEGMENTS: u32 = 48;
}

/// Convert a `0xRRGGBB` sRGB colour into linear RGBA
pub fn hex_to_linear(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0), 1.0]
}

/// sRGB transfer function inverse
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_linear_extremes() {
        assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0, 1.0]);
        let white = hex_to_linear(0xffffff);
        for c in &white[..3] {
            assert!((c - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ball_color_channels_ordered() {
        // #45b6fe is mostly blue, some green, little red
        let [r, g, b, a] = hex_to_linear(consts::BALL_COLOR_HEX);
        assert!(r < g && g < b);
        assert_eq!(a, 1.0);
    }
}
