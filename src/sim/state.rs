//! Simulation state and core types
//!
//! Everything the loop mutates lives in one owned [`Simulation`] value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Whether the loop is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopState {
    /// Pointer is outside the surface; ticks do nothing
    #[default]
    Idle,
    /// Pointer is over the surface; every frame ticks and reschedules
    Running,
}

/// The moving ball (center position and per-tick velocity)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    /// Ball at rest at `pos`
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Squared speed, used as a kinetic energy proxy
    #[inline]
    pub fn energy(&self) -> f32 {
        self.vel.length_squared()
    }
}

/// Last known pointer position and whether the primary button is held
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub pos: Vec2,
    pub engaged: bool,
}

/// Surface extent the ball is contained in, in logical pixels
///
/// Measured once from layout at startup. Resizing is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if a circle of `radius` at `pos` lies fully inside
    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        pos.x - radius >= 0.0
            && pos.x + radius <= self.width
            && pos.y - radius >= 0.0
            && pos.y + radius <= self.height
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(SURFACE_SIZE, SURFACE_SIZE)
    }
}

/// Physical tuning for the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConstants {
    /// Ball radius
    pub radius: f32,
    /// Added to vy every tick
    pub gravity: f32,
    /// Velocity multiplier per tick, must be < 1
    pub dampening: f32,
    /// Pull force per unit distance to the pointer
    pub pull_strength: f32,
}

impl Default for SimConstants {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            gravity: GRAVITY,
            dampening: DAMPENING,
            pull_strength: MOUSE_PULL_STRENGTH,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub body: Body,
    pub pointer: PointerState,
    pub constants: SimConstants,
    pub bounds: Bounds,
    pub state: LoopState,
    /// Physics ticks applied so far
    pub ticks: u64,
}

impl Simulation {
    /// Ball at rest in the middle of `bounds`, loop idle
    pub fn new(constants: SimConstants, bounds: Bounds) -> Self {
        Self {
            body: Body::at_rest(bounds.center()),
            pointer: PointerState::default(),
            constants,
            bounds,
            state: LoopState::Idle,
            ticks: 0,
        }
    }

    /// Default constants on the fixed 250x250 surface
    pub fn with_default_surface() -> Self {
        Self::new(SimConstants::default(), Bounds::default())
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// JSON snapshot for diagnostics
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_simulation_is_idle_at_center() {
        let sim = Simulation::with_default_surface();
        assert_eq!(sim.state, LoopState::Idle);
        assert_eq!(sim.body.pos, Vec2::new(125.0, 125.0));
        assert_eq!(sim.body.vel, Vec2::ZERO);
        assert!(!sim.pointer.engaged);
        assert_eq!(sim.ticks, 0);
    }

    #[test]
    fn test_center_follows_bounds() {
        let sim = Simulation::new(SimConstants::default(), Bounds::new(400.0, 300.0));
        assert_eq!(sim.body.pos, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_default_constants() {
        let c = SimConstants::default();
        assert_eq!(c.radius, 16.0);
        assert_eq!(c.gravity, 0.1);
        assert_eq!(c.dampening, 0.995);
        assert_eq!(c.pull_strength, 0.005);
        assert!(c.dampening < 1.0);
    }

    #[test]
    fn test_contains_circle_edges() {
        let b = Bounds::new(250.0, 250.0);
        assert!(b.contains_circle(Vec2::new(16.0, 16.0), 16.0));
        assert!(b.contains_circle(Vec2::new(234.0, 234.0), 16.0));
        assert!(!b.contains_circle(Vec2::new(15.9, 100.0), 16.0));
        assert!(!b.contains_circle(Vec2::new(100.0, 234.1), 16.0));
    }

    #[test]
    fn test_snapshot_json_names_state() {
        let mut sim = Simulation::with_default_surface();
        sim.state = LoopState::Running;
        let json = sim.snapshot_json();
        assert!(json.contains("\"state\":\"Running\""));
        assert!(json.contains("\"engaged\":false"));
    }
}
