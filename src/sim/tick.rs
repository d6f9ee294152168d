//! Per-frame simulation tick
//!
//! One tick is explicit Euler with a unit timestep. The steps run in a fixed
//! order: pointer pull, gravity, damping, integration, wall resolution.

use super::collision::{WallHit, resolve_walls};
use super::state::{Body, PointerState, Simulation};

/// What a single call to [`tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// False when the loop was idle and nothing moved
    pub applied: bool,
    pub walls: WallHit,
}

/// Accelerate the body toward the pointer while the button is held
///
/// The pull grows linearly with distance. A pointer sitting exactly on the
/// body center has no direction, so the pull is skipped for that tick.
pub fn apply_pointer_pull(body: &mut Body, pointer: &PointerState, pull_strength: f32) {
    if !pointer.engaged {
        return;
    }

    let delta = pointer.pos - body.pos;
    let distance = delta.length();
    if distance == 0.0 || !distance.is_finite() {
        return;
    }

    let unit = delta / distance;
    let force = distance * pull_strength;
    body.vel += unit * force;
}

#[inline]
pub fn apply_gravity(body: &mut Body, gravity: f32) {
    body.vel.y += gravity;
}

#[inline]
pub fn apply_damping(body: &mut Body, dampening: f32) {
    body.vel *= dampening;
}

#[inline]
pub fn integrate(body: &mut Body) {
    body.pos += body.vel;
}

/// Advance the simulation by one tick
///
/// Does nothing while idle, so a frame that was already scheduled when the
/// pointer left the surface only redraws.
pub fn tick(sim: &mut Simulation) -> TickReport {
    if !sim.is_running() {
        return TickReport::default();
    }

    let c = sim.constants;
    apply_pointer_pull(&mut sim.body, &sim.pointer, c.pull_strength);
    apply_gravity(&mut sim.body, c.gravity);
    apply_damping(&mut sim.body, c.dampening);
    integrate(&mut sim.body);
    let walls = resolve_walls(&mut sim.body, c.radius, &sim.bounds);

    sim.ticks += 1;
    if walls.any() {
        log::trace!("tick {}: bounced {:?}", sim.ticks, walls);
    }

    TickReport {
        applied: true,
        walls,
    }
}
