//! Wall collision resolution
//!
//! Each axis is resolved on its own: the far wall (bottom/right) is checked
//! first, the near wall (top/left) only if the far wall was not hit. Both
//! axes can bounce in the same tick.

use super::state::{Body, Bounds};

/// Which walls were hit during one resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHit {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHit {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Outcome of resolving one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisHit {
    None,
    Low,
    High,
}

/// Clamp `pos` into `[radius, extent - radius]` and point `vel` away from the wall hit
#[inline]
fn resolve_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) -> AxisHit {
    if *pos + radius > extent {
        *pos = extent - radius;
        *vel = -vel.abs();
        AxisHit::High
    } else if *pos - radius < 0.0 {
        *pos = radius;
        *vel = vel.abs();
        AxisHit::Low
    } else {
        AxisHit::None
    }
}

/// Keep the ball inside `bounds`, bouncing off any wall it crossed
pub fn resolve_walls(body: &mut Body, radius: f32, bounds: &Bounds) -> WallHit {
    let vertical = resolve_axis(&mut body.pos.y, &mut body.vel.y, radius, bounds.height);
    let horizontal = resolve_axis(&mut body.pos.x, &mut body.vel.x, radius, bounds.width);

    WallHit {
        left: horizontal == AxisHit::Low,
        right: horizontal == AxisHit::High,
        top: vertical == AxisHit::Low,
        bottom: vertical == AxisHit::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const R: f32 = 16.0;

    fn bounds() -> Bounds {
        Bounds::new(250.0, 250.0)
    }

    #[test]
    fn test_floor_bounce_clamps_and_flips() {
        let mut body = Body {
            pos: Vec2::new(125.0, 250.0 - R + 5.0),
            vel: Vec2::new(0.0, 2.0),
        };
        let hit = resolve_walls(&mut body, R, &bounds());
        assert!(hit.bottom && !hit.top);
        assert_eq!(body.pos.y, 250.0 - R);
        assert_eq!(body.vel.y, -2.0);
    }

    #[test]
    fn test_ceiling_bounce_points_down() {
        let mut body = Body {
            pos: Vec2::new(125.0, 3.0),
            vel: Vec2::new(0.0, -4.0),
        };
        let hit = resolve_walls(&mut body, R, &bounds());
        assert!(hit.top);
        assert_eq!(body.pos.y, R);
        assert_eq!(body.vel.y, 4.0);
    }

    #[test]
    fn test_far_wall_keeps_outward_sign_even_if_already_negative() {
        // Already moving away but still overlapping: velocity stays negative
        let mut body = Body {
            pos: Vec2::new(245.0, 125.0),
            vel: Vec2::new(-1.5, 0.0),
        };
        let hit = resolve_walls(&mut body, R, &bounds());
        assert!(hit.right);
        assert_eq!(body.pos.x, 250.0 - R);
        assert_eq!(body.vel.x, -1.5);
    }

    #[test]
    fn test_left_wall() {
        let mut body = Body {
            pos: Vec2::new(-10.0, 125.0),
            vel: Vec2::new(-3.0, 0.0),
        };
        let hit = resolve_walls(&mut body, R, &bounds());
        assert!(hit.left && !hit.right);
        assert_eq!(body.pos.x, R);
        assert_eq!(body.vel.x, 3.0);
    }

    #[test]
    fn test_corner_resolves_both_axes() {
        let mut body = Body {
            pos: Vec2::new(249.0, 249.0),
            vel: Vec2::new(3.0, 5.0),
        };
        let hit = resolve_walls(&mut body, R, &bounds());
        assert!(hit.right && hit.bottom);
        assert_eq!(body.pos, Vec2::new(250.0 - R, 250.0 - R));
        assert_eq!(body.vel, Vec2::new(-3.0, -5.0));
    }

    #[test]
    fn test_touching_wall_is_not_a_hit() {
        let mut body = Body {
            pos: Vec2::new(R, 250.0 - R),
            vel: Vec2::new(-1.0, 1.0),
        };
        let hit = resolve_walls(&mut body, R, &bounds());
        assert!(!hit.any());
        assert_eq!(body.vel, Vec2::new(-1.0, 1.0));
    }
}
