//! Simulation module
//!
//! All ball physics lives here. This module must stay platform-free:
//! - One unit timestep per tick
//! - State is owned by `Simulation`, never global
//! - No rendering or platform dependencies (drawing is described as data)

pub mod collision;
pub mod input;
pub mod scene;
pub mod state;
pub mod tick;

pub use collision::{WallHit, resolve_walls};
pub use input::{PointerEvent, Transition};
pub use scene::{DrawCommand, build_frame};
pub use state::{Body, Bounds, LoopState, PointerState, SimConstants, Simulation};
pub use tick::{TickReport, tick};
