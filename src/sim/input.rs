//! Pointer input
//!
//! The host forwards its pointer events here synchronously. Changes are
//! visible to the next tick.

use glam::Vec2;

use super::state::{LoopState, Simulation};

/// Pointer events, positions in surface-local logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed inside the surface
    Down(Vec2),
    Move(Vec2),
    /// Primary button released
    Up,
    /// Pointer entered the surface
    Enter,
    /// Pointer left the surface
    Leave,
}

/// Loop state change caused by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Started,
    Stopped,
}

impl Simulation {
    /// Apply one pointer event
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Transition {
        match event {
            PointerEvent::Down(pos) => {
                self.pointer.engaged = true;
                self.pointer.pos = pos;
                Transition::None
            }
            PointerEvent::Move(pos) => {
                self.pointer.pos = pos;
                Transition::None
            }
            PointerEvent::Up => {
                self.pointer.engaged = false;
                Transition::None
            }
            PointerEvent::Enter => {
                if self.state == LoopState::Running {
                    return Transition::None;
                }
                self.state = LoopState::Running;
                log::info!("Pointer entered, simulation running");
                Transition::Started
            }
            PointerEvent::Leave => {
                self.pointer.engaged = false;
                if self.state == LoopState::Idle {
                    return Transition::None;
                }
                self.state = LoopState::Idle;
                log::info!("Pointer left, simulation idle after {} ticks", self.ticks);
                Transition::Stopped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_engages_and_records_position() {
        let mut sim = Simulation::with_default_surface();
        let t = sim.handle_pointer(PointerEvent::Down(Vec2::new(30.0, 40.0)));
        assert_eq!(t, Transition::None);
        assert!(sim.pointer.engaged);
        assert_eq!(sim.pointer.pos, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_move_records_position_regardless_of_button() {
        let mut sim = Simulation::with_default_surface();
        sim.handle_pointer(PointerEvent::Move(Vec2::new(5.0, 6.0)));
        assert_eq!(sim.pointer.pos, Vec2::new(5.0, 6.0));
        assert!(!sim.pointer.engaged);

        sim.handle_pointer(PointerEvent::Down(Vec2::new(1.0, 1.0)));
        sim.handle_pointer(PointerEvent::Move(Vec2::new(7.0, 8.0)));
        assert_eq!(sim.pointer.pos, Vec2::new(7.0, 8.0));
        assert!(sim.pointer.engaged);
    }

    #[test]
    fn test_up_disengages_but_keeps_position() {
        let mut sim = Simulation::with_default_surface();
        sim.handle_pointer(PointerEvent::Down(Vec2::new(30.0, 40.0)));
        sim.handle_pointer(PointerEvent::Up);
        assert!(!sim.pointer.engaged);
        assert_eq!(sim.pointer.pos, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_enter_and_leave_drive_state_machine() {
        let mut sim = Simulation::with_default_surface();
        assert_eq!(sim.handle_pointer(PointerEvent::Enter), Transition::Started);
        assert!(sim.is_running());
        assert_eq!(sim.handle_pointer(PointerEvent::Enter), Transition::None);

        sim.handle_pointer(PointerEvent::Down(Vec2::new(1.0, 2.0)));
        assert_eq!(sim.handle_pointer(PointerEvent::Leave), Transition::Stopped);
        assert_eq!(sim.state, LoopState::Idle);
        assert!(!sim.pointer.engaged);
        assert_eq!(sim.handle_pointer(PointerEvent::Leave), Transition::None);
    }

    #[test]
    fn test_leave_while_idle_still_disengages() {
        let mut sim = Simulation::with_default_surface();
        sim.pointer.engaged = true;
        sim.handle_pointer(PointerEvent::Leave);
        assert!(!sim.pointer.engaged);
    }
}
