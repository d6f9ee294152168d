//! Frame scheduling
//!
//! The host owns a frame callback (`requestAnimationFrame` in the browser).
//! `FrameLoop` decides when that callback must be requested and what each
//! frame draws. At most one frame is ever outstanding.

use crate::sim::{DrawCommand, PointerEvent, Simulation, TickReport, Transition, build_frame, tick};

/// Output of one frame callback
#[derive(Debug, Clone)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub report: TickReport,
    /// Host must request another frame
    pub reschedule: bool,
}

/// Simulation plus the pending-frame bookkeeping
#[derive(Debug, Clone)]
pub struct FrameLoop {
    sim: Simulation,
    frame_pending: bool,
}

impl FrameLoop {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            frame_pending: false,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Draw list shown before any interaction; does not tick
    pub fn initial_frame(&self) -> Vec<DrawCommand> {
        build_frame(&self.sim)
    }

    /// Apply a pointer event; returns true if the host must request a frame
    ///
    /// Re-entering while the trailing frame of a previous exit is still
    /// queued reuses that frame instead of starting a second chain.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let transition = self.sim.handle_pointer(event);
        if transition == Transition::Started && !self.frame_pending {
            self.frame_pending = true;
            return true;
        }
        false
    }

    /// Run one frame callback: tick, build the draw list, decide on rescheduling
    pub fn run_frame(&mut self) -> Frame {
        self.frame_pending = false;

        let report = tick(&mut self.sim);
        let commands = build_frame(&self.sim);
        let reschedule = self.sim.is_running();
        self.frame_pending = reschedule;

        if !reschedule {
            log::debug!("Frame loop stopped: {}", self.sim.snapshot_json());
        }

        Frame {
            commands,
            report,
            reschedule,
        }
    }
}
