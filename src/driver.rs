//! Frame driver: clock, parameter inbox and the per-frame step.
//!
//! The driver owns the live [`WaveParameters`]. Writers never touch it
//! directly; they send [`WaveUpdate`] commands through a [`ParamSender`] and
//! the driver applies everything queued at the start of the next frame. Each
//! frame therefore sees one consistent snapshot, and per field the last write
//! wins.

use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};

use crate::params::{WaveParameters, WaveUpdate};

/// Source of elapsed time in seconds
pub trait Clock {
    fn elapsed_s(&self) -> f32;
}

/// Wall clock started at construction
pub struct SystemClock {
    start_time: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_s(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }
}

/// Host capability that arranges for the next frame to be produced
pub trait FrameScheduler {
    fn schedule_next_frame(&self);
}

impl FrameScheduler for winit::window::Window {
    fn schedule_next_frame(&self) {
        self.request_redraw();
    }
}

/// Cloneable write end of the parameter queue
#[derive(Clone)]
pub struct ParamSender {
    tx: Sender<WaveUpdate>,
}

impl ParamSender {
    pub fn send(&self, update: WaveUpdate) {
        // Receiver only goes away during shutdown
        if self.tx.send(update).is_err() {
            log::debug!("Parameter update {:?} dropped: driver is gone", update);
        }
    }

    pub fn send_all(&self, updates: impl IntoIterator<Item = WaveUpdate>) {
        for update in updates {
            self.send(update);
        }
    }
}

/// Snapshot handed to the renderer for one frame
#[derive(Debug, Clone)]
pub struct FrameState {
    /// Frames started so far, this one included
    pub index: u64,

    /// Seconds since start, never decreasing
    pub time_s: f32,

    pub params: WaveParameters,
}

/// Drives one frame at a time with an injected clock and scheduler
pub struct FrameDriver<C: Clock = SystemClock> {
    clock: C,
    params: WaveParameters,
    tx: Sender<WaveUpdate>,
    rx: Receiver<WaveUpdate>,
    frame_index: u64,
    last_time_s: f32,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C, params: WaveParameters) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            clock,
            params,
            tx,
            rx,
            frame_index: 0,
            last_time_s: 0.0,
        }
    }

    /// Write handle for the parameter queue
    pub fn sender(&self) -> ParamSender {
        ParamSender {
            tx: self.tx.clone(),
        }
    }

    /// Current parameters (as of the last started frame)
    pub fn params(&self) -> &WaveParameters {
        &self.params
    }

    /// Apply every queued update in send order. Returns how many were applied.
    pub fn drain_updates(&mut self) -> usize {
        let mut applied = 0;
        for update in self.rx.try_iter() {
            self.params.apply(update);
            applied += 1;
        }
        applied
    }

    /// Read the clock, apply pending updates and produce this frame's snapshot
    pub fn begin_frame(&mut self) -> FrameState {
        let applied = self.drain_updates();
        if applied > 0 {
            log::trace!("Applied {} parameter updates", applied);
        }

        // Clamp against clocks that step backwards
        self.last_time_s = self.clock.elapsed_s().max(self.last_time_s);
        self.frame_index += 1;

        FrameState {
            index: self.frame_index,
            time_s: self.last_time_s,
            params: self.params.clone(),
        }
    }

    /// Run one frame: snapshot, render, then schedule the next frame.
    ///
    /// The next frame is scheduled even when `render` fails; the loop has no
    /// stopped state.
    pub fn frame<E>(
        &mut self,
        scheduler: &dyn FrameScheduler,
        render: impl FnOnce(&FrameState) -> Result<(), E>,
    ) -> Result<FrameState, E> {
        let state = self.begin_frame();
        let result = render(&state);
        scheduler.schedule_next_frame();
        result.map(|()| state)
    }
}
