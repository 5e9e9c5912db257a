//! Frame Scheduler - timestamp-driven animation loop.
//!
//! A component that animates asks its [`FrameHost`] for the next frame and
//! returns immediately. The host later delivers the frame callback with the
//! current timestamp; the component handles it and asks again. That request /
//! deliver / request cycle is the scheduling loop.
//!
//! # States
//!
//! - `Idle` - no frame requested, no timing baseline
//! - `Running` - exactly one frame request outstanding
//!
//! # Tick algorithm
//!
//! The first tick after (re)start only records the baseline. Later ticks
//! advance when at least `1000 / fps` ms elapsed since the last advance.
//! Frames are never skipped to catch up: a slow host just plays slower.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use spark_gallery::state::animate::{FrameQueue, FrameScheduler, Tick};
//!
//! let host = Rc::new(FrameQueue::new());
//! let mut scheduler = FrameScheduler::new(host.clone());
//! scheduler.start(10);
//!
//! let handle = host.take_pending()[0];
//! assert_eq!(scheduler.tick(handle, 0.0, 10), Tick::Baseline);
//!
//! let handle = host.take_pending()[0];
//! assert_eq!(scheduler.tick(handle, 100.0, 10), Tick::Advance);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Frame host
// =============================================================================

/// Identifies one outstanding frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// The host's frame-scheduling primitive.
///
/// Requests are one-shot: after a frame is delivered, the component must
/// request again to keep animating.
pub trait FrameHost {
    /// Schedule one frame callback.
    fn request_frame(&self) -> FrameHandle;

    /// Cancel an outstanding request. Unknown handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// In-process frame host: a queue of outstanding requests.
///
/// The embedder drains it with [`FrameQueue::take_pending`] and delivers each
/// handle with the current timestamp.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: Cell<u64>,
    pending: RefCell<Vec<FrameHandle>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every outstanding request, oldest first.
    pub fn take_pending(&self) -> Vec<FrameHandle> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl FrameHost for FrameQueue {
    fn request_frame(&self) -> FrameHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = FrameHandle(id);
        self.pending.borrow_mut().push(handle);
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.pending.borrow_mut().retain(|&h| h != handle);
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// Whether an animation loop is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// What a delivered frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Handle is not the outstanding request (cancelled or superseded).
    Stale,
    /// First tick since (re)start: baseline recorded, no advance.
    Baseline,
    /// Enough time elapsed: advance one frame.
    Advance,
    /// Too early: keep waiting.
    Wait,
}

/// Per-instance animation loop state.
///
/// Invariant: `handle` is Some iff the scheduler is running.
pub struct FrameScheduler {
    host: Rc<dyn FrameHost>,
    handle: Option<FrameHandle>,
    last_tick: Option<f64>,
}

impl FrameScheduler {
    pub fn new(host: Rc<dyn FrameHost>) -> Self {
        Self {
            host,
            handle: None,
            last_tick: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        if self.handle.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Timestamp of the last baseline or advance.
    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }

    /// Whether `handle` is the request this scheduler is waiting on.
    pub fn owns(&self, handle: FrameHandle) -> bool {
        self.handle == Some(handle)
    }

    /// Start a fresh loop at `fps`.
    ///
    /// An already running loop is torn down first, so the new rate applies
    /// from a clean baseline. `fps == 0` just stops. Returns whether a loop
    /// is now running.
    pub fn start(&mut self, fps: u32) -> bool {
        self.stop();
        if fps == 0 {
            return false;
        }
        self.handle = Some(self.host.request_frame());
        log::debug!("animation loop started at {fps} fps");
        true
    }

    /// Stop the loop. Safe to call when already idle.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.cancel_frame(handle);
            log::debug!("animation loop stopped ({handle} cancelled)");
        }
        self.last_tick = None;
    }

    /// Handle a delivered frame and schedule the next one.
    pub fn tick(&mut self, handle: FrameHandle, now: f64, fps: u32) -> Tick {
        if !self.owns(handle) {
            return Tick::Stale;
        }

        self.handle = Some(self.host.request_frame());

        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return Tick::Baseline;
        };

        if fps == 0 {
            return Tick::Wait;
        }

        let frame_time = 1000.0 / f64::from(fps);
        if now - last >= frame_time {
            self.last_tick = Some(now);
            Tick::Advance
        } else {
            Tick::Wait
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("handle", &self.handle)
            .field("last_tick", &self.last_tick)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
