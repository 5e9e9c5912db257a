//! Per-instance runtime state that is not an attribute.
//!
//! - [`animate`] - frame host and animation loop scheduler
//! - [`audio`] - injected audio sinks and sound cues

pub mod animate;
pub mod audio;

pub use animate::{FrameHandle, FrameHost, FrameQueue, FrameScheduler, SchedulerState, Tick};
pub use audio::{AudioSink, NullSink, RecordingSink, SoundCue, CLICK_VOLUME};
