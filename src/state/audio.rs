//! Audio cues for component feedback.
//!
//! Components never talk to an audio device. They hold an [`AudioSink`]
//! handed in by the embedder and a [`SoundCue`] to play through it, so hosts
//! can route, replace or mute the sound.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use crate::error::PlaybackError;

/// Fixed playback volume for activation cues.
pub const CLICK_VOLUME: f32 = 0.2;

const SAMPLE_RATE: u32 = 22_050;
const CLICK_MS: u32 = 60;

// =============================================================================
// SoundCue
// =============================================================================

/// An encoded sound asset (RIFF/WAVE bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCue {
    name: &'static str,
    wav: Rc<[u8]>,
}

impl SoundCue {
    /// Wrap pre-encoded WAV bytes.
    pub fn from_wav(name: &'static str, wav: impl Into<Rc<[u8]>>) -> Self {
        Self {
            name,
            wav: wav.into(),
        }
    }

    /// Short rising blip used by the game button.
    ///
    /// 16-bit mono PCM: a sine sweeping 600 → 1200 Hz under a linear decay.
    pub fn click() -> Self {
        let count = SAMPLE_RATE * CLICK_MS / 1000;
        let mut phase = 0.0f64;
        let samples: Vec<i16> = (0..count)
            .map(|i| {
                let t = f64::from(i) / f64::from(count);
                let freq = 600.0 + 600.0 * t;
                phase += TAU * freq / f64::from(SAMPLE_RATE);
                let envelope = 1.0 - t;
                (phase.sin() * envelope * f64::from(i16::MAX) * 0.8) as i16
            })
            .collect();
        Self::from_wav("click", encode_wav(&samples, SAMPLE_RATE))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.wav
    }
}

impl Default for SoundCue {
    fn default() -> Self {
        Self::click()
    }
}

/// Encode mono 16-bit PCM samples as a WAV file.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(44 + data_len as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

// =============================================================================
// Sinks
// =============================================================================

/// Where cues get played.
pub trait AudioSink {
    fn play(&self, cue: &SoundCue, volume: f32) -> Result<(), PlaybackError>;
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&self, _cue: &SoundCue, _volume: f32) -> Result<(), PlaybackError> {
        Ok(())
    }
}

/// Remembers what was played. Can be told to refuse playback.
#[derive(Debug, Default)]
pub struct RecordingSink {
    played: RefCell<Vec<(&'static str, f32)>>,
    blocked: Cell<bool>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every following play with [`PlaybackError::Blocked`].
    pub fn block(&self, blocked: bool) {
        self.blocked.set(blocked);
    }

    /// `(cue name, volume)` of each successful play.
    pub fn played(&self) -> Vec<(&'static str, f32)> {
        self.played.borrow().clone()
    }
}

impl AudioSink for RecordingSink {
    fn play(&self, cue: &SoundCue, volume: f32) -> Result<(), PlaybackError> {
        if self.blocked.get() {
            return Err(PlaybackError::Blocked);
        }
        self.played.borrow_mut().push((cue.name(), volume));
        Ok(())
    }
}
