// SPDX-License-Identifier: MPL-2.0
//! Alert sound played when a banner is shown.
//!
//! [`ChimePlayer`] synthesizes a short two-tone chime and plays it through the
//! default output device with cpal. [`Silent`] is used when sound is disabled
//! or no device is available.

use crate::config::{SoundConfig, ALERT_SOUND_ID};
use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::f32::consts::TAU;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// Identifier of a system alert sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

impl SoundId {
    /// The alert every banner plays on `show`.
    pub const ALERT: Self = Self(ALERT_SOUND_ID);

    /// Frequencies (Hz) of the two notes of this sound's chime.
    #[must_use]
    pub fn tones(self) -> [f32; 2] {
        if self == Self::ALERT {
            return [1318.5, 1760.0];
        }
        // Spread other identifiers over a semitone scale starting at A5.
        let semitone = (self.0 % 12) as f32;
        let base = 880.0 * 2f32.powf(semitone / 12.0);
        [base, base * 1.5]
    }
}

/// Something that can play an alert sound. Must not block.
pub trait AlertSound {
    fn play_alert(&self, sound: SoundId);
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AlertSound for Silent {
    fn play_alert(&self, _sound: SoundId) {}
}

/// Length of each chime note in seconds.
const NOTE_SECS: f32 = 0.12;

/// Renders the chime for `sound` as interleaved samples in `[-1, 1]`.
#[must_use]
pub fn chime(sound: SoundId, sample_rate: u32, channels: u16, volume: f32) -> Vec<f32> {
    let channels = usize::from(channels.max(1));
    let note_len = (sample_rate as f32 * NOTE_SECS) as usize;
    // Perceptual volume curve, same as a slider squared.
    let gain = volume * volume;

    let mut samples = Vec::with_capacity(note_len * 2 * channels);
    for frequency in sound.tones() {
        for i in 0..note_len {
            let t = i as f32 / sample_rate as f32;
            let envelope = 1.0 - i as f32 / note_len as f32;
            let value = (TAU * frequency * t).sin() * envelope * envelope * gain;
            samples.extend(std::iter::repeat_n(value, channels));
        }
    }
    samples
}

/// Alert player backed by the default cpal output device.
pub struct ChimePlayer {
    buffer: Arc<Mutex<Vec<f32>>>,
    sample_rate: u32,
    channels: u16,
    volume: f32,
    _stream: cpal::Stream,
}

impl std::fmt::Debug for ChimePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChimePlayer")
            .field("sample_rate", &self.sample_rate)
            .field("channels", &self.channels)
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

impl ChimePlayer {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Returns an error if no audio output device is found, if the device
    /// configuration cannot be retrieved, or if the audio stream fails to start.
    pub fn new(volume: f32) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

        let sample_rate = supported_config.sample_rate().0;
        let channels = supported_config.channels();

        let buffer: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
        let buffer_clone = Arc::clone(&buffer);

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &supported_config.into(), buffer_clone)?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &supported_config.into(), buffer_clone)?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &supported_config.into(), buffer_clone)?
            }
            _ => return Err(Error::Audio("Unsupported audio sample format".to_string())),
        };

        stream
            .play()
            .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;

        Ok(Self {
            buffer,
            sample_rate,
            channels,
            volume,
            _stream: stream,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        buffer: Arc<Mutex<Vec<f32>>>,
    ) -> Result<cpal::Stream> {
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let Ok(mut buf) = buffer.lock() else {
                        data.fill(T::from_sample(0.0f32));
                        return;
                    };

                    for (i, sample) in data.iter_mut().enumerate() {
                        let value = buf.get(i).copied().unwrap_or(0.0);
                        // dasp's from_sample overflows at exactly 1.0 for i16.
                        *sample = T::from_sample(value.clamp(-1.0, 0.999_999_9));
                    }

                    let consumed = data.len().min(buf.len());
                    buf.drain(..consumed);
                },
                |err| {
                    tracing::warn!(%err, "audio output error");
                },
                None,
            )
            .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))
    }

    /// Returns the output sample rate.
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of output channels.
    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

impl AlertSound for ChimePlayer {
    fn play_alert(&self, sound: SoundId) {
        let samples = chime(sound, self.sample_rate, self.channels, self.volume);
        match self.buffer.lock() {
            // A new alert replaces whatever is still playing.
            Ok(mut buf) => *buf = samples,
            Err(_) => tracing::warn!(?sound, "audio buffer poisoned, alert dropped"),
        }
    }
}

/// Builds the alert player described by `config`.
///
/// Falls back to [`Silent`] when sound is disabled or the device cannot be
/// opened.
pub fn player_from_config(config: &SoundConfig) -> Rc<dyn AlertSound> {
    if !config.is_enabled() {
        tracing::debug!("alert sound disabled");
        return Rc::new(Silent);
    }
    match ChimePlayer::new(config.effective_volume()) {
        Ok(player) => {
            tracing::debug!(?player, "alert sound ready");
            Rc::new(player)
        }
        Err(err) => {
            tracing::warn!(%err, "alert sound unavailable, banners will be silent");
            Rc::new(Silent)
        }
    }
}
