//! Audio collaborator and the preloaded sound cache.

use crate::config::SoundUrls;
use crate::game::Button;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("Cannot load sound from '{url}': {reason}")]
    LoadFailed { url: String, reason: String },

    #[error("Unsupported sound source '{0}'")]
    Unsupported(String),
}

/// Something that can load and play sounds.
pub trait AudioBackend {
    type Handle;

    fn load(&mut self, url: &str) -> Result<Self::Handle, AudioError>;
    fn play(&mut self, handle: &Self::Handle);
    /// Ramp the volume from `from` to `to` over `over`
    fn fade(&mut self, handle: &Self::Handle, from: f32, to: f32, over: Duration);
    fn duration(&self, handle: &Self::Handle) -> Duration;
}

/// One preloaded sound per button.
///
/// Sounds that failed to load are simply missing; playing them is a no-op
/// so a broken asset never stalls the game.
pub struct SoundBank<A: AudioBackend> {
    backend: A,
    sounds: HashMap<Button, A::Handle>,
}

impl<A: AudioBackend> SoundBank<A> {
    /// Load every configured sound, skipping the ones that fail.
    pub fn preload(mut backend: A, urls: &SoundUrls) -> Self {
        let mut sounds = HashMap::new();
        for (button, url) in urls.iter() {
            match backend.load(url) {
                Ok(handle) => {
                    sounds.insert(button, handle);
                }
                Err(err) => tracing::warn!(%button, error = %err, "sound unavailable"),
            }
        }
        Self { backend, sounds }
    }

    /// Play the button's sound, fading it out over its own length.
    pub fn play(&mut self, button: Button) {
        let Some(handle) = self.sounds.get(&button) else {
            tracing::debug!(%button, "no sound loaded");
            return;
        };
        self.backend.play(handle);
        let length = self.backend.duration(handle);
        self.backend.fade(handle, 1.0, 0.0, length);
    }

    pub fn is_loaded(&self, button: Button) -> bool {
        self.sounds.contains_key(&button)
    }

    pub fn backend(&self) -> &A {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeAudio {
        calls: Vec<String>,
    }

    impl AudioBackend for FakeAudio {
        type Handle = String;

        fn load(&mut self, url: &str) -> Result<String, AudioError> {
            if url.contains("broken") {
                return Err(AudioError::LoadFailed {
                    url: url.to_string(),
                    reason: "404".to_string(),
                });
            }
            Ok(url.to_string())
        }

        fn play(&mut self, handle: &String) {
            self.calls.push(format!("play {handle}"));
        }

        fn fade(&mut self, handle: &String, from: f32, to: f32, over: Duration) {
            self.calls
                .push(format!("fade {handle} {from}->{to} {}ms", over.as_millis()));
        }

        fn duration(&self, _handle: &String) -> Duration {
            Duration::from_millis(800)
        }
    }

    fn urls() -> SoundUrls {
        SoundUrls {
            green: "green.mp3".to_string(),
            red: "red.mp3".to_string(),
            yellow: "broken.mp3".to_string(),
            blue: "blue.mp3".to_string(),
        }
    }

    #[test]
    fn preload_skips_failed_sounds() {
        let bank = SoundBank::preload(FakeAudio::default(), &urls());

        assert!(bank.is_loaded(Button::Red));
        assert!(bank.is_loaded(Button::Green));
        assert!(bank.is_loaded(Button::Blue));
        assert!(!bank.is_loaded(Button::Yellow));
    }

    #[test]
    fn play_starts_then_fades_over_sound_length() {
        let mut bank = SoundBank::preload(FakeAudio::default(), &urls());

        bank.play(Button::Red);

        assert_eq!(
            bank.backend().calls,
            vec!["play red.mp3", "fade red.mp3 1->0 800ms"]
        );
    }

    #[test]
    fn playing_a_missing_sound_does_nothing() {
        let mut bank = SoundBank::preload(FakeAudio::default(), &urls());

        bank.play(Button::Yellow);

        assert!(bank.backend().calls.is_empty());
    }
}
