//! Plain-text collaborators for playing in a terminal.

use super::audio::{AudioBackend, AudioError};
use super::surface::{Element, Surface};
use std::io::Write;
use std::time::Duration;

/// Writes one line per visible change.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %err, "terminal write failed");
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn add_class(&mut self, element: Element, class: &str) {
        match (element, class) {
            (Element::Button(button), "highlighted") => {
                self.line(&format!("  ({})", button.name().to_uppercase()))
            }
            (Element::Button(button), "wrong") => {
                self.line(&format!("  [{}] wrong", button.name().to_uppercase()))
            }
            (Element::Board, "strict") => self.line("strict mode ON"),
            _ => tracing::trace!(%element, class, "class added"),
        }
    }

    fn remove_class(&mut self, element: Element, class: &str) {
        match (element, class) {
            (Element::Board, "strict") => self.line("strict mode OFF"),
            _ => tracing::trace!(%element, class, "class removed"),
        }
    }

    fn set_counter(&mut self, text: &str) {
        self.line(&format!("count: {text}"));
    }

    fn shake_board(&mut self) {
        self.line("  ~ ~ ~ the board shakes ~ ~ ~");
    }

    fn show_message(&mut self, text: &str) {
        self.line(&format!("*** {text} ***"));
    }

    fn dismiss_message(&mut self) {}
}

/// A sound as seen by [`TerminalAudio`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalSound {
    pub name: String,
}

/// Stand-in audio backend that only logs.
///
/// Decoding and fetching assets is outside this crate; sources are accepted
/// when they look like a URL or a file path, and playback is a log line.
#[derive(Debug, Default)]
pub struct TerminalAudio {
    /// Length reported for every sound
    pub length: Duration,
}

impl TerminalAudio {
    pub fn new(length: Duration) -> Self {
        Self { length }
    }
}

impl AudioBackend for TerminalAudio {
    type Handle = TerminalSound;

    fn load(&mut self, url: &str) -> Result<TerminalSound, AudioError> {
        let recognised = ["http://", "https://", "file://", "/", "./"]
            .iter()
            .any(|prefix| url.starts_with(prefix));
        if !recognised {
            return Err(AudioError::Unsupported(url.to_string()));
        }
        let name = url
            .rsplit('/')
            .next()
            .and_then(|file| file.split('.').next())
            .filter(|stem| !stem.is_empty())
            .unwrap_or(url)
            .to_string();
        Ok(TerminalSound { name })
    }

    fn play(&mut self, handle: &TerminalSound) {
        tracing::debug!(sound = %handle.name, "play");
    }

    fn fade(&mut self, handle: &TerminalSound, from: f32, to: f32, over: Duration) {
        tracing::trace!(sound = %handle.name, from, to, ?over, "fade");
    }

    fn duration(&self, _handle: &TerminalSound) -> Duration {
        self.length
    }
}
