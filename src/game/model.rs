//! Shared game data both states operate on.

use super::button::{Button, HighlightStyle, PlayerMove};
use super::command::Command;
use super::phase::PhaseKind;
use super::steps::StepSource;
use crate::config::Timings;
use crate::core::Timeline;
use std::time::Duration;

/// Where a state picks up once a delay it started has elapsed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Resume {
    /// Replay's initial pause is over
    BeginReplay(PlayerMove),
    /// Inter-step pause before playback step `n` (or the end of playback)
    PlaybackStep(usize),
    /// Playback step `n` finished lighting up
    PlaybackShown(usize),
    /// The highlight for a correct press finished
    PressShown,
    /// The highlight of the expected button after a wrong press finished
    WrongShown,
    /// The win message was dismissed
    WinDismissed,
}

/// Entry on the model's timeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Wake {
    Resume(Resume),
    Unlight {
        button: Button,
        style: HighlightStyle,
        then: Option<Resume>,
    },
    Dismiss {
        then: Resume,
    },
}

/// A transition asked for by a state hook, applied once the hook returns.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Request {
    Enter(PhaseKind, PlayerMove),
    Reset,
}

/// The step sequence plus everything the states need to act on it.
pub struct GameModel {
    steps: Vec<Button>,
    strict_mode: bool,
    timings: Timings,
    win_length: usize,
    step_source: Box<dyn StepSource>,
    commands: Vec<Command>,
    timeline: Timeline<Wake>,
    lit: Vec<(Button, HighlightStyle)>,
    message_visible: bool,
    request: Option<Request>,
}

impl GameModel {
    pub(crate) fn new(
        timings: Timings,
        win_length: usize,
        step_source: Box<dyn StepSource>,
    ) -> Self {
        Self {
            steps: Vec::new(),
            strict_mode: false,
            timings,
            win_length,
            step_source,
            commands: Vec::new(),
            timeline: Timeline::new(),
            lit: Vec::new(),
            message_visible: false,
            request: None,
        }
    }

    /// The current sequence, oldest step first.
    pub fn steps(&self) -> &[Button] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Sequence length at which the game is won.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn add_step(&mut self, button: Button) {
        self.steps.push(button);
    }

    pub fn clear_steps(&mut self) {
        self.steps.clear();
        self.refresh_counter_display();
    }

    /// Write the sequence length as two zero-padded digits.
    pub fn refresh_counter_display(&mut self) {
        let text = format!("{:02}", self.step_count() % 100);
        self.emit(Command::SetCounter(text));
    }

    pub fn set_strict_mode(&mut self, strict_mode: bool) {
        self.strict_mode = strict_mode;
        self.emit(Command::SetStrictIndicator(strict_mode));
    }

    pub fn play_sound(&mut self, button: Button) {
        self.emit(Command::PlaySound(button));
    }

    pub(crate) fn emit(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub(crate) fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub(crate) fn next_step(&mut self) -> Button {
        self.step_source.next_step()
    }

    /// Resume `then` once `duration` has elapsed.
    pub(crate) fn sleep(&mut self, duration: Duration, then: Resume) {
        self.timeline.sleep(duration, Wake::Resume(then));
    }

    /// Light `button` for the button display time, then resume `then`.
    pub(crate) fn highlight(
        &mut self,
        button: Button,
        style: HighlightStyle,
        then: Option<Resume>,
    ) {
        self.emit(Command::Highlight { button, style });
        self.lit.push((button, style));
        let duration = self.timings.button_display;
        self.timeline.sleep(
            duration,
            Wake::Unlight {
                button,
                style,
                then,
            },
        );
    }

    /// Show `text` for `duration`, then resume `then`.
    pub(crate) fn show_message(&mut self, text: &str, duration: Duration, then: Resume) {
        self.emit(Command::ShowMessage {
            text: text.to_string(),
            duration,
        });
        self.message_visible = true;
        self.timeline.sleep(duration, Wake::Dismiss { then });
    }

    pub(crate) fn request(&mut self, request: Request) {
        if let Some(previous) = self.request.replace(request) {
            tracing::warn!(?previous, ?request, "transition request overridden");
        }
    }

    pub(crate) fn take_request(&mut self) -> Option<Request> {
        self.request.take()
    }

    pub(crate) fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    pub(crate) fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Pop the next wake due by `now` and settle its display effects.
    ///
    /// Returns the state continuation to run, if any.
    pub(crate) fn pop_due(&mut self, now: Duration) -> Option<Option<Resume>> {
        let wake = self.timeline.pop_until(now)?;
        let resume = match wake {
            Wake::Resume(resume) => Some(resume),
            Wake::Unlight {
                button,
                style,
                then,
            } => {
                self.unlight(button, style);
                then
            }
            Wake::Dismiss { then } => {
                self.message_visible = false;
                self.emit(Command::DismissMessage);
                Some(then)
            }
        };
        Some(resume)
    }

    fn unlight(&mut self, button: Button, style: HighlightStyle) {
        if let Some(index) = self.lit.iter().position(|lit| *lit == (button, style)) {
            self.lit.remove(index);
        }
        self.emit(Command::ClearHighlight { button, style });
    }

    /// Abandon everything in flight: pending delays, lit buttons and any
    /// visible message.
    pub(crate) fn cancel_pending(&mut self) {
        let dropped = self.timeline.cancel_all();
        if dropped > 0 {
            tracing::debug!(dropped, "cancelled pending continuations");
        }
        for (button, style) in std::mem::take(&mut self.lit) {
            self.emit(Command::ClearHighlight { button, style });
        }
        if self.message_visible {
            self.message_visible = false;
            self.emit(Command::DismissMessage);
        }
        self.request = None;
    }
}
