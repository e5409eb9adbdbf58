//! Waiting for the player to repeat the sequence.

use super::button::{Button, HighlightStyle, PlayerMove};
use super::command::Command;
use super::model::{GameModel, Request, Resume};
use super::phase::PhaseKind;

/// Checks presses against the recorded sequence.
///
/// `can_click` is the only input guard: it is dropped while the feedback
/// for a press is still on screen, so presses arriving meanwhile are
/// ignored rather than queued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayState {
    can_click: bool,
    steps_clicked: usize,
}

impl PlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_click(&self) -> bool {
        self.can_click
    }

    /// Correct presses so far this round.
    pub fn steps_clicked(&self) -> usize {
        self.steps_clicked
    }

    pub(crate) fn enter(&mut self) {
        self.can_click = true;
        self.steps_clicked = 0;
    }

    pub(crate) fn exit(&mut self) {
        self.can_click = false;
    }

    pub(crate) fn press(&mut self, model: &mut GameModel, button: Button) {
        if !self.can_click {
            tracing::debug!(%button, "press ignored while feedback is showing");
            return;
        }

        let Some(&expected) = model.steps().get(self.steps_clicked) else {
            tracing::warn!(
                %button,
                steps_clicked = self.steps_clicked,
                "press with no step left to match"
            );
            return;
        };

        if button == expected {
            self.can_click = false;
            self.steps_clicked += 1;
            if self.round_complete(model) {
                model.refresh_counter_display();
            }

            model.play_sound(button);
            model.highlight(button, HighlightStyle::Highlighted, Some(Resume::PressShown));
        } else {
            tracing::info!(
                %button,
                %expected,
                step = self.steps_clicked,
                "wrong button pressed"
            );
            self.can_click = false;
            model.emit(Command::ShakeBoard);
            model.highlight(button, HighlightStyle::Wrong, None);
            model.highlight(
                expected,
                HighlightStyle::Highlighted,
                Some(Resume::WrongShown),
            );
        }
    }

    pub(crate) fn resume(&mut self, model: &mut GameModel, resume: Resume) {
        match resume {
            Resume::PressShown => {
                self.can_click = true;
                if self.round_complete(model) {
                    model.request(Request::Enter(PhaseKind::Replay, PlayerMove::Right));
                }
            }
            Resume::WrongShown => {
                model.request(Request::Enter(PhaseKind::Replay, PlayerMove::Wrong));
            }
            other => tracing::debug!(?other, "continuation ignored outside replay"),
        }
    }

    fn round_complete(&self, model: &GameModel) -> bool {
        self.steps_clicked == model.step_count()
    }
}
