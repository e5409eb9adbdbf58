//! Growing the sequence and playing it back.

use super::button::{HighlightStyle, PlayerMove};
use super::model::{GameModel, Request, Resume};
use super::phase::PhaseKind;

/// Shown once the player reproduces a full-length sequence.
pub const WIN_MESSAGE: &str = "Congratulations, you won!!";

/// Plays the sequence to the player, or reacts to a failed round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayState {
    reason: Option<PlayerMove>,
}

impl ReplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The move this state was entered with.
    pub fn reason(&self) -> Option<PlayerMove> {
        self.reason
    }

    pub(crate) fn enter(&mut self, model: &mut GameModel, reason: PlayerMove) {
        self.reason = Some(reason);
        let delay = model.timings().replay_delay;
        model.sleep(delay, Resume::BeginReplay(reason));
    }

    pub(crate) fn resume(&mut self, model: &mut GameModel, resume: Resume) {
        match resume {
            Resume::BeginReplay(PlayerMove::Start | PlayerMove::Right) => {
                if model.step_count() >= model.win_length() {
                    tracing::info!(steps = model.step_count(), "game won");
                    let duration = model.timings().win_message;
                    model.show_message(WIN_MESSAGE, duration, Resume::WinDismissed);
                } else {
                    self.add_random_step(model);
                    self.show_steps(model);
                }
            }
            Resume::BeginReplay(PlayerMove::Wrong) => {
                if model.strict_mode() {
                    tracing::info!(steps = model.step_count(), "strict mode, starting over");
                    model.request(Request::Reset);
                } else {
                    self.show_steps(model);
                }
            }
            Resume::PlaybackStep(index) => match model.steps().get(index).copied() {
                Some(button) => {
                    model.play_sound(button);
                    model.highlight(
                        button,
                        HighlightStyle::Highlighted,
                        Some(Resume::PlaybackShown(index)),
                    );
                }
                None => model.request(Request::Enter(PhaseKind::Play, PlayerMove::Start)),
            },
            Resume::PlaybackShown(index) => {
                let gap = model.timings().in_between_display;
                model.sleep(gap, Resume::PlaybackStep(index + 1));
            }
            Resume::WinDismissed => model.request(Request::Reset),
            other => tracing::debug!(?other, "continuation ignored outside play"),
        }
    }

    fn add_random_step(&self, model: &mut GameModel) {
        let button = model.next_step();
        model.add_step(button);
        tracing::debug!(%button, steps = model.step_count(), "step added");
    }

    /// Play the whole sequence from the start; each step is preceded by the
    /// inter-step pause, and one more pause follows the last one.
    fn show_steps(&self, model: &mut GameModel) {
        let gap = model.timings().in_between_display;
        model.sleep(gap, Resume::PlaybackStep(0));
    }
}
