//! The two game states as one tagged variant.

use super::button::{Button, PlayerMove};
use super::model::{GameModel, Resume};
use super::play::PlayState;
use super::replay::ReplayState;
use crate::core::State;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PhaseKind {
    Play,
    Replay,
}

/// The active game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Play(PlayState),
    Replay(ReplayState),
}

impl Phase {
    /// Fresh state of the given kind, ready to be entered.
    pub fn new(kind: PhaseKind) -> Self {
        match kind {
            PhaseKind::Play => Self::Play(PlayState::new()),
            PhaseKind::Replay => Self::Replay(ReplayState::new()),
        }
    }

    pub fn as_play(&self) -> Option<&PlayState> {
        match self {
            Self::Play(play) => Some(play),
            Self::Replay(_) => None,
        }
    }

    pub fn as_replay(&self) -> Option<&ReplayState> {
        match self {
            Self::Replay(replay) => Some(replay),
            Self::Play(_) => None,
        }
    }

    pub(crate) fn press(&mut self, model: &mut GameModel, button: Button) {
        match self {
            Self::Play(play) => play.press(model, button),
            Self::Replay(_) => tracing::debug!(%button, "press ignored during replay"),
        }
    }

    pub(crate) fn resume(&mut self, model: &mut GameModel, resume: Resume) {
        match self {
            Self::Play(play) => play.resume(model, resume),
            Self::Replay(replay) => replay.resume(model, resume),
        }
    }
}

impl State<PlayerMove> for Phase {
    type Context = GameModel;
    type Kind = PhaseKind;

    fn kind(&self) -> PhaseKind {
        match self {
            Self::Play(_) => PhaseKind::Play,
            Self::Replay(_) => PhaseKind::Replay,
        }
    }

    fn enter(&mut self, model: &mut GameModel, info: PlayerMove) {
        match self {
            Self::Play(play) => play.enter(),
            Self::Replay(replay) => replay.enter(model, info),
        }
    }

    fn exit(&mut self, _model: &mut GameModel) {
        match self {
            Self::Play(play) => play.exit(),
            Self::Replay(_) => {}
        }
    }
}
