//! The game owner: model plus state holder.

use super::button::{Button, PlayerMove};
use super::command::Command;
use super::model::{GameModel, Request};
use super::phase::{Phase, PhaseKind};
use super::steps::{RandomSteps, StepSource};
use crate::config::{ConfigError, GameConfig};
use crate::core::{StateError, StateHistory, Stateful};
use std::time::Duration;

/// A running Simon game.
///
/// Every entry point takes `now`, the engine clock as time elapsed since the
/// game was created. Delays that became due by then run first, in due
/// order, before the call itself is handled. Side effects are queued and
/// collected with [`SimonGame::take_commands`].
///
/// # Example
///
/// ```rust
/// use simon::config::GameConfig;
/// use simon::game::{Button, Command, PhaseKind, SimonGame};
/// use std::time::Duration;
///
/// let mut game = SimonGame::with_step_source(&GameConfig::default(), || Button::Red)?;
///
/// // After the opening pause and one playback step the player is up.
/// game.advance(Duration::from_secs(2));
/// assert_eq!(game.phase(), Some(PhaseKind::Play));
/// assert_eq!(game.steps(), &[Button::Red]);
///
/// game.press(Button::Red, Duration::from_secs(3));
/// assert!(game.take_commands().contains(&Command::SetCounter("01".to_string())));
/// # Ok::<(), simon::config::ConfigError>(())
/// ```
pub struct SimonGame {
    model: GameModel,
    machine: Stateful<Phase, PlayerMove>,
}

impl SimonGame {
    /// New game drawing random steps, seeded from the config when it has a seed.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        match config.seed {
            Some(seed) => Self::with_step_source(config, RandomSteps::seeded(seed)),
            None => Self::with_step_source(config, RandomSteps::from_entropy()),
        }
    }

    /// New game drawing steps from `source`.
    ///
    /// The game starts right away in replay with [`PlayerMove::Start`].
    /// Fails if `config` breaks any validation rule.
    pub fn with_step_source(
        config: &GameConfig,
        source: impl StepSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.check()?;

        let mut model = GameModel::new(config.timings(), config.win_length, Box::new(source));
        model.refresh_counter_display();
        if config.strict_mode {
            model.set_strict_mode(true);
        }

        let mut game = Self {
            model,
            machine: Stateful::new(),
        };
        game.machine
            .set_state(&mut game.model, Phase::new(PhaseKind::Replay), PlayerMove::Start);
        game.settle();
        Ok(game)
    }

    /// Handle a button press at `now`.
    pub fn press(&mut self, button: Button, now: Duration) {
        self.advance(now);
        if let Ok(state) = self.machine.state_mut() {
            state.press(&mut self.model, button);
        }
        self.settle();
    }

    /// Run every delay that became due by `now`.
    pub fn advance(&mut self, now: Duration) {
        while let Some(due) = self.model.pop_due(now) {
            let Some(resume) = due else { continue };
            if let Ok(state) = self.machine.state_mut() {
                state.resume(&mut self.model, resume);
            }
            self.settle();
        }
    }

    /// Clear the sequence and start over.
    ///
    /// Anything in flight is abandoned first: pending delays are dropped,
    /// lit buttons are cleared and a visible message is dismissed. A
    /// playback interrupted this way never resumes.
    pub fn reset(&mut self, now: Duration) {
        self.advance(now);
        self.restart();
        self.settle();
    }

    pub fn strict_mode(&self) -> bool {
        self.model.strict_mode()
    }

    pub fn set_strict_mode(&mut self, strict_mode: bool) {
        tracing::info!(strict_mode, "strict mode changed");
        self.model.set_strict_mode(strict_mode);
    }

    /// Flip strict mode, returning the new setting.
    pub fn toggle_strict_mode(&mut self) -> bool {
        let strict_mode = !self.strict_mode();
        self.set_strict_mode(strict_mode);
        strict_mode
    }

    pub fn steps(&self) -> &[Button] {
        self.model.steps()
    }

    pub fn step_count(&self) -> usize {
        self.model.step_count()
    }

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    pub fn state(&self) -> Result<&Phase, StateError> {
        self.machine.state()
    }

    pub fn phase(&self) -> Option<PhaseKind> {
        self.machine.kind()
    }

    /// Whether a press right now would be checked against the sequence.
    pub fn can_click(&self) -> bool {
        self.state()
            .ok()
            .and_then(Phase::as_play)
            .is_some_and(|play| play.can_click())
    }

    /// Transitions of the current game; cleared whenever the game restarts.
    pub fn history(&self) -> &StateHistory<PhaseKind, PlayerMove> {
        self.machine.history()
    }

    /// Drain the side effects queued so far, oldest first.
    pub fn take_commands(&mut self) -> Vec<Command> {
        self.model.take_commands()
    }

    /// Engine-clock instant of the next pending delay.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.model.next_deadline()
    }

    /// Latest instant the engine clock has reached.
    pub fn now(&self) -> Duration {
        self.model.now()
    }

    /// Apply transitions requested by state hooks until none is left.
    fn settle(&mut self) {
        while let Some(request) = self.model.take_request() {
            match request {
                Request::Enter(kind, reason) => {
                    self.machine
                        .set_state(&mut self.model, Phase::new(kind), reason)
                }
                Request::Reset => self.restart(),
            }
        }
    }

    fn restart(&mut self) {
        tracing::info!(steps = self.model.step_count(), "game reset");
        self.model.cancel_pending();
        self.model.clear_steps();
        self.machine.clear_history();
        self.machine
            .set_state(&mut self.model, Phase::new(PhaseKind::Replay), PlayerMove::Start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn game_with(steps: Vec<Button>) -> SimonGame {
        let mut script = steps.into_iter();
        SimonGame::with_step_source(&GameConfig::default(), move || {
            script.next().unwrap_or(Button::Green)
        })
        .unwrap()
    }

    #[test]
    fn starts_in_replay_with_start() {
        let game = game_with(vec![Button::Red]);

        assert_eq!(game.phase(), Some(PhaseKind::Replay));
        assert_eq!(
            game.state().unwrap().as_replay().unwrap().reason(),
            Some(PlayerMove::Start)
        );
        assert_eq!(game.step_count(), 0);
        assert_eq!(game.next_deadline(), Some(ms(300)));
    }

    #[test]
    fn first_step_is_added_after_the_opening_pause() {
        let mut game = game_with(vec![Button::Blue]);

        game.advance(ms(299));
        assert_eq!(game.step_count(), 0);

        game.advance(ms(300));
        assert_eq!(game.steps(), &[Button::Blue]);
    }

    #[test]
    fn playback_timing_for_one_step() {
        let mut game = game_with(vec![Button::Yellow]);
        game.take_commands();

        // 300 pause, 200 gap, 450 lit, 200 gap
        game.advance(ms(499));
        assert!(game.take_commands().is_empty());

        game.advance(ms(500));
        assert_eq!(
            game.take_commands(),
            vec![
                Command::PlaySound(Button::Yellow),
                Command::Highlight {
                    button: Button::Yellow,
                    style: crate::game::HighlightStyle::Highlighted,
                },
            ]
        );

        game.advance(ms(1149));
        assert_eq!(game.phase(), Some(PhaseKind::Replay));

        game.advance(ms(1150));
        assert_eq!(game.phase(), Some(PhaseKind::Play));
        assert!(game.can_click());
    }

    #[test]
    fn presses_during_replay_are_ignored() {
        let mut game = game_with(vec![Button::Red]);

        game.press(Button::Green, ms(600));

        assert_eq!(game.phase(), Some(PhaseKind::Replay));
        assert!(!game.take_commands().contains(&Command::ShakeBoard));
    }

    #[test]
    fn toggle_strict_mode_flips_and_reports() {
        let mut game = game_with(vec![]);

        assert!(game.toggle_strict_mode());
        assert!(game.strict_mode());
        assert!(!game.toggle_strict_mode());
        assert!(!game.strict_mode());
    }

    #[test]
    fn strict_mode_from_config_is_applied() {
        let config = GameConfig {
            strict_mode: true,
            ..GameConfig::default()
        };
        let mut game = SimonGame::with_step_source(&config, || Button::Red).unwrap();

        assert!(game.strict_mode());
        assert!(game
            .take_commands()
            .contains(&Command::SetStrictIndicator(true)));
    }

    #[test]
    fn seeded_games_draw_the_same_steps() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        let mut a = SimonGame::new(&config).unwrap();
        let mut b = SimonGame::new(&config).unwrap();

        a.advance(ms(300));
        b.advance(ms(300));

        assert_eq!(a.steps(), b.steps());
        assert_eq!(a.step_count(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            win_length: 0,
            ..GameConfig::default()
        };

        match SimonGame::with_step_source(&config, || Button::Red) {
            Err(ConfigError::Invalid(violations)) => assert_eq!(
                violations,
                vec![crate::config::ConfigViolation::WinLengthOutOfRange {
                    value: 0,
                    max: crate::config::MAX_WIN_LENGTH,
                }]
            ),
            Err(other) => panic!("expected invalid config, got {other:?}"),
            Ok(_) => panic!("expected invalid config"),
        }
    }

    #[test]
    fn clock_and_model_follow_advance() {
        let mut game = game_with(vec![Button::Blue]);

        game.advance(ms(700));

        assert_eq!(game.now(), ms(700));
        assert_eq!(game.model().win_length(), 20);
        assert_eq!(game.model().timings().replay_delay, ms(300));
        assert_eq!(game.model().steps(), &[Button::Blue]);
    }

    #[test]
    fn restart_starts_a_fresh_history() {
        let mut game = game_with(vec![Button::Red, Button::Blue]);
        game.advance(ms(1150));
        assert_eq!(game.history().len(), 2);

        game.reset(ms(1200));

        let history = game.history();
        assert_eq!(history.len(), 1);
        let first = &history.transitions()[0];
        assert_eq!(first.from, Some(PhaseKind::Play));
        assert_eq!((first.to, first.info), (PhaseKind::Replay, PlayerMove::Start));
    }
}
