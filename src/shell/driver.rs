//! Async event loop connecting a game to its collaborators.

use super::audio::{AudioBackend, SoundBank};
use super::input::Input;
use super::surface::{Element, Surface};
use crate::game::{Command, SimonGame};
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Runs a [`SimonGame`] in real time.
///
/// The engine clock starts when the driver is created. The loop waits on
/// whichever comes first, the next input or the engine's next deadline,
/// and renders the resulting commands before waiting again.
pub struct Driver<S: Surface, A: AudioBackend> {
    game: SimonGame,
    surface: S,
    sounds: SoundBank<A>,
    started: Instant,
}

impl<S: Surface, A: AudioBackend> Driver<S, A> {
    pub fn new(game: SimonGame, surface: S, sounds: SoundBank<A>) -> Self {
        Self {
            game,
            surface,
            sounds,
            started: Instant::now(),
        }
    }

    pub fn game(&self) -> &SimonGame {
        &self.game
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn sounds(&self) -> &SoundBank<A> {
        &self.sounds
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Feed one input to the game. Breaks on [`Input::Quit`].
    pub fn handle(&mut self, input: Input) -> ControlFlow<()> {
        let now = self.now();
        match input {
            Input::Press(button) => self.game.press(button, now),
            Input::Reset => self.game.reset(now),
            Input::ToggleStrict => {
                self.game.toggle_strict_mode();
            }
            Input::Quit => return ControlFlow::Break(()),
        }
        self.flush();
        ControlFlow::Continue(())
    }

    /// Run whatever became due and render it.
    pub fn tick(&mut self) {
        let now = self.now();
        self.game.advance(now);
        self.flush();
    }

    /// Drive the game until `inputs` closes or a quit arrives.
    ///
    /// Hands the driver back so callers can inspect the final state.
    pub async fn run(mut self, mut inputs: mpsc::Receiver<Input>) -> Self {
        self.flush();
        loop {
            let deadline = self.game.next_deadline().map(|at| self.started + at);
            tokio::select! {
                input = inputs.recv() => {
                    let Some(input) = input else { break };
                    if self.handle(input).is_break() {
                        break;
                    }
                }
                _ = sleep_until(deadline) => self.tick(),
            }
        }
        tracing::debug!(steps = self.game.step_count(), "driver stopped");
        self
    }

    fn flush(&mut self) {
        for command in self.game.take_commands() {
            self.render(command);
        }
    }

    fn render(&mut self, command: Command) {
        match command {
            Command::PlaySound(button) => self.sounds.play(button),
            Command::Highlight { button, style } => self
                .surface
                .add_class(Element::Button(button), style.class_name()),
            Command::ClearHighlight { button, style } => self
                .surface
                .remove_class(Element::Button(button), style.class_name()),
            Command::ShakeBoard => self.surface.shake_board(),
            Command::SetCounter(text) => self.surface.set_counter(&text),
            Command::SetStrictIndicator(true) => {
                self.surface.add_class(Element::Board, "strict");
                self.surface.remove_class(Element::StrictToggle, "off");
                self.surface.add_class(Element::Overlay, "strict");
            }
            Command::SetStrictIndicator(false) => {
                self.surface.remove_class(Element::Board, "strict");
                self.surface.add_class(Element::StrictToggle, "off");
                self.surface.remove_class(Element::Overlay, "strict");
            }
            Command::ShowMessage { text, .. } => self.surface.show_message(&text),
            Command::DismissMessage => self.surface.dismiss_message(),
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, SoundUrls};
    use crate::game::{Button, PhaseKind};
    use crate::shell::audio::AudioError;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Recorder {
        fn saw(&self, event: &str) -> bool {
            self.events.iter().any(|e| e == event)
        }
    }

    impl Surface for Recorder {
        fn add_class(&mut self, element: Element, class: &str) {
            self.events.push(format!("add {element} {class}"));
        }

        fn remove_class(&mut self, element: Element, class: &str) {
            self.events.push(format!("remove {element} {class}"));
        }

        fn set_counter(&mut self, text: &str) {
            self.events.push(format!("counter {text}"));
        }

        fn shake_board(&mut self) {
            self.events.push("shake".to_string());
        }

        fn show_message(&mut self, text: &str) {
            self.events.push(format!("message {text}"));
        }

        fn dismiss_message(&mut self) {
            self.events.push("dismiss".to_string());
        }
    }

    #[derive(Default)]
    struct CountingAudio {
        plays: usize,
    }

    impl AudioBackend for CountingAudio {
        type Handle = ();

        fn load(&mut self, _url: &str) -> Result<(), AudioError> {
            Ok(())
        }

        fn play(&mut self, _handle: &()) {
            self.plays += 1;
        }

        fn fade(&mut self, _handle: &(), _from: f32, _to: f32, _over: Duration) {}

        fn duration(&self, _handle: &()) -> Duration {
            Duration::from_millis(500)
        }
    }

    fn driver() -> Driver<Recorder, CountingAudio> {
        let game = SimonGame::with_step_source(&GameConfig::default(), || Button::Red).unwrap();
        let sounds = SoundBank::preload(CountingAudio::default(), &SoundUrls::default());
        Driver::new(game, Recorder::default(), sounds)
    }

    async fn send_after(tx: &mpsc::Sender<Input>, millis: u64, input: Input) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        tx.send(input).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn plays_a_round_in_real_time() {
        let (tx, rx) = mpsc::channel(8);
        let feeder = async move {
            send_after(&tx, 2000, Input::Press(Button::Red)).await;
            // quit after the next step is drawn but before it plays
            send_after(&tx, 800, Input::Quit).await;
        };

        let (driver, ()) = tokio::join!(driver().run(rx), feeder);

        let surface = driver.surface();
        assert!(surface.saw("counter 00"));
        assert!(surface.saw("add btn-red highlighted"));
        assert!(surface.saw("remove btn-red highlighted"));
        assert!(surface.saw("counter 01"));
        assert_eq!(driver.game().step_count(), 2);
        // one playback sound plus the player's press
        assert_eq!(driver.sounds().backend().plays, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_mid_playback_clears_the_board() {
        let (tx, rx) = mpsc::channel(8);
        let feeder = async move {
            send_after(&tx, 600, Input::Reset).await;
            send_after(&tx, 100, Input::Quit).await;
        };

        let (driver, ()) = tokio::join!(driver().run(rx), feeder);

        let events = &driver.surface().events;
        let lit = events
            .iter()
            .position(|e| e == "add btn-red highlighted")
            .unwrap();
        let cleared = events
            .iter()
            .position(|e| e == "remove btn-red highlighted")
            .unwrap();
        assert!(lit < cleared);
        assert_eq!(events.last().map(String::as_str), Some("counter 00"));
        assert_eq!(driver.game().step_count(), 0);
        assert_eq!(driver.game().phase(), Some(PhaseKind::Replay));
    }

    #[tokio::test(start_paused = true)]
    async fn strict_toggle_drives_all_indicators() {
        let (tx, rx) = mpsc::channel(8);
        let feeder = async move {
            send_after(&tx, 10, Input::ToggleStrict).await;
            send_after(&tx, 10, Input::Quit).await;
        };

        let (driver, ()) = tokio::join!(driver().run(rx), feeder);

        let surface = driver.surface();
        assert!(driver.game().strict_mode());
        assert!(surface.saw("add board strict"));
        assert!(surface.saw("remove strict-toggle off"));
        assert!(surface.saw("add overlay strict"));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_input_stops_the_loop() {
        let (tx, rx) = mpsc::channel::<Input>(1);
        drop(tx);

        let driver = driver().run(rx).await;

        assert_eq!(driver.game().phase(), Some(PhaseKind::Replay));
    }
}
