//! Frame tick driver
//!
//! Owns the session, the input latch and both sinks. Input is applied between
//! frames; `frame()` only advances the simulation while `Playing`, which is
//! how pausing works.

use crate::audio::AudioSink;
use crate::renderer::RenderSink;
use crate::sim::{
    ExitRequest, InputLatch, KeyEvent, Phase, RenderSnapshot, SessionState, SoundCue, on_press,
    tick,
};

/// Game instance holding all state
pub struct Game<A: AudioSink, R: RenderSink> {
    state: SessionState,
    input: InputLatch,
    audio: A,
    renderer: R,
    exit: Option<ExitRequest>,
    frames: u64,
}

impl<A: AudioSink, R: RenderSink> Game<A, R> {
    pub fn new(seed: u64, audio: A, renderer: R) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: SessionState::new(seed),
            input: InputLatch::new(),
            audio,
            renderer,
            exit: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// First exit requested by the state machine, if any
    pub fn exit_request(&self) -> Option<ExitRequest> {
        self.exit
    }

    /// Feed one input event. Presses are edge-triggered through the state
    /// machine; the latch tracks held state for movement.
    pub fn handle(&mut self, event: KeyEvent) {
        self.input.apply(event);
        if let KeyEvent::Pressed(key) = event {
            let transition = on_press(&mut self.state, key);
            self.dispatch(&transition.cues);
            if self.exit.is_none() {
                self.exit = transition.exit;
            }
        }
    }

    /// Run one frame: tick if playing, then present
    pub fn frame(&mut self) {
        self.frames += 1;
        if self.state.phase == Phase::Playing {
            let report = tick(&mut self.state, &self.input);
            self.dispatch(&report.cues);
        }
        self.renderer.present(&RenderSnapshot::capture(&self.state));
    }

    fn dispatch(&mut self, cues: &[SoundCue]) {
        for &cue in cues {
            self.audio.play(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Key;
    use glam::IVec2;

    #[derive(Default)]
    struct RecordingAudio {
        cues: Vec<SoundCue>,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, cue: SoundCue) {
            self.cues.push(cue);
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<RenderSnapshot>,
    }

    impl RenderSink for RecordingRenderer {
        fn present(&mut self, snapshot: &RenderSnapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    fn new_game() -> Game<RecordingAudio, RecordingRenderer> {
        Game::new(31337, RecordingAudio::default(), RecordingRenderer::default())
    }

    fn press(game: &mut Game<RecordingAudio, RecordingRenderer>, key: Key) {
        game.handle(KeyEvent::Pressed(key));
        game.handle(KeyEvent::Released(key));
    }

    #[test]
    fn test_menu_frames_do_not_simulate() {
        let mut game = new_game();
        let targets = game.state().entities.targets.clone();
        game.frame();
        game.frame();
        assert_eq!(game.state().entities.targets, targets);
        assert_eq!(game.state().time_left, GAME_DURATION);
        // Menus are still presented
        assert_eq!(game.renderer().frames.len(), 2);
        assert_eq!(game.renderer().frames[1].phase, Phase::StartMenu);
    }

    #[test]
    fn test_fire_then_tick() {
        let mut game = new_game();
        press(&mut game, Key::Confirm);
        let start = game.state().entities.player.pos;
        press(&mut game, Key::Fire);
        game.frame();
        let last = game.renderer().frames.last().unwrap();
        assert_eq!(last.bullets, vec![IVec2::new(start.x, start.y - BULLET_SPEED)]);
        assert_eq!(game.audio().cues, vec![SoundCue::Shoot]);
    }

    #[test]
    fn test_held_keys_move_until_released() {
        let mut game = new_game();
        press(&mut game, Key::Confirm);
        let start = game.state().entities.player.pos;
        game.handle(KeyEvent::Pressed(Key::Left));
        game.frame();
        game.frame();
        game.handle(KeyEvent::Released(Key::Left));
        game.frame();
        assert_eq!(game.state().entities.player.pos, start - IVec2::new(10, 0));
    }

    #[test]
    fn test_pause_withholds_ticks() {
        let mut game = new_game();
        press(&mut game, Key::Confirm);
        game.frame();
        press(&mut game, Key::Pause);
        let time_left = game.state().time_left;
        for _ in 0..10 {
            game.frame();
        }
        assert_eq!(game.state().time_left, time_left);
        assert!(game.renderer().frames.last().unwrap().paused);

        press(&mut game, Key::Fire);
        assert!(game.state().entities.bullets.is_empty());

        press(&mut game, Key::Pause);
        game.frame();
        assert_eq!(game.state().time_left, time_left - 1);
    }

    #[test]
    fn test_game_over_flow_and_exit() {
        let mut game = new_game();
        press(&mut game, Key::Confirm);
        game.state_mut().entities.targets.clear();
        // Five shots straight up with nothing to hit
        for _ in 0..5 {
            press(&mut game, Key::Fire);
        }
        let mut guard = 0;
        while game.state().phase == Phase::Playing && guard < 200 {
            game.frame();
            guard += 1;
        }
        assert_eq!(game.state().phase, Phase::GameOver);
        assert!(game.audio().cues.contains(&SoundCue::GameOver));

        let frames = game.frames();
        game.frame();
        assert_eq!(game.frames(), frames + 1);
        assert!(game.renderer().frames.last().unwrap().game_over);

        press(&mut game, Key::Confirm);
        assert_eq!(game.exit_request(), Some(ExitRequest::Defeat));
        // Later requests don't overwrite the first
        press(&mut game, Key::Cancel);
        assert_eq!(game.exit_request().map(ExitRequest::code), Some(10));
    }

    #[test]
    fn test_escape_while_playing_aborts() {
        let mut game = new_game();
        press(&mut game, Key::Confirm);
        press(&mut game, Key::Cancel);
        assert_eq!(game.exit_request().map(ExitRequest::code), Some(80));
        assert_eq!(game.state().phase, Phase::Playing);
    }
}
