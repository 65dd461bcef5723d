//! StArWaRs entry point
//!
//! Headless native host: reads input commands from stdin on a separate
//! thread, drives the game at a fixed cadence, streams render snapshots to
//! stdout and exits with whatever code the session asks for.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use starwars::audio::LoggingAudio;
use starwars::renderer::JsonLinesRenderer;
use starwars::script::Command;
use starwars::sim::KeyEvent;
use starwars::{Game, Settings};

/// Spawn the stdin reader. Bad lines are logged and skipped.
fn spawn_input_reader() -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for (number, line) in stdin.lock().lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Input read error: {}", e);
                    break;
                }
            };
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => log::warn!("Ignoring input line {}: {}", number + 1, e),
            }
        }
        log::debug!("Input reader finished");
    });
    rx
}

/// Commands received but not yet applied
struct PendingInput {
    queue: VecDeque<Command>,
    wait_frames: u32,
    closed: bool,
}

impl PendingInput {
    fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            wait_frames: 0,
            closed: false,
        }
    }

    fn receive(&mut self, rx: &Receiver<Command>) {
        loop {
            match rx.try_recv() {
                Ok(command) => self.queue.push_back(command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    break;
                }
            }
        }
    }

    /// Apply queued commands up to the next `wait`
    fn apply<A, R>(&mut self, game: &mut Game<A, R>)
    where
        A: starwars::audio::AudioSink,
        R: starwars::renderer::RenderSink,
    {
        while self.wait_frames == 0 {
            let Some(command) = self.queue.pop_front() else {
                break;
            };
            match command {
                Command::Event(event) => game.handle(event),
                Command::Tap(key) => {
                    game.handle(KeyEvent::Pressed(key));
                    game.handle(KeyEvent::Released(key));
                }
                Command::Wait(frames) => self.wait_frames = frames,
            }
        }
    }

    fn end_frame(&mut self) {
        self.wait_frames = self.wait_frames.saturating_sub(1);
    }

    fn exhausted(&self) -> bool {
        self.closed && self.queue.is_empty() && self.wait_frames == 0
    }
}

fn main() {
    env_logger::init();
    log::info!("StArWaRs (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    let audio = LoggingAudio::from_settings(&settings);
    let renderer = JsonLinesRenderer::new(std::io::stdout(), settings.snapshot_every);
    let mut game = Game::new(seed, audio, renderer);

    let rx = spawn_input_reader();
    let mut pending = PendingInput::new();
    let interval = Duration::from_millis(settings.tick_interval_ms);
    let mut next_frame = Instant::now();

    let code = loop {
        pending.receive(&rx);
        pending.apply(&mut game);
        if let Some(exit) = game.exit_request() {
            break exit.code();
        }

        game.frame();
        pending.end_frame();

        if pending.exhausted() {
            log::info!("Input closed after {} frames", game.frames());
            break 0;
        }

        next_frame += interval;
        let now = Instant::now();
        if next_frame > now {
            thread::sleep(next_frame - now);
        } else {
            // Fell behind; don't try to catch up
            next_frame = now;
        }
    };

    log::info!(
        "Exiting with code {} (score {}, {} cues logged)",
        code,
        game.state().score,
        game.audio().logged()
    );
    std::process::exit(code);
}
