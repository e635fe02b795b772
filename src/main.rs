//! Tower Jump entry point
//!
//! Runs a headless session: the autopilot plays, frames go to the log, and a
//! JSON summary of the run is printed when it ends.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use serde::Serialize;

    use tower_jump::Settings;
    use tower_jump::platform::{Autopilot, FixedStep, InputSource, InputTracker, ScriptedInput};
    use tower_jump::render::{Frame, Renderer};
    use tower_jump::sim::{GameEvent, Session};

    const FRAME_SLEEP: Duration = Duration::from_millis(2);

    /// How a run ended
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Outcome {
        GameOver,
        Quit,
        TickLimit,
    }

    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        outcome: Outcome,
        score: u64,
        ticks: u64,
        elapsed_secs: f64,
        camera_y: f32,
        scroll_speed: f32,
        jumps: u32,
    }

    /// Logs a one-line frame summary every `every` ticks
    struct LogRenderer {
        every: u64,
        width: f32,
        height: f32,
    }

    impl Renderer for LogRenderer {
        fn draw(&mut self, frame: &Frame) {
            if frame.game_over || (self.every > 0 && frame.tick.is_multiple_of(self.every)) {
                log::info!(
                    "tick {:>6} | score {:>4} | body ({:.0}, {:.0}) | {} platforms on screen",
                    frame.tick,
                    frame.score,
                    frame.body.x,
                    frame.body.y,
                    frame.visible_platforms(self.width, self.height).count()
                );
            }
        }
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    fn run(settings: &Settings) -> RunSummary {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        let mut session = Session::new(seed, settings.tuning.clone());
        let mut source: Box<dyn InputSource> = if settings.autopilot {
            Box::new(Autopilot::new())
        } else {
            Box::new(ScriptedInput::default())
        };
        let mut tracker = InputTracker::new();
        let mut clock = FixedStep::new(settings.tick_dt());
        let mut renderer = LogRenderer {
            every: settings.frame_log_every,
            width: settings.tuning.screen_width,
            height: settings.tuning.screen_height,
        };

        let mut jumps = 0;
        let mut last_frame = Instant::now();
        let outcome = 'run: loop {
            let substeps = if settings.realtime {
                let now = Instant::now();
                let frame_dt = now.duration_since(last_frame).as_secs_f32();
                last_frame = now;
                clock.advance(frame_dt)
            } else {
                1
            };

            for _ in 0..substeps {
                let keys = source.poll(&session);
                if keys.quit {
                    break 'run Outcome::Quit;
                }
                let input = tracker.advance(keys);
                for event in session.tick(&input, clock.step()) {
                    match event {
                        GameEvent::Jumped => jumps += 1,
                        GameEvent::Landed { y } => log::trace!("Landed at y={y}"),
                        GameEvent::ScrollSpeedUp { speed } => log::info!("Scroll speed {speed:.2}"),
                        _ => {}
                    }
                }
                renderer.draw(&Frame::capture(&session));

                if session.is_over() {
                    break 'run Outcome::GameOver;
                }
                if settings.max_ticks > 0 && session.time_ticks >= settings.max_ticks {
                    break 'run Outcome::TickLimit;
                }
            }

            if settings.realtime {
                std::thread::sleep(FRAME_SLEEP);
            }
        };

        RunSummary {
            seed,
            outcome,
            score: session.score,
            ticks: session.time_ticks,
            elapsed_secs: session.elapsed_secs,
            camera_y: session.camera_y,
            scroll_speed: session.scroll_speed,
            jumps,
        }
    }

    pub fn main() {
        env_logger::init();
        log::info!("Tower Jump (headless) starting...");

        let path = std::env::args().nth(1).map(PathBuf::from);
        let settings = Settings::load_or_default(path.as_deref());

        let summary = run(&settings);
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize run summary: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser shell; the library is the deliverable on wasm32
}
