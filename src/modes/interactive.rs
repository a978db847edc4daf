use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::ops::ControlFlow;
use tokio::time::{Interval, MissedTickBehavior, interval};

use crate::game::{Action, GameConfig, GameEngine, GameState, InputSnapshot};
use crate::input::InputHandler;
use crate::render::Renderer;

/// Plays the game in the terminal until the player quits
pub struct InteractiveMode {
    engine: GameEngine,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Actions pressed since the last tick
    pending: InputSnapshot,
}

impl InteractiveMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    pub fn with_engine(engine: GameEngine) -> Self {
        Self {
            engine,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            pending: InputSnapshot::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                // Raw mode is on; leave the shell usable before bailing out
                let _ = execute!(stderr(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(err);
            }
        };

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        let cleanup = self.cleanup_terminal(&mut terminal);

        log::info!(
            "exiting after {} games, high score {}",
            self.engine.scoreboard().games_played,
            self.engine.scoreboard().high_score
        );
        first_error(result, cleanup)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = screen_timer(&self.engine);

        loop {
            tokio::select! {
                // Collect key presses until the next tick
                maybe_event = event_stream.next() => {
                    if self.on_terminal_event(maybe_event)?.is_break() {
                        break;
                    }
                }

                // Advance the current screen and redraw
                _ = tick_timer.tick() => {
                    let before = self.engine.state();
                    let after = self.engine.tick(&self.pending);
                    self.pending.clear();

                    if after.is_terminal() {
                        break;
                    }

                    let scene = self.engine.scene();
                    let config = self.engine.config();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &scene, config);
                    }).context("Failed to draw frame")?;

                    if before != after {
                        log_transition(before, after);
                        // Each screen runs at its own pace
                        tick_timer = screen_timer(&self.engine);
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.pending.press(Action::Cancel);
                }
            }
        }

        Ok(())
    }

    /// Feed one item of the terminal event stream; breaks once the stream has ended
    fn on_terminal_event(
        &mut self,
        maybe_event: Option<std::io::Result<Event>>,
    ) -> Result<ControlFlow<()>> {
        match maybe_event {
            Some(Ok(event)) => {
                self.handle_event(event);
                Ok(ControlFlow::Continue(()))
            }
            Some(Err(err)) => Err(err).context("Failed to read terminal event"),
            // Input is gone for good
            None => Ok(ControlFlow::Break(())),
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Presses and auto-repeats count, releases do not
            if key.kind == KeyEventKind::Release {
                return;
            }
            self.input_handler.record(key, &mut self.pending);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// The game loop's error wins over a cleanup error
fn first_error(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    result.and(cleanup)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

fn screen_timer(engine: &GameEngine) -> Interval {
    let mut timer = interval(engine.tick_period());
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

fn log_transition(before: GameState, after: GameState) {
    log::info!("{} -> {}", before, after);
}
