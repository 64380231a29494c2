use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::game::{GameConfig, GameController, GameEngine, InputAction, IntervalScheduler};
use crate::input::{InputEvent, InputMapper};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, ScreenLayout, TuiView};

/// Interactive play in the terminal
pub struct HumanMode {
    controller: GameController<TuiView, IntervalScheduler>,
    metrics: GameMetrics,
    renderer: Renderer,
    input: InputMapper,
    screen: Rect,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let input = InputMapper::new(config.swipe_threshold);
        let view = TuiView::new(config.grid_size);
        let engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };

        Self {
            controller: GameController::new(engine, view, IntervalScheduler::new()),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input,
            screen: Rect::new(0, 0, 80, 24),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = restore_on_error(self.setup_terminal(), restore_terminal)?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    /// Everything after raw mode; the caller undoes raw mode if this fails.
    fn setup_terminal(&mut self) -> Result<Terminal<CrosstermBackend<Stderr>>> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let (width, height) = crossterm::terminal::size().context("Failed to read terminal size")?;
        self.screen = Rect::new(0, 0, width, height);
        Ok(terminal)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        self.controller.start();
        self.metrics.on_game_start();
        info!("interactive game started");

        loop {
            // Nothing ticks while the game over notice is up or the board
            // does not fit on screen.
            let playable = self.is_playable();

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = self.controller.scheduler_mut().tick(), if playable => {
                    let outcome = self.controller.tick();
                    self.metrics.on_tick(outcome);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.controller.presenter(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn is_playable(&self) -> bool {
        let view = self.controller.presenter();
        !view.has_modal() && ScreenLayout::new(self.screen).fits_board(view.grid_size)
    }

    fn handle_event(&mut self, event: Event) {
        let input = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
            Event::Mouse(mouse) => match self.mouse_input(mouse) {
                Some(input) => input,
                None => return,
            },
            Event::Resize(width, height) => {
                self.screen = Rect::new(0, 0, width, height);
                return;
            }
            _ => return,
        };

        let action = self.input.map(input);
        if action == InputAction::Quit {
            self.should_quit = true;
            return;
        }

        // Any key or click only acknowledges the game over notice.
        if self.controller.presenter().has_modal() {
            if matches!(
                input,
                InputEvent::Key(_) | InputEvent::Button(_) | InputEvent::TouchStart { .. }
            ) {
                self.controller.presenter_mut().dismiss_modal();
                // The period that elapsed behind the notice must not count.
                self.controller.restart_timer();
            }
            return;
        }

        if action == InputAction::Reset {
            self.metrics.on_game_start();
        }
        self.controller.apply(action);
    }

    /// Left-button mouse input doubles as touch: clicks on the footer are
    /// buttons, drags anywhere else are swipes.
    fn mouse_input(&self, mouse: MouseEvent) -> Option<InputEvent> {
        let (x, y) = (f32::from(mouse.column), f32::from(mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = ScreenLayout::new(self.screen);
                Some(match layout.button_at(mouse.column, mouse.row) {
                    Some(button) => InputEvent::Button(button),
                    None => InputEvent::TouchStart { x, y },
                })
            }
            MouseEventKind::Drag(MouseButton::Left) => Some(InputEvent::TouchMove { x, y }),
            MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::TouchEnd),
            _ => None,
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Best-effort undo of everything `run` sets up, for when setup itself failed
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stderr(), DisableMouseCapture, LeaveAlternateScreen, Show);
}

fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}
