use anyhow::Result;
use async_trait::async_trait;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    prelude::Frame,
    widgets::Clear,
    Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::defaults::Defaults;
use crate::screens::{ConfirmQuitScreen, MainCalcScreen};
use crate::types::{ScreenResult, Settings};

pub enum Transition {
    Stay,
    Push(Box<dyn ScreenWidget>),
    Pop,
    Quit,
}

#[derive(Default)]
pub struct AppCtx {
    pub settings: Settings,

    /// Set by a child screen right before it pops itself.
    /// The screen underneath should `take()` it in `on_resume`.
    pub pending_result: Option<ScreenResult>,
}

impl AppCtx {
    pub fn new(settings: Settings) -> Self {
        Self { settings, pending_result: None }
    }
}

#[async_trait]
pub trait ScreenWidget: Send {
    fn title(&self) -> &str { "Calculator" }
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &AppCtx);

    /// Called before each draw when this screen is on top.
    /// Use this to apply a result handed back by a popped child.
    fn on_resume(&mut self, _ctx: &mut AppCtx) {}

    async fn on_key(&mut self, key: KeyEvent, ctx: &mut AppCtx) -> Result<Transition>;
}

/// Screen stack plus the context shared with whichever screen is on top.
pub struct Router {
    stack: Vec<Box<dyn ScreenWidget>>,
    pub ctx: AppCtx,
}

impl Router {
    pub fn new(root: Box<dyn ScreenWidget>, ctx: AppCtx) -> Self {
        Self { stack: vec![root], ctx }
    }

    pub fn depth(&self) -> usize { self.stack.len() }

    pub fn top_title(&self) -> Option<&str> {
        self.stack.last().map(|s| s.title())
    }

    pub fn resume_top(&mut self) {
        if let Some(top) = self.stack.last_mut() {
            top.on_resume(&mut self.ctx);
        }
    }

    pub fn draw(&self, f: &mut Frame<'_>) {
        let size = f.size();
        if let Some(top) = self.stack.last() {
            top.draw(f, size, &self.ctx);
        } else {
            f.render_widget(Clear, size);
        }
    }

    /// Feed one key press to the top screen. Returns `false` once the app
    /// should exit.
    pub async fn handle_key(&mut self, k: KeyEvent) -> Result<bool> {
        // GLOBAL HOTKEY: Ctrl+Q shows confirm quit from anywhere
        if k.modifiers.contains(KeyModifiers::CONTROL) && matches!(k.code, KeyCode::Char('q' | 'Q')) {
            self.stack.push(Box::new(ConfirmQuitScreen::new()));
            return Ok(true);
        }

        let Some(top) = self.stack.last_mut() else {
            return Ok(false);
        };
        match top.on_key(k, &mut self.ctx).await? {
            Transition::Stay => {}
            Transition::Push(s) => {
                debug!(screen = s.title(), "push");
                self.stack.push(s);
            }
            Transition::Pop => {
                if let Some(s) = self.stack.pop() {
                    debug!(screen = s.title(), "pop");
                }
                if self.stack.is_empty() {
                    return Ok(false);
                }
            }
            Transition::Quit => return Ok(false),
        }
        // Let the (possibly new) top pick up anything left for it.
        self.resume_top();
        Ok(true)
    }
}

pub async fn run_app(settings: Settings) -> Result<()> {
    // terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?; // clean start

    let root = Box::new(MainCalcScreen::new(&settings));
    let mut router = Router::new(root, AppCtx::new(settings));
    info!("calculator started");

    let outcome = event_loop(&mut terminal, &mut router).await;

    // restore, even when a screen bailed out with an error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &outcome {
        Ok(()) => info!("calculator closed"),
        Err(e) => error!(error = %e, "calculator aborted"),
    }
    outcome
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, router: &mut Router) -> Result<()> {
    loop {
        router.resume_top();
        terminal.draw(|f| router.draw(f))?;

        if event::poll(Duration::from_millis(Defaults::POLL_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    if !router.handle_key(k).await? {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}
