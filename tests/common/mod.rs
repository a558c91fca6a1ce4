#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use twin_calc::app::{AppCtx, Router, ScreenWidget, Transition};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub async fn press(screen: &mut dyn ScreenWidget, ctx: &mut AppCtx, code: KeyCode) -> Transition {
    screen.on_key(key(code), ctx).await.expect("key handler failed")
}

pub async fn type_text(screen: &mut dyn ScreenWidget, ctx: &mut AppCtx, text: &str) {
    for c in text.chars() {
        press(screen, ctx, KeyCode::Char(c)).await;
    }
}

pub async fn route(router: &mut Router, codes: &[KeyCode]) {
    for code in codes {
        assert!(router.handle_key(key(*code)).await.expect("key handler failed"), "app exited early");
    }
}

pub async fn route_text(router: &mut Router, text: &str) {
    for c in text.chars() {
        route(router, &[KeyCode::Char(c)]).await;
    }
}

/// Render the top screen and return the buffer as newline-joined rows.
pub fn screen_text(router: &Router) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
    terminal.draw(|f| router.draw(f)).expect("draw");
    let buf = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}
