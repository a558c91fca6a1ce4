use crossterm::event::{KeyCode, KeyEvent};

/// Keys that move focus between form rows, independent of what is focused.
pub enum Nav {
    Next,
    Prev,
}

pub fn focus_nav(k: &KeyEvent) -> Option<Nav> {
    match k.code {
        KeyCode::Down | KeyCode::Tab => Some(Nav::Next),
        KeyCode::Up | KeyCode::BackTab => Some(Nav::Prev),
        _ => None,
    }
}
