use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, form and help footer, stacked top to bottom inside a page margin.
pub struct FormPage {
    pub header: Rect,
    pub form: Rect,
    pub footer: Rect,
}

pub fn form_page(size: Rect, form_height: u16) -> FormPage {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(form_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);
    FormPage { header: chunks[0], form: chunks[1], footer: chunks[3] }
}

pub fn centered_rect_abs(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width.saturating_sub(2));
    let h = height.min(r.height.saturating_sub(2));
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}
