use ratatui::{
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::style::{span_key, span_sep, span_text};

pub fn help_main<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Move"), span_sep(),
        span_key("0-9/-"), span_text(" Edit"), span_sep(),
        span_key("←/→/Space"), span_text(" Operator"), span_sep(),
        span_key("Enter"), span_text(" Press button"), span_sep(),
        span_key("Esc"), span_text(" Quit"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]);
    Paragraph::new(line).block(Block::default().borders(Borders::ALL)).wrap(Wrap { trim: true })
}

pub fn help_another<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Move"), span_sep(),
        span_key("0-9/-"), span_text(" Edit"), span_sep(),
        span_key("←/→/Space"), span_text(" Operator"), span_sep(),
        span_key("Enter"), span_text(" Return result (on [Back])"), span_sep(),
        span_key("Esc"), span_text(" Cancel"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]);
    Paragraph::new(line).block(Block::default().borders(Borders::ALL)).wrap(Wrap { trim: true })
}
