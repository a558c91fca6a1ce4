use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::calc::Operator;

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn with(text: &str) -> Self {
        Self { text: text.into(), cursor: text.len() }
    }
    pub fn set_text(&mut self, text: &str) { self.text = text.into(); self.cursor = self.text.len(); }
    pub fn insert_char(&mut self, c: char) { self.text.insert(self.cursor, c); self.cursor += c.len_utf8(); }
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.text[..self.cursor].chars().next_back() else { return false };
        self.cursor -= prev.len_utf8();
        self.text.remove(self.cursor);
        true
    }
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() { self.text.remove(self.cursor); true } else { false }
    }
    pub fn move_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() { self.cursor -= prev.len_utf8(); }
    }
    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() { self.cursor += next.len_utf8(); }
    }
    pub fn home(&mut self) { self.cursor = 0; }
    pub fn end(&mut self) { self.cursor = self.text.len(); }
}

pub fn draw_frame_title(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

/// "[ label ]", highlighted when focused. Several can share a line.
pub fn form_button_spans(label: &str, focused: bool) -> Vec<Span<'static>> {
    let (lbr, rbr) = (
        Span::styled("[ ", Style::default().fg(Color::DarkGray)),
        Span::styled(" ]", Style::default().fg(Color::DarkGray)),
    );
    let inner = if focused {
        Span::styled(label.to_string(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    } else {
        Span::raw(label.to_string())
    };
    vec![lbr, inner, rbr]
}

// Bash-style block cursor that covers the char (no shifting)
pub fn field_spans(label: &str, field: &TextField, focused: bool) -> Vec<Span<'static>> {
    let label_s = format!("{label}: ");
    let text = field.text.as_str();
    let cur = field.cursor.min(text.len());
    let label_span = Span::styled(label_s, Style::default().fg(Color::Yellow));

    if !focused {
        return vec![label_span, Span::raw(text.to_string())];
    }

    let (left, rest) = text.split_at(cur);
    let block = |s: &str| {
        Span::styled(
            s.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    if let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];
        vec![
            label_span,
            Span::raw(left.to_string()),
            block(&ch.to_string()),
            Span::raw(after.to_string()),
        ]
    } else {
        vec![label_span, Span::raw(left.to_string()), block(" ")]
    }
}

pub fn field_line_text<'a>(label: &str, field: &TextField, focused: bool) -> Line<'a> {
    Line::from(field_spans(label, field, focused))
}

/// "Operator: ◂ × Multiply ▸", arrows lit when focused.
pub fn operator_line<'a>(op: Operator, focused: bool) -> Line<'a> {
    let arrow = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled("Operator: ", Style::default().fg(Color::Yellow)),
        Span::styled("◂ ", arrow),
        Span::styled(format!("{} {}", op.symbol(), op.label()), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" ▸", arrow),
    ])
}

pub fn result_line<'a>(text: &str) -> Line<'a> {
    let style = if text.starts_with("error:") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled("Result: ", Style::default().fg(Color::Yellow)),
        Span::styled(text.to_string(), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::TextField;

    #[test]
    fn edits_at_cursor() {
        let mut f = TextField::with("12");
        f.move_left();
        f.insert_char('5');
        assert_eq!(f.text, "152");
        assert!(f.backspace());
        assert_eq!(f.text, "12");
        f.home();
        assert!(!f.backspace());
        assert!(f.delete());
        assert_eq!(f.text, "2");
        f.end();
        assert!(!f.delete());
    }

    #[test]
    fn set_text_moves_cursor_to_end() {
        let mut f = TextField::default();
        f.set_text("-8");
        assert_eq!(f.cursor, 2);
        f.insert_char('0');
        assert_eq!(f.text, "-80");
    }
}
