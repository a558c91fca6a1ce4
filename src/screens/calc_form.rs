//! The operand/operator/result block both calculator screens are built from.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use crate::calc::{present, CalculationInput, Operator};
use crate::types::{RequestTarget, Settings};
use crate::ui::common_nav::{focus_nav, Nav};
use crate::ui::components::{form_button_spans, field_line_text, operator_line, result_line, TextField};

const OPERAND1: usize = 0;
const OPERATOR: usize = 1;
const OPERAND2: usize = 2;
const FIRST_BUTTON: usize = 3;

/// What a key did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Not a form key; the screen may handle it.
    Ignored,
    /// Focus or cursor moved, nothing to recompute.
    Moved,
    /// An operand or the operator changed and the label was recomputed.
    Changed,
    /// Enter on the n-th button.
    Activated(usize),
}

pub struct CalcForm {
    pub operand1: TextField,
    pub operand2: TextField,
    pub operator: Operator,
    pub focus: usize,
    buttons: &'static [&'static str],
    placeholder: String,
    result_text: String,
}

impl CalcForm {
    pub fn new(settings: &Settings, buttons: &'static [&'static str]) -> Self {
        Self {
            operand1: TextField::default(),
            operand2: TextField::default(),
            operator: settings.initial_operator,
            focus: OPERAND1,
            buttons,
            placeholder: settings.placeholder.clone(),
            result_text: settings.placeholder.clone(),
        }
    }

    pub fn input(&self) -> CalculationInput {
        CalculationInput::new(self.operand1.text.as_str(), self.operand2.text.as_str(), self.operator)
    }

    pub fn result_text(&self) -> &str { &self.result_text }

    pub fn refresh(&mut self) {
        self.result_text = present(&self.input(), &self.placeholder);
    }

    /// Overwrite one operand with a computed value and recompute the label.
    pub fn set_operand(&mut self, target: RequestTarget, value: i32) {
        let field = match target {
            RequestTarget::First => &mut self.operand1,
            RequestTarget::Second => &mut self.operand2,
        };
        field.set_text(&value.to_string());
        self.refresh();
    }

    pub fn focus_button(&mut self, n: usize) {
        if n < self.buttons.len() {
            self.focus = FIRST_BUTTON + n;
        }
    }

    fn slots(&self) -> usize { FIRST_BUTTON + self.buttons.len() }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            OPERAND1 => Some(&mut self.operand1),
            OPERAND2 => Some(&mut self.operand2),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, k: KeyEvent) -> FormEvent {
        if let Some(nav) = focus_nav(&k) {
            let n = self.slots();
            self.focus = match nav {
                Nav::Next => (self.focus + 1) % n,
                Nav::Prev => (self.focus + n - 1) % n,
            };
            return FormEvent::Moved;
        }

        if self.focus == OPERATOR {
            return match k.code {
                KeyCode::Right | KeyCode::Char(' ') => { self.operator = self.operator.next(); self.refresh(); FormEvent::Changed }
                KeyCode::Left => { self.operator = self.operator.prev(); self.refresh(); FormEvent::Changed }
                _ => FormEvent::Ignored,
            };
        }

        if self.focus >= FIRST_BUTTON {
            return match k.code {
                KeyCode::Enter => FormEvent::Activated(self.focus - FIRST_BUTTON),
                KeyCode::Left if self.focus > FIRST_BUTTON => { self.focus -= 1; FormEvent::Moved }
                KeyCode::Right if self.focus + 1 < self.slots() => { self.focus += 1; FormEvent::Moved }
                _ => FormEvent::Ignored,
            };
        }

        let Some(field) = self.focused_field() else { return FormEvent::Ignored };
        let changed = match k.code {
            KeyCode::Left => { field.move_left(); false }
            KeyCode::Right => { field.move_right(); false }
            KeyCode::Home => { field.home(); false }
            KeyCode::End => { field.end(); false }
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            // number pad only: digits and a sign
            KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) && (c.is_ascii_digit() || c == '-') => {
                field.insert_char(c);
                true
            }
            _ => return FormEvent::Ignored,
        };
        if changed {
            self.refresh();
            FormEvent::Changed
        } else {
            FormEvent::Moved
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut buttons: Vec<Span<'static>> = Vec::new();
        for (i, label) in self.buttons.iter().enumerate() {
            if i > 0 {
                buttons.push(Span::raw("  "));
            }
            buttons.extend(form_button_spans(label, self.focus == FIRST_BUTTON + i));
        }
        vec![
            field_line_text("Number 1", &self.operand1, self.focus == OPERAND1),
            operator_line(self.operator, self.focus == OPERATOR),
            field_line_text("Number 2", &self.operand2, self.focus == OPERAND2),
            Line::from(""),
            result_line(&self.result_text),
            Line::from(""),
            Line::from(buttons),
        ]
    }

    pub fn height(&self) -> u16 { self.lines().len() as u16 + 2 }
}
