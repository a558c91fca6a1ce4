use anyhow::{Context, Result};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::Frame, layout::Rect, widgets::Paragraph};
use tracing::{debug, info};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::screens::calc_form::{CalcForm, FormEvent};
use crate::screens::AnotherCalcScreen;
use crate::types::{RequestTarget, ScreenResult, Settings};
use crate::ui::components::draw_frame_title;
use crate::ui::help::help_main;
use crate::ui::layout::form_page;

pub const CALC_FIRST: usize = 0;
pub const CALC_SECOND: usize = 1;
pub const CONTINUE: usize = 2;

pub struct MainCalcScreen {
    pub form: CalcForm,
}

impl MainCalcScreen {
    pub fn new(settings: &Settings) -> Self {
        Self { form: CalcForm::new(settings, &["Calc → 1", "Calc → 2", "Continue"]) }
    }

    /// Take a child's answer. Anything but a successful result carrying the
    /// result key leaves the form untouched.
    pub fn apply_result(&mut self, result: &ScreenResult) -> bool {
        let Some(value) = result.result() else {
            debug!(request = ?result.request, status = ?result.status, "child result ignored");
            return false;
        };
        info!(request = ?result.request, value, "child result applied");
        self.form.set_operand(result.request, value);
        true
    }

    /// Feed the current result back into the first operand.
    fn continue_calculating(&mut self) -> Result<()> {
        let Some(value) = self.form.input().evaluate().context("continuing the calculation")? else {
            return Ok(());
        };
        debug!(value, "continue");
        self.form.set_operand(RequestTarget::First, value);
        Ok(())
    }
}

impl Default for MainCalcScreen { fn default() -> Self { Self::new(&Settings::default()) } }

#[async_trait]
impl ScreenWidget for MainCalcScreen {
    fn title(&self) -> &str { "Calculator" }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let page = form_page(size, self.form.height());
        let header = Paragraph::new("Pick two numbers and an operator. Calc → n fills Number n from a second calculator.")
            .block(draw_frame_title(self.title()));
        let form = Paragraph::new(self.form.lines()).block(draw_frame_title("Inputs"));

        f.render_widget(header, page.header);
        f.render_widget(form, page.form);
        f.render_widget(help_main(), page.footer);
    }

    fn on_resume(&mut self, ctx: &mut AppCtx) {
        if let Some(result) = ctx.pending_result.take() {
            self.apply_result(&result);
        }
    }

    async fn on_key(&mut self, k: KeyEvent, ctx: &mut AppCtx) -> Result<Transition> {
        if k.code == KeyCode::Esc {
            return Ok(Transition::Pop);
        }
        match self.form.handle_key(k) {
            FormEvent::Activated(CALC_FIRST) => {
                return Ok(Transition::Push(Box::new(AnotherCalcScreen::new(RequestTarget::First, &ctx.settings))));
            }
            FormEvent::Activated(CALC_SECOND) => {
                return Ok(Transition::Push(Box::new(AnotherCalcScreen::new(RequestTarget::Second, &ctx.settings))));
            }
            FormEvent::Activated(CONTINUE) => self.continue_calculating()?,
            _ => {}
        }
        Ok(Transition::Stay)
    }
}
