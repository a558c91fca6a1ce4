use anyhow::{Context, Result};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::Frame, layout::Rect, widgets::{Clear, Paragraph}};
use tracing::debug;

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::screens::calc_form::{CalcForm, FormEvent};
use crate::types::{RequestTarget, ScreenResult, Settings};
use crate::ui::components::draw_frame_title;
use crate::ui::help::help_another;
use crate::ui::layout::form_page;

/// Secondary calculator. Whatever it computes goes back to the field that
/// opened it.
pub struct AnotherCalcScreen {
    pub form: CalcForm,
    request: RequestTarget,
    title: String,
}

impl AnotherCalcScreen {
    pub fn new(request: RequestTarget, settings: &Settings) -> Self {
        let n = match request { RequestTarget::First => 1, RequestTarget::Second => 2 };
        Self {
            form: CalcForm::new(settings, &["Back"]),
            request,
            title: format!("Calculate Number {n}"),
        }
    }

    /// Incomplete input cancels; complete input must compute.
    pub fn finish(&self) -> Result<ScreenResult> {
        let result = match self.form.input().evaluate().context("computing the value to return")? {
            Some(value) => ScreenResult::ok(self.request, value),
            None => ScreenResult::canceled(self.request),
        };
        if let Ok(json) = serde_json::to_string(&result) {
            debug!(payload = %json, "returning to caller");
        }
        Ok(result)
    }
}

#[async_trait]
impl ScreenWidget for AnotherCalcScreen {
    fn title(&self) -> &str { &self.title }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let page = form_page(size, self.form.height());
        let header = Paragraph::new("Back returns the result; leave a field empty to cancel.")
            .block(draw_frame_title(self.title()));
        let form = Paragraph::new(self.form.lines()).block(draw_frame_title("Inputs"));

        f.render_widget(Clear, size);
        f.render_widget(header, page.header);
        f.render_widget(form, page.form);
        f.render_widget(help_another(), page.footer);
    }

    async fn on_key(&mut self, k: KeyEvent, ctx: &mut AppCtx) -> Result<Transition> {
        if k.code == KeyCode::Esc {
            ctx.pending_result = Some(ScreenResult::canceled(self.request));
            return Ok(Transition::Pop);
        }
        if let FormEvent::Activated(_) = self.form.handle_key(k) {
            ctx.pending_result = Some(self.finish()?);
            return Ok(Transition::Pop);
        }
        Ok(Transition::Stay)
    }
}
