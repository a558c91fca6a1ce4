mod common;

use common::{press, type_text};
use crossterm::event::KeyCode;
use twin_calc::app::{AppCtx, ScreenWidget, Transition};
use twin_calc::calc::Operator;
use twin_calc::screens::main_calc::CONTINUE;
use twin_calc::screens::{AnotherCalcScreen, MainCalcScreen};
use twin_calc::types::{RequestTarget, ResultStatus, ScreenResult, Settings};

/// Fill both operands of a calculator form, picking `steps` operator
/// positions to the right of Add, and leave focus on the first button.
async fn fill(screen: &mut dyn ScreenWidget, ctx: &mut AppCtx, a: &str, steps: usize, b: &str) {
    type_text(screen, ctx, a).await;
    press(screen, ctx, KeyCode::Tab).await;
    for _ in 0..steps {
        press(screen, ctx, KeyCode::Right).await;
    }
    press(screen, ctx, KeyCode::Tab).await;
    type_text(screen, ctx, b).await;
    press(screen, ctx, KeyCode::Tab).await;
}

#[tokio::test]
async fn confirm_returns_ok_with_result() {
    let mut ctx = AppCtx::default();
    let mut child = AnotherCalcScreen::new(RequestTarget::First, &ctx.settings);
    fill(&mut child, &mut ctx, "10", 1, "2").await;
    assert_eq!(child.form.operator, Operator::Subtract);
    assert_eq!(child.form.result_text(), "= 8");

    let t = press(&mut child, &mut ctx, KeyCode::Enter).await;
    assert!(matches!(t, Transition::Pop));
    assert_eq!(ctx.pending_result, Some(ScreenResult::ok(RequestTarget::First, 8)));
}

#[tokio::test]
async fn caller_applies_result_to_requesting_field() {
    let mut ctx = AppCtx::default();
    let mut main = MainCalcScreen::new(&ctx.settings);
    main.form.operand1.set_text("1");
    main.form.operand2.set_text("4");
    main.form.refresh();
    assert_eq!(main.form.result_text(), "= 5");

    ctx.pending_result = Some(ScreenResult::ok(RequestTarget::First, 8));
    main.on_resume(&mut ctx);
    assert_eq!(main.form.operand1.text, "8");
    assert_eq!(main.form.result_text(), "= 12");
    assert!(ctx.pending_result.is_none());

    ctx.pending_result = Some(ScreenResult::ok(RequestTarget::Second, -3));
    main.on_resume(&mut ctx);
    assert_eq!(main.form.operand2.text, "-3");
    assert_eq!(main.form.result_text(), "= 5");
}

#[tokio::test]
async fn empty_field_confirms_as_cancel_and_caller_is_unchanged() {
    let mut ctx = AppCtx::default();
    let mut child = AnotherCalcScreen::new(RequestTarget::Second, &ctx.settings);
    fill(&mut child, &mut ctx, "10", 0, "").await;
    assert_eq!(child.form.result_text(), Settings::default().placeholder);

    let t = press(&mut child, &mut ctx, KeyCode::Enter).await;
    assert!(matches!(t, Transition::Pop));
    let returned = ctx.pending_result.clone().expect("child posts a result");
    assert_eq!(returned.status, ResultStatus::Canceled);

    let mut main = MainCalcScreen::new(&ctx.settings);
    main.form.operand2.set_text("7");
    main.form.refresh();
    main.on_resume(&mut ctx);
    assert_eq!(main.form.operand2.text, "7");
    assert!(ctx.pending_result.is_none());
}

#[tokio::test]
async fn esc_cancels() {
    let mut ctx = AppCtx::default();
    let mut child = AnotherCalcScreen::new(RequestTarget::First, &ctx.settings);
    type_text(&mut child, &mut ctx, "42").await;
    let t = press(&mut child, &mut ctx, KeyCode::Esc).await;
    assert!(matches!(t, Transition::Pop));
    assert_eq!(ctx.pending_result, Some(ScreenResult::canceled(RequestTarget::First)));
}

#[tokio::test]
async fn confirm_with_zero_divisor_fails() {
    let mut ctx = AppCtx::default();
    let mut child = AnotherCalcScreen::new(RequestTarget::First, &ctx.settings);
    fill(&mut child, &mut ctx, "5", 3, "0").await;
    assert_eq!(child.form.result_text(), "error: division by zero");

    let err = match child.on_key(common::key(KeyCode::Enter), &mut ctx).await {
        Ok(_) => panic!("dividing by zero must abort the confirm"),
        Err(e) => e,
    };
    assert!(format!("{err:#}").contains("division by zero"));
    assert!(ctx.pending_result.is_none());
}

#[tokio::test]
async fn confirm_with_unparsable_operand_fails() {
    let mut ctx = AppCtx::default();
    let mut child = AnotherCalcScreen::new(RequestTarget::First, &ctx.settings);
    fill(&mut child, &mut ctx, "-", 0, "3").await;
    assert_eq!(child.form.result_text(), Settings::default().placeholder);
    assert!(child.on_key(common::key(KeyCode::Enter), &mut ctx).await.is_err());
}

#[tokio::test]
async fn continue_feeds_result_into_first_operand() {
    let mut ctx = AppCtx::default();
    let mut main = MainCalcScreen::new(&ctx.settings);
    fill(&mut main, &mut ctx, "6", 2, "3").await;
    assert_eq!(main.form.result_text(), "= 18");

    main.form.focus_button(CONTINUE);
    let t = press(&mut main, &mut ctx, KeyCode::Enter).await;
    assert!(matches!(t, Transition::Stay));
    assert_eq!(main.form.operand1.text, "18");
    assert_eq!(main.form.result_text(), "= 54");
}

#[tokio::test]
async fn continue_with_incomplete_input_does_nothing() {
    let mut ctx = AppCtx::default();
    let mut main = MainCalcScreen::new(&ctx.settings);
    fill(&mut main, &mut ctx, "", 0, "4").await;
    main.form.focus_button(CONTINUE);
    press(&mut main, &mut ctx, KeyCode::Enter).await;
    assert_eq!(main.form.operand1.text, "");
    assert_eq!(main.form.result_text(), Settings::default().placeholder);
}

#[tokio::test]
async fn calc_buttons_push_secondary_screen() {
    let mut ctx = AppCtx::default();
    let mut main = MainCalcScreen::new(&ctx.settings);
    main.form.focus_button(1);
    match press(&mut main, &mut ctx, KeyCode::Enter).await {
        Transition::Push(screen) => assert_eq!(screen.title(), "Calculate Number 2"),
        _ => panic!("expected a pushed screen"),
    }
}

#[tokio::test]
async fn overflowing_result_wraps_and_returns() {
    let mut ctx = AppCtx::default();
    let mut child = AnotherCalcScreen::new(RequestTarget::First, &ctx.settings);
    fill(&mut child, &mut ctx, "2147483647", 0, "1").await;
    assert_eq!(child.form.result_text(), "= -2147483648");

    let t = press(&mut child, &mut ctx, KeyCode::Enter).await;
    assert!(matches!(t, Transition::Pop));
    assert_eq!(ctx.pending_result, Some(ScreenResult::ok(RequestTarget::First, i32::MIN)));
}

#[tokio::test]
async fn continue_with_zero_divisor_fails() {
    let mut ctx = AppCtx::default();
    let mut main = MainCalcScreen::new(&ctx.settings);
    fill(&mut main, &mut ctx, "6", 3, "0").await;
    assert_eq!(main.form.result_text(), "error: division by zero");

    main.form.focus_button(CONTINUE);
    let err = match main.on_key(common::key(KeyCode::Enter), &mut ctx).await {
        Ok(_) => panic!("dividing by zero must abort continue"),
        Err(e) => e,
    };
    assert!(format!("{err:#}").contains("division by zero"));
    assert_eq!(main.form.operand1.text, "6");
}
