pub mod another_calc;
pub mod calc_form;
pub mod confirm_quit;
pub mod main_calc;

// Re-exports so you can keep using crate::screens::XYZScreen
pub use another_calc::AnotherCalcScreen;
pub use confirm_quit::ConfirmQuitScreen;
pub use main_calc::MainCalcScreen;
