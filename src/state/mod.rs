pub mod action;
pub mod reducer;

pub use action::Action;
pub use reducer::app_state_reducer;
