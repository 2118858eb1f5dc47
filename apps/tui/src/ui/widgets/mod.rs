pub mod buttons;
pub mod popup;
