pub mod help;
pub mod menu;
