pub mod invest;
pub mod projection;
pub mod screen;
pub mod ui;
