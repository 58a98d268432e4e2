pub mod actions;
pub mod app;
pub mod table;
