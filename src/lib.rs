pub mod area;
pub mod config;
pub mod io;
pub mod logging;
pub mod state;
#[cfg(feature = "desktop")]
pub mod ui;
