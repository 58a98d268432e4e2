pub mod clipboard;
pub mod json_io;
