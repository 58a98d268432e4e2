//! Selection, fill-preview and copy highlight areas.

pub mod autofill;
pub mod dom;
pub mod geometry;
pub mod indices;
pub mod model;
pub mod store;
pub mod style;
