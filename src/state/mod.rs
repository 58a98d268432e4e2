pub mod data_model;
pub mod table_context;
