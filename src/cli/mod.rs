pub mod analyze;
pub mod categories;
pub mod interactive;
pub mod models;
pub mod render;
