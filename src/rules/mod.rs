pub mod data;
pub mod loader;
pub mod registry;

pub use data::*;
pub use loader::*;
pub use registry::*;
