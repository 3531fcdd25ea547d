pub mod library;
pub mod list;
pub mod model;
