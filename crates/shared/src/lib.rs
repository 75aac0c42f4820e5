pub mod aggregate;
pub mod models;
pub mod projector;
pub mod selection;
pub mod target;
