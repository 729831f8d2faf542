// Core domain layer
pub mod interfaces;
pub mod manifest;
pub mod models;
pub mod services;
pub mod starter;

pub use interfaces::*;
pub use manifest::*;
pub use models::*;
pub use services::*;
