pub mod admin;
pub mod blog;
pub mod messages;
pub mod metrics;
pub mod settings;
pub mod shared;
