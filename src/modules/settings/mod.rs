pub mod controller;
pub mod crud;
pub mod defaults;
pub mod model;
pub mod routes;
pub mod schema;

pub use routes::settings_routes;
