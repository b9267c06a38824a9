pub mod greeter;
pub mod handler;
pub mod invoke;
pub mod models;
pub mod schema;
