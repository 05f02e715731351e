pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;

pub use routes::router;
pub use store::{SharedStore, Store};
