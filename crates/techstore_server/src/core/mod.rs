pub mod auth;
pub mod error;
pub mod health;
pub mod roles;
pub mod router;
pub mod setup;
pub mod state;
pub mod users;
