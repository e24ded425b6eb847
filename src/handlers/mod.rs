pub mod auth;
pub mod essay;
pub mod health;
