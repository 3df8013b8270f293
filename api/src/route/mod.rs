pub mod auth;
pub mod booking;
pub mod customer;
pub mod health;
pub mod room;
pub mod v1;
