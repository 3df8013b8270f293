pub mod auth;
pub mod booking;
pub mod customer;
pub mod id;
pub mod list;
pub mod role;
pub mod room;
