pub mod config;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod request;
pub mod response;
pub mod skill;
