pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod context;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod utils;
