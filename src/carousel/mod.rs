pub mod config;
pub mod controller;
pub mod position;
pub mod session;
