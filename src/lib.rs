pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;
