pub mod config;
pub mod db;
pub mod error;
pub mod http_api;
pub mod models;
pub mod services;
pub mod views;
