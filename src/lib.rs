pub mod app_state;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod repositories;
pub mod services;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
