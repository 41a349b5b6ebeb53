//! Content backend for a portfolio site: case studies, contact messages,
//! site settings and admin sessions over a SQLite store.

pub mod auth;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi_config;
pub mod repositories;
pub mod services;
