//! Contact message service for the showroom site: a small JSON API that
//! validates contact form submissions and persists them to SQLite.

pub mod api;
pub mod models;
pub mod storage;
