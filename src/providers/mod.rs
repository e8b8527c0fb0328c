pub mod aggregates;
pub mod auth;
pub mod config;
pub mod database;
pub mod error_response;
pub mod geocoder;
pub mod identity;
pub mod jwt;
pub mod mailer;
pub mod pagination;
pub mod query;
pub mod response;
