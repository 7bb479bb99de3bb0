pub mod aggregator;
pub mod api;
pub mod config;
pub mod data_models;
pub mod endpoints;
pub mod error;
pub mod fetcher;
