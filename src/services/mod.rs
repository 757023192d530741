pub mod access_probe;
pub mod listing_service;
