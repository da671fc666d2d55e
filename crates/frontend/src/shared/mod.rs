pub mod api_utils;
pub mod date_utils;
pub mod download;
pub mod http;
pub mod notify;
pub mod tags;
