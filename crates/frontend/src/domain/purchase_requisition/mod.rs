pub mod api;
pub mod tags;
pub mod ui;
