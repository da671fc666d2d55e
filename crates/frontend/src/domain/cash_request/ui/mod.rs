pub mod approvals;
pub mod details;
pub mod list;
