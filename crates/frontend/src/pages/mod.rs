pub mod dashboard;
pub mod external_quote;
pub mod login;
