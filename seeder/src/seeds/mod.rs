pub mod admin;
pub mod cash_expenditure;
pub mod commodity_request;
