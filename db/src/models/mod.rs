pub mod cash_expenditure;
pub mod commodity_request;
pub mod customer;
pub mod user;

pub use cash_expenditure::CashExpenditure;
pub use commodity_request::CommodityRequest;
pub use customer::CustomerContact;
pub use user::User;
