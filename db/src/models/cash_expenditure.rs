use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Collection holding petty-cash expenditure records.
pub const COLLECTION: &str = "cashexpenditures";

pub const EXPENSE_TYPE: &str = "Cash Expenditure";
pub const PAYMENT_SOURCE: &str = "petty_cash";
pub const EXPENDITURE_CATEGORY: &str = "other";
pub const STATUS_PENDING: &str = "pending";

/// What the cash was spent on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum Purpose {
    Food,
    Transport,
    Fuel,
    Sacco,
    Abatapowa,
    #[serde(rename = "Office Supplies")]
    #[strum(serialize = "Office Supplies")]
    OfficeSupplies,
    Internet,
    Maintenance,
    Utilities,
    Other,
}

/// Represents a document in the `cashexpenditures` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashExpenditure {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub amount: i32,
    pub purpose: Purpose,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub expenditure_date: DateTime<Utc>,
    pub expense_type: String,
    pub payment_source: String,
    pub expenditure_category: String,
    pub status: String,
    /// `EXP-<YYYY><MM>-<NNNNN>`.
    pub transaction_reference: String,
}

impl CashExpenditure {
    /// A pending petty-cash expenditure with the fixed type, source and category.
    pub fn pending(
        amount: i32,
        purpose: Purpose,
        expenditure_date: DateTime<Utc>,
        transaction_reference: String,
    ) -> Self {
        Self {
            id: None,
            amount,
            purpose,
            expenditure_date,
            expense_type: EXPENSE_TYPE.to_string(),
            payment_source: PAYMENT_SOURCE.to_string(),
            expenditure_category: EXPENDITURE_CATEGORY.to_string(),
            status: STATUS_PENDING.to_string(),
            transaction_reference,
        }
    }
}
