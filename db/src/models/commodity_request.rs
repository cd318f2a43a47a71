use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Collection holding customer commodity requests.
pub const COLLECTION: &str = "commodityrequests";

/// Commodities the back office takes requests for.
pub const COMMODITY_NAMES: [&str; 10] = [
    "Basmatti",
    "White star",
    "Pilao",
    "Gnuts",
    "Kick Snacks",
    "Maize",
    "Beans",
    "Sugar",
    "Salt",
    "Rice",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductType {
    Other,
    UnitBased,
    WeightBased,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Fulfilled,
    PartiallyFulfilled,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Represents a document in the `commodityrequests` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub commodity_name: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub requested_date: DateTime<Utc>,
    pub quantity_desired: i32,
    pub product_type: ProductType,
    pub status: RequestStatus,
    /// Reference into the `customers` collection.
    pub customer_id: ObjectId,
    /// Customer phone at the time of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_contact: Option<String>,
    pub priority: Priority,
    pub fulfilled_quantity: i32,
}
