use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Collection owned by the customer module. Read-only here.
pub const COLLECTION: &str = "customers";

/// `6866eb5f4889c3808385717c`
const FALLBACK_ID: [u8; 12] = [
    0x68, 0x66, 0xeb, 0x5f, 0x48, 0x89, 0xc3, 0x80, 0x83, 0x85, 0x71, 0x7c,
];
const FALLBACK_PHONE: &str = "0788989006";

/// The `_id` and `phone` projection of a customer document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CustomerContact {
    /// Identity used when the `customers` collection is empty.
    pub fn fallback() -> Self {
        Self {
            id: ObjectId::from_bytes(FALLBACK_ID),
            phone: Some(FALLBACK_PHONE.to_string()),
        }
    }
}
