use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::DbResult;

/// Collection holding back-office user accounts.
pub const COLLECTION: &str = "users";

/// bcrypt work factor used for stored passwords.
pub const BCRYPT_COST: u32 = 12;

/// Represents a document in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    /// Unique identity used for existence checks.
    pub email: String,
    /// bcrypt hash. Never the plaintext.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: String,
}

/// Profile values for a user that has not been stored yet.
#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
    pub role: &'a str,
}

impl NewUser<'_> {
    /// Hashes the plaintext password and builds the storable document.
    pub fn into_user(self) -> DbResult<User> {
        Ok(User {
            id: None,
            username: self.username.to_string(),
            email: self.email.to_string(),
            password: hash_password(self.password)?,
            first_name: self.first_name.to_string(),
            last_name: self.last_name.to_string(),
            phone: self.phone.to_string(),
            role: self.role.to_string(),
        })
    }
}

impl User {
    /// Checks a plaintext password against the stored hash.
    pub fn verify_password(&self, password: &str) -> DbResult<bool> {
        Ok(bcrypt::verify(password, &self.password)?)
    }
}

/// Salted one-way hash of `password` at [`BCRYPT_COST`].
pub fn hash_password(password: &str) -> DbResult<String> {
    Ok(bcrypt::hash(password, BCRYPT_COST)?)
}
