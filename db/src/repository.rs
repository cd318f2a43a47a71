//! Storage seam for the seeders.
//!
//! Seeders only talk to a [`SeedRepository`]. [`MongoRepository`] is the
//! production implementation over a single `mongodb::Database` handle;
//! `test_utils::MemoryRepository` backs the tests.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, doc, oid::ObjectId};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::models::{cash_expenditure, commodity_request, customer, user};
use crate::models::{CashExpenditure, CommodityRequest, CustomerContact, User};
use crate::{DbError, DbResult};

#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Whether a user with this e-mail exists.
    async fn user_exists(&self, email: &str) -> DbResult<bool>;

    async fn insert_user(&self, user: &User) -> DbResult<ObjectId>;

    /// Deletes every cash expenditure and returns how many were removed.
    async fn clear_cash_expenditures(&self) -> DbResult<u64>;

    async fn insert_cash_expenditure(&self, record: &CashExpenditure) -> DbResult<ObjectId>;

    /// Deletes every commodity request and returns how many were removed.
    async fn clear_commodity_requests(&self) -> DbResult<u64>;

    async fn insert_commodity_request(&self, record: &CommodityRequest) -> DbResult<ObjectId>;

    /// All customers, projected to `_id` and `phone`.
    async fn customer_contacts(&self) -> DbResult<Vec<CustomerContact>>;
}

pub struct MongoRepository {
    db: Database,
}

impl MongoRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection(user::COLLECTION)
    }

    fn cash_expenditures(&self) -> Collection<CashExpenditure> {
        self.db.collection(cash_expenditure::COLLECTION)
    }

    fn commodity_requests(&self) -> Collection<CommodityRequest> {
        self.db.collection(commodity_request::COLLECTION)
    }

    fn customers(&self) -> Collection<CustomerContact> {
        self.db.collection(customer::COLLECTION)
    }
}

fn inserted_object_id(collection: &str, id: Bson) -> DbResult<ObjectId> {
    id.as_object_id().ok_or_else(|| {
        DbError::Custom(format!("{collection}: insert returned non-ObjectId _id {id}"))
    })
}

#[async_trait]
impl SeedRepository for MongoRepository {
    async fn user_exists(&self, email: &str) -> DbResult<bool> {
        let count = self
            .users()
            .count_documents(doc! { "email": email }, None)
            .await?;
        Ok(count > 0)
    }

    async fn insert_user(&self, user: &User) -> DbResult<ObjectId> {
        let result = self.users().insert_one(user, None).await?;
        inserted_object_id(user::COLLECTION, result.inserted_id)
    }

    async fn clear_cash_expenditures(&self) -> DbResult<u64> {
        let result = self.cash_expenditures().delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }

    async fn insert_cash_expenditure(&self, record: &CashExpenditure) -> DbResult<ObjectId> {
        let result = self.cash_expenditures().insert_one(record, None).await?;
        inserted_object_id(cash_expenditure::COLLECTION, result.inserted_id)
    }

    async fn clear_commodity_requests(&self) -> DbResult<u64> {
        let result = self.commodity_requests().delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }

    async fn insert_commodity_request(&self, record: &CommodityRequest) -> DbResult<ObjectId> {
        let result = self.commodity_requests().insert_one(record, None).await?;
        inserted_object_id(commodity_request::COLLECTION, result.inserted_id)
    }

    async fn customer_contacts(&self) -> DbResult<Vec<CustomerContact>> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 1, "phone": 1 })
            .build();
        let cursor = self.customers().find(doc! {}, options).await?;
        Ok(cursor.try_collect::<Vec<_>>().await?)
    }
}
