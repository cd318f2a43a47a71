use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::Mutex;

use crate::models::{CashExpenditure, CommodityRequest, CustomerContact, User};
use crate::{DbError, DbResult, SeedRepository};

/// In-memory [`SeedRepository`] for tests.
///
/// Inserted documents get a fresh `ObjectId`. With [`MemoryRepository::failing_writes`]
/// every insert and delete returns an error, reads still succeed.
#[derive(Default)]
pub struct MemoryRepository {
    users: Mutex<Vec<User>>,
    cash_expenditures: Mutex<Vec<CashExpenditure>>,
    commodity_requests: Mutex<Vec<CommodityRequest>>,
    customers: Vec<CustomerContact>,
    fail_writes: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<CustomerContact>) -> Self {
        Self {
            customers,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub async fn users(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    pub async fn cash_expenditures(&self) -> Vec<CashExpenditure> {
        self.cash_expenditures.lock().await.clone()
    }

    pub async fn commodity_requests(&self) -> Vec<CommodityRequest> {
        self.commodity_requests.lock().await.clone()
    }

    /// Pre-populates sample collections, as a previous run would have.
    pub async fn preload(&self, cash: Vec<CashExpenditure>, requests: Vec<CommodityRequest>) {
        self.cash_expenditures.lock().await.extend(cash);
        self.commodity_requests.lock().await.extend(requests);
    }

    fn check_writable(&self) -> DbResult<()> {
        if self.fail_writes {
            return Err(DbError::Custom("write rejected by test repository".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SeedRepository for MemoryRepository {
    async fn user_exists(&self, email: &str) -> DbResult<bool> {
        Ok(self.users.lock().await.iter().any(|u| u.email == email))
    }

    async fn insert_user(&self, user: &User) -> DbResult<ObjectId> {
        self.check_writable()?;
        let id = ObjectId::new();
        let mut stored = user.clone();
        stored.id = Some(id);
        self.users.lock().await.push(stored);
        Ok(id)
    }

    async fn clear_cash_expenditures(&self) -> DbResult<u64> {
        self.check_writable()?;
        let mut records = self.cash_expenditures.lock().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }

    async fn insert_cash_expenditure(&self, record: &CashExpenditure) -> DbResult<ObjectId> {
        self.check_writable()?;
        let id = ObjectId::new();
        let mut stored = record.clone();
        stored.id = Some(id);
        self.cash_expenditures.lock().await.push(stored);
        Ok(id)
    }

    async fn clear_commodity_requests(&self) -> DbResult<u64> {
        self.check_writable()?;
        let mut records = self.commodity_requests.lock().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }

    async fn insert_commodity_request(&self, record: &CommodityRequest) -> DbResult<ObjectId> {
        self.check_writable()?;
        let id = ObjectId::new();
        let mut stored = record.clone();
        stored.id = Some(id);
        self.commodity_requests.lock().await.push(stored);
        Ok(id)
    }

    async fn customer_contacts(&self) -> DbResult<Vec<CustomerContact>> {
        Ok(self.customers.clone())
    }
}
