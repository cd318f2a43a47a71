use crate::schedule::{MONTHS, sample_dates};
use crate::seed::{SeedSummary, Seeder, pick_variant, seeder_rng};
use chrono::{DateTime, Local, TimeZone};
use db::models::commodity_request::{COMMODITY_NAMES, Priority, ProductType, RequestStatus};
use db::models::{CommodityRequest, CustomerContact};
use db::{DbError, SeedRepository};
use rand::Rng;
use std::ops::RangeInclusive;
use std::pin::Pin;

pub const QUANTITY_RANGE: RangeInclusive<i32> = 10..=109;

/// Replaces all commodity requests with randomized records for the trailing months,
/// attached to existing customers when there are any.
pub struct CommodityRequestSeeder {
    rng_seed: Option<u64>,
}

impl CommodityRequestSeeder {
    pub fn new(rng_seed: Option<u64>) -> Self {
        Self { rng_seed }
    }
}

/// One request per sample date up to `now`, each for a customer drawn from `customers`.
///
/// An empty `customers` means every request goes to [`CustomerContact::fallback`].
/// `fulfilled_quantity` starts at zero whatever the status.
pub fn build_requests<Tz, R>(
    now: &DateTime<Tz>,
    customers: &[CustomerContact],
    rng: &mut R,
) -> Vec<CommodityRequest>
where
    Tz: TimeZone,
    R: Rng + ?Sized,
{
    let fallback = [CustomerContact::fallback()];
    let customers = if customers.is_empty() { &fallback[..] } else { customers };

    sample_dates(now)
        .iter()
        .map(|date| {
            let customer = &customers[rng.gen_range(0..customers.len())];
            CommodityRequest {
                id: None,
                commodity_name: COMMODITY_NAMES[rng.gen_range(0..COMMODITY_NAMES.len())]
                    .to_string(),
                requested_date: date.at,
                quantity_desired: rng.gen_range(QUANTITY_RANGE),
                product_type: pick_variant::<ProductType, _>(rng),
                status: pick_variant::<RequestStatus, _>(rng),
                customer_id: customer.id,
                customer_contact: customer.phone.clone(),
                priority: pick_variant::<Priority, _>(rng),
                fulfilled_quantity: 0,
            }
        })
        .collect()
}

impl Seeder for CommodityRequestSeeder {
    fn seed<'a>(
        &'a self,
        repo: &'a dyn SeedRepository,
    ) -> Pin<Box<dyn Future<Output = Result<SeedSummary, DbError>> + Send + 'a>> {
        Box::pin(async move {
            let deleted = repo.clear_commodity_requests().await?;

            let customers = repo.customer_contacts().await?;
            if customers.is_empty() {
                tracing::warn!("No customers found, using the fallback customer");
            }

            let mut rng = seeder_rng(self.rng_seed);
            let requests = build_requests(&Local::now(), &customers, &mut rng);

            for request in &requests {
                repo.insert_commodity_request(request).await?;
            }

            tracing::info!(
                count = requests.len(),
                customers = customers.len(),
                "Seeded CommodityRequest records for the past {MONTHS} months"
            );
            Ok(SeedSummary {
                deleted,
                inserted: requests.len() as u64,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use db::bson::oid::ObjectId;
    use db::test_utils::MemoryRepository;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).unwrap()
    }

    fn customers(n: usize) -> Vec<CustomerContact> {
        (0..n)
            .map(|i| CustomerContact {
                id: ObjectId::new(),
                phone: Some(format!("07{i:08}")),
            })
            .collect()
    }

    #[test]
    fn field_values_stay_in_their_sets() {
        let known = customers(4);
        let requests = build_requests(&now(), &known, &mut StdRng::seed_from_u64(21));

        assert_eq!(requests.len(), 24);
        for request in &requests {
            assert!(COMMODITY_NAMES.contains(&request.commodity_name.as_str()));
            assert!(QUANTITY_RANGE.contains(&request.quantity_desired));
            assert_eq!(request.fulfilled_quantity, 0);
            assert!(request.requested_date <= now());

            let customer = known.iter().find(|c| c.id == request.customer_id).unwrap();
            assert_eq!(request.customer_contact, customer.phone);
        }
    }

    #[test]
    fn customers_are_drawn_across_the_set() {
        let known = customers(3);
        let mut rng = StdRng::seed_from_u64(2);
        let used: HashSet<ObjectId> = (0..4)
            .flat_map(|_| build_requests(&now(), &known, &mut rng))
            .map(|r| r.customer_id)
            .collect();
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn fulfilled_requests_still_start_at_zero() {
        let known = customers(1);
        let mut rng = StdRng::seed_from_u64(13);
        let fulfilled: Vec<CommodityRequest> = (0..10)
            .flat_map(|_| build_requests(&now(), &known, &mut rng))
            .filter(|r| r.status == RequestStatus::Fulfilled)
            .collect();

        assert!(!fulfilled.is_empty());
        assert!(fulfilled.iter().all(|r| r.fulfilled_quantity == 0));
    }

    #[test]
    fn empty_customer_list_uses_the_fallback() {
        let fallback = CustomerContact::fallback();
        let requests = build_requests(&now(), &[], &mut StdRng::seed_from_u64(6));

        assert_eq!(requests.len(), 24);
        assert!(requests.iter().all(|r| r.customer_id == fallback.id));
        assert!(requests.iter().all(|r| r.customer_contact == fallback.phone));
    }

    #[tokio::test]
    async fn falls_back_when_no_customers_exist() {
        let repo = MemoryRepository::new();

        let summary = CommodityRequestSeeder::new(Some(4)).seed(&repo).await.unwrap();
        let stored = repo.commodity_requests().await;
        let fallback = CustomerContact::fallback();

        assert_eq!(summary.inserted, stored.len() as u64);
        assert!(!stored.is_empty());
        assert!(stored.iter().all(|r| r.customer_id == fallback.id));
        assert!(stored.iter().all(|r| r.customer_contact == fallback.phone));
    }

    #[tokio::test]
    async fn references_existing_customers_and_replaces_old_records() {
        let known = customers(5);
        let repo = MemoryRepository::with_customers(known.clone());
        let old = build_requests(&now(), &known, &mut StdRng::seed_from_u64(1));
        repo.preload(vec![], old.clone()).await;

        let summary = CommodityRequestSeeder::new(None).seed(&repo).await.unwrap();
        let stored = repo.commodity_requests().await;
        let ids: HashSet<ObjectId> = known.iter().map(|c| c.id).collect();

        assert_eq!(summary.deleted, old.len() as u64);
        assert!(stored.len() <= 25);
        assert!(stored.iter().all(|r| ids.contains(&r.customer_id)));
        assert!(stored.iter().all(|r| r.requested_date <= Utc::now()));
    }

    #[tokio::test]
    async fn write_error_is_returned() {
        let repo = MemoryRepository::failing_writes();
        let result = CommodityRequestSeeder::new(None).seed(&repo).await;
        assert!(matches!(result, Err(DbError::Custom(_))));
    }
}
