use crate::schedule::{MONTHS, SampleDate, sample_dates};
use crate::seed::{SeedSummary, Seeder, pick_variant, seeder_rng};
use chrono::{DateTime, Local, TimeZone};
use db::models::CashExpenditure;
use db::models::cash_expenditure::Purpose;
use db::{DbError, SeedRepository};
use rand::Rng;
use std::ops::RangeInclusive;
use std::pin::Pin;

pub const AMOUNT_RANGE: RangeInclusive<i32> = 1_000..=100_999;

/// Replaces all cash expenditures with randomized records for the trailing months.
pub struct CashExpenditureSeeder {
    rng_seed: Option<u64>,
}

impl CashExpenditureSeeder {
    pub fn new(rng_seed: Option<u64>) -> Self {
        Self { rng_seed }
    }
}

/// `EXP-<YYYY><MM>-<NNNNN>`. The sequence restarts every month.
pub fn transaction_reference(year: i32, month: u32, sequence: u32) -> String {
    format!("EXP-{year}{month:02}-{sequence:05}")
}

fn expenditure_for<R: Rng + ?Sized>(date: &SampleDate, rng: &mut R) -> CashExpenditure {
    CashExpenditure::pending(
        rng.gen_range(AMOUNT_RANGE),
        pick_variant::<Purpose, _>(rng),
        date.at,
        transaction_reference(date.year, date.month, date.index + 1),
    )
}

/// One pending expenditure per sample date up to `now`.
pub fn build_expenditures<Tz, R>(now: &DateTime<Tz>, rng: &mut R) -> Vec<CashExpenditure>
where
    Tz: TimeZone,
    R: Rng + ?Sized,
{
    sample_dates(now)
        .iter()
        .map(|date| expenditure_for(date, rng))
        .collect()
}

impl Seeder for CashExpenditureSeeder {
    fn seed<'a>(
        &'a self,
        repo: &'a dyn SeedRepository,
    ) -> Pin<Box<dyn Future<Output = Result<SeedSummary, DbError>> + Send + 'a>> {
        Box::pin(async move {
            let deleted = repo.clear_cash_expenditures().await?;

            let mut rng = seeder_rng(self.rng_seed);
            let expenditures = build_expenditures(&Local::now(), &mut rng);

            for expenditure in &expenditures {
                repo.insert_cash_expenditure(expenditure).await?;
            }

            tracing::info!(
                count = expenditures.len(),
                "Seeded CashExpenditure records for the past {MONTHS} months"
            );
            Ok(SeedSummary {
                deleted,
                inserted: expenditures.len() as u64,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use db::test_utils::MemoryRepository;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use regex::Regex;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).unwrap()
    }

    #[test]
    fn reference_format() {
        assert_eq!(transaction_reference(2026, 3, 1), "EXP-202603-00001");
        assert_eq!(transaction_reference(2025, 12, 5), "EXP-202512-00005");
    }

    #[test]
    fn references_follow_pattern_and_restart_per_month() {
        let pattern = Regex::new(r"^EXP-\d{6}-\d{5}$").unwrap();
        let records = build_expenditures(&now(), &mut StdRng::seed_from_u64(3));

        assert_eq!(records.len(), 24);
        assert!(records.iter().all(|r| pattern.is_match(&r.transaction_reference)));

        let september: Vec<&str> = records
            .iter()
            .filter(|r| r.transaction_reference.starts_with("EXP-202609-"))
            .map(|r| r.transaction_reference.as_str())
            .collect();
        assert_eq!(
            september,
            [
                "EXP-202609-00001",
                "EXP-202609-00002",
                "EXP-202609-00003",
                "EXP-202609-00004",
                "EXP-202609-00005"
            ]
        );

        let unique: HashSet<&str> = records.iter().map(|r| r.transaction_reference.as_str()).collect();
        assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn amounts_and_constants() {
        let records = build_expenditures(&now(), &mut StdRng::seed_from_u64(11));

        for record in &records {
            assert!(AMOUNT_RANGE.contains(&record.amount));
            assert_eq!(record.expense_type, "Cash Expenditure");
            assert_eq!(record.payment_source, "petty_cash");
            assert_eq!(record.expenditure_category, "other");
            assert_eq!(record.status, "pending");
            assert!(record.expenditure_date <= now());
        }
    }

    #[test]
    fn purposes_vary() {
        let mut rng = StdRng::seed_from_u64(5);
        let seen: HashSet<Purpose> = (0..8)
            .flat_map(|_| build_expenditures(&now(), &mut rng))
            .map(|r| r.purpose)
            .collect();
        assert!(seen.len() > 5);
    }

    #[test]
    fn same_seed_same_records() {
        let a = build_expenditures(&now(), &mut StdRng::seed_from_u64(99));
        let b = build_expenditures(&now(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn seed_replaces_previous_records() {
        let repo = MemoryRepository::new();
        let stale = CashExpenditure::pending(1, Purpose::Other, now(), "OLD".into());
        repo.preload(vec![stale; 3], vec![]).await;

        let summary = CashExpenditureSeeder::new(Some(8)).seed(&repo).await.unwrap();
        let stored = repo.cash_expenditures().await;

        assert_eq!(summary.deleted, 3);
        assert_eq!(summary.inserted, stored.len() as u64);
        assert!(stored.len() <= 25);
        assert!(stored.iter().all(|r| r.transaction_reference.starts_with("EXP-")));
        assert!(stored.iter().all(|r| r.id.is_some()));
        assert!(stored.iter().all(|r| r.expenditure_date <= Utc::now()));
    }

    #[tokio::test]
    async fn seed_stops_on_write_error() {
        let repo = MemoryRepository::failing_writes();
        let result = CashExpenditureSeeder::new(None).seed(&repo).await;
        assert!(result.is_err());
    }
}
