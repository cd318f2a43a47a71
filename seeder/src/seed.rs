use colored::*;
use db::{DbError, SeedRepository};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::pin::Pin;
use std::time::Instant;
use strum::IntoEnumIterator;

const STATUS_COLUMN: usize = 80;

/// Documents removed and written by one seeder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub deleted: u64,
    pub inserted: u64,
}

pub trait Seeder {
    fn seed<'a>(
        &'a self,
        repo: &'a dyn SeedRepository,
    ) -> Pin<Box<dyn Future<Output = Result<SeedSummary, DbError>> + Send + 'a>>;
}

/// Runs one seeder and prints its status line once it has finished.
///
/// The error is returned untouched so the caller decides how the run ends.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    repo: &dyn SeedRepository,
) -> Result<SeedSummary, DbError> {
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub("Seeding ".len() + name.len()));
    let start = Instant::now();

    match seeder.seed(repo).await {
        Ok(summary) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("Seeding {}{} {} {}", name.bold(), dots, "done".green(), time_str);
            tracing::info!(
                seeder = name,
                deleted = summary.deleted,
                inserted = summary.inserted,
                "seeder finished"
            );
            Ok(summary)
        }
        Err(err) => {
            println!("Seeding {}{} {}", name.bold(), dots, "failed".red());
            tracing::error!(seeder = name, error = %err, "seeder failed");
            Err(err)
        }
    }
}

/// Seeded RNG when `seed` is given, otherwise one seeded from the OS.
///
/// `StdRng` is `Send`, so it can be held across awaits inside a seeder.
pub fn seeder_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniform pick over every variant of `T`.
pub fn pick_variant<T, R>(rng: &mut R) -> T
where
    T: IntoEnumIterator,
    R: Rng + ?Sized,
{
    let mut variants: Vec<T> = T::iter().collect();
    let index = rng.gen_range(0..variants.len());
    variants.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::commodity_request::Priority;
    use db::test_utils::MemoryRepository;
    use std::collections::HashSet;

    struct FixedSeeder(Result<SeedSummary, ()>);

    impl Seeder for FixedSeeder {
        fn seed<'a>(
            &'a self,
            _repo: &'a dyn SeedRepository,
        ) -> Pin<Box<dyn Future<Output = Result<SeedSummary, DbError>> + Send + 'a>> {
            Box::pin(async move { self.0.map_err(|_| DbError::Custom("boom".into())) })
        }
    }

    #[tokio::test]
    async fn run_seeder_passes_summary_through() {
        let repo = MemoryRepository::new();
        let summary = SeedSummary { deleted: 3, inserted: 7 };

        let result = run_seeder(&FixedSeeder(Ok(summary)), "Fixed", &repo).await;
        assert_eq!(result.unwrap(), summary);
    }

    #[tokio::test]
    async fn run_seeder_returns_errors() {
        let repo = MemoryRepository::new();
        let result = run_seeder(&FixedSeeder(Err(())), "Broken", &repo).await;
        assert!(matches!(result, Err(DbError::Custom(msg)) if msg == "boom"));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seeder_rng(Some(7));
        let mut b = seeder_rng(Some(7));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn pick_variant_reaches_every_variant() {
        let mut rng = seeder_rng(Some(1));
        let seen: HashSet<String> = (0..200)
            .map(|_| pick_variant::<Priority, _>(&mut rng).to_string())
            .collect();
        assert_eq!(seen.len(), 3);
    }
}
