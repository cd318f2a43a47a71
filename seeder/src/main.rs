use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    admin::AdminSeeder, cash_expenditure::CashExpenditureSeeder,
    commodity_request::CommodityRequestSeeder,
};
use colored::*;
use db::{DbError, MongoRepository, SeedRepository};
use std::process::ExitCode;
use util::config::AppConfig;
use util::logging::init_logging;

mod schedule;
mod seed;
mod seeds;

type NamedSeeder = (Box<dyn Seeder + Send + Sync>, &'static str);

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "Configuration error:".red(), err);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = init_logging(&config.log_level, config.log_file.as_deref());
    tracing::info!(project = %config.project_name, env = %config.env, "starting seeder");

    let db = match db::connect(&config).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "could not connect to MongoDB");
            return ExitCode::FAILURE;
        }
    };
    let repo = MongoRepository::new(db);

    run(&seeders(&config), &repo).await
}

/// Exit code for a whole run. The failing seeder has already logged its error.
async fn run(seeders: &[NamedSeeder], repo: &dyn SeedRepository) -> ExitCode {
    match run_all(seeders, repo).await {
        Ok(()) => {
            tracing::info!("seeding complete");
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

/// Seeders in run order. The cash-expenditure seeder only runs when enabled.
fn seeders(config: &AppConfig) -> Vec<NamedSeeder> {
    let mut seeders: Vec<NamedSeeder> = vec![(
        Box::new(AdminSeeder) as Box<dyn Seeder + Send + Sync>,
        "Admin",
    )];
    if config.seed_cash_expenditures {
        seeders.push((
            Box::new(CashExpenditureSeeder::new(config.rng_seed)),
            "CashExpenditure",
        ));
    }
    seeders.push((
        Box::new(CommodityRequestSeeder::new(config.rng_seed)),
        "CommodityRequest",
    ));
    seeders
}

/// Runs each seeder to completion in order and stops at the first failure.
async fn run_all(seeders: &[NamedSeeder], repo: &dyn SeedRepository) -> Result<(), DbError> {
    for (seeder, name) in seeders {
        run_seeder(seeder.as_ref(), name, repo).await?;
    }
    Ok(())
}
