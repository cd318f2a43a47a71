use crate::seed::{SeedSummary, Seeder};
use db::models::user::NewUser;
use db::{DbError, SeedRepository};
use std::pin::Pin;

/// Demo administrator account. The password is hashed before it is stored.
pub const ADMIN: NewUser<'static> = NewUser {
    username: "adminuser",
    email: "admin@example.com",
    password: "admin1234",
    first_name: "Liven",
    last_name: "Allan",
    phone: "0700000000",
    role: "SalesManager",
};

/// Creates the administrator unless a user with its e-mail already exists.
pub struct AdminSeeder;

impl Seeder for AdminSeeder {
    fn seed<'a>(
        &'a self,
        repo: &'a dyn SeedRepository,
    ) -> Pin<Box<dyn Future<Output = Result<SeedSummary, DbError>> + Send + 'a>> {
        Box::pin(async move {
            if repo.user_exists(ADMIN.email).await? {
                tracing::info!(email = ADMIN.email, "Admin user already exists");
                return Ok(SeedSummary::default());
            }

            let admin = ADMIN.into_user()?;
            let id = repo.insert_user(&admin).await?;
            tracing::info!(%id, email = ADMIN.email, "Admin user created");

            Ok(SeedSummary {
                deleted: 0,
                inserted: 1,
            })
        })
    }
}
