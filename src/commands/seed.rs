//! Seed command - Creates the initial admin account.
//!
//! Safe to run repeatedly: an existing admin email is reported and
//! left untouched.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::UserRole;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::Services;

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    tracing::info!("Seeding admin account...");

    let db = Database::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), config);

    let result = services
        .users
        .create_user(
            args.name,
            args.email.clone(),
            args.password,
            args.address,
            UserRole::Admin,
        )
        .await;

    match result {
        Ok(user) => {
            tracing::info!("Admin account created: {}", user.email);
            Ok(())
        }
        Err(AppError::Conflict(_)) => {
            tracing::info!("Admin account {} already exists, skipping", args.email);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
