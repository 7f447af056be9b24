use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::token_purchase::TokenPurchaseRepository, error::AppError};

/// Every 15 minutes, on the minute.
const SCHEDULE: &str = "0 */15 * * * *";

/// Pending purchases older than this are cancelled.
const PENDING_TTL_HOURS: i64 = 24;

/// Starts the purchase expiry scheduler.
///
/// Purchases are never paid for through this backend, so a pending purchase that no
/// admin completed within a day is cancelled instead of lingering forever.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = expire_stale_purchases(&db, Utc::now()).await {
                tracing::error!("Error expiring pending purchases: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Purchase expiry scheduler started");

    Ok(())
}

/// Cancels pending purchases created more than a day before `now`.
///
/// # Returns
/// - `Ok(u64)` - Number of purchases cancelled
pub async fn expire_stale_purchases(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<u64, AppError> {
    let cutoff = now - Duration::hours(PENDING_TTL_HOURS);
    let cancelled = TokenPurchaseRepository::new(db)
        .cancel_pending_before(cutoff)
        .await?;

    if cancelled > 0 {
        tracing::info!(cancelled, %cutoff, "Cancelled stale pending purchases");
    }

    Ok(cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests the expiry job against a mix of old and new purchases.
    ///
    /// Expected: Ok(1), only the day-old pending purchase is cancelled
    #[tokio::test]
    async fn cancels_day_old_pending_purchases() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db();

        let user = factory::create_user(db).await?;
        let now = Utc::now();
        let stale = factory::token_purchase::TokenPurchaseFactory::new(db, user.id)
            .created_at(now - Duration::hours(25))
            .build()
            .await?;
        let fresh = factory::token_purchase::TokenPurchaseFactory::new(db, user.id)
            .created_at(now - Duration::hours(23))
            .build()
            .await?;

        let cancelled = expire_stale_purchases(db, now).await?;
        assert_eq!(cancelled, 1);

        let repo = TokenPurchaseRepository::new(db);
        let stale = repo.find_by_id(stale.id).await?.unwrap();
        let fresh = repo.find_by_id(fresh.id).await?.unwrap();
        assert_eq!(stale.status.as_str(), "cancelled");
        assert_eq!(fresh.status.as_str(), "pending");

        assert_eq!(expire_stale_purchases(db, now).await?, 0);

        Ok(())
    }
}
