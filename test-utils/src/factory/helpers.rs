//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a faction and one detachment belonging to it.
pub async fn create_faction_with_detachment(
    db: &DatabaseConnection,
) -> Result<(entity::faction::Model, entity::detachment::Model), DbErr> {
    let faction = crate::factory::faction::create_faction(db).await?;
    let detachment = crate::factory::detachment::create_detachment(db, faction.id).await?;

    Ok((faction, detachment))
}

/// Creates a user owning an army with a faction and detachment.
///
/// # Returns
/// - `Ok((user, faction, detachment, army))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_army_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::faction::Model,
        entity::detachment::Model,
        entity::army::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (faction, detachment) = create_faction_with_detachment(db).await?;
    let army = crate::factory::army::ArmyFactory::new(db, user.id, faction.id)
        .detachment(detachment.id)
        .build()
        .await?;

    Ok((user, faction, detachment, army))
}
