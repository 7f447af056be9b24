//! Appending to version histories.
//!
//! Dossiers and datasheets keep their versions in separate tables but share the append
//! rules, so each repository implements `VersionStore` and `append` does the rest.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::model::version::{History, NewVersion, Snapshot, VersionSource, Versioned};

pub type Body<S> = <<S as VersionStore>::Owner as Versioned>::Body;

/// Version table of one kind of versioned row.
#[async_trait]
pub trait VersionStore: Sync + Sized {
    type Owner: Versioned + Send + Sync;
    type Meta: Default + Send;

    /// Stored versions of `owner_id` ordered by number.
    async fn load_versions(&self, owner_id: i32) -> Result<Vec<Snapshot<Body<Self>>>, DbErr>;

    async fn store_version(
        &self,
        owner_id: i32,
        number: i32,
        version: NewVersion<Body<Self>, Self::Meta>,
        created_at: DateTime<Utc>,
    ) -> Result<Snapshot<Body<Self>>, DbErr>;

    /// Points the owner at a stored version. `Ok(None)` when the owner is gone.
    async fn point_current(
        &self,
        owner_id: i32,
        version_id: Option<i32>,
    ) -> Result<Option<Self::Owner>, DbErr>;
}

/// Appends a version and makes it current.
///
/// A row still reading from its legacy column gets that body persisted as version 1
/// first.
///
/// # Returns
/// - `Ok(Some((owner, history)))` - Updated owner and its new history
/// - `Ok(None)` - Owner row no longer exists
pub async fn append<S: VersionStore>(
    store: &S,
    owner: &S::Owner,
    version: NewVersion<Body<S>, S::Meta>,
) -> Result<Option<(S::Owner, History<Body<S>>)>, DbErr> {
    let owner_id = owner.id();
    let history = owner.history(store.load_versions(owner_id).await?);

    if let Some(legacy) = history.unpersisted_legacy() {
        let version = NewVersion {
            body: legacy.body.clone(),
            source: VersionSource::Legacy,
            meta: S::Meta::default(),
        };
        store
            .store_version(owner_id, legacy.number, version, legacy.created_at)
            .await?;
    }

    let appended = store
        .store_version(owner_id, history.next_number(), version, Utc::now())
        .await?;

    let Some(updated) = store.point_current(owner_id, appended.id).await? else {
        return Ok(None);
    };
    let history = updated.history(store.load_versions(owner_id).await?);

    Ok(Some((updated, history)))
}
