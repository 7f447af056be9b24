//! Append-only version history shared by dossiers and datasheets.
//!
//! A versioned row owns a list of stored snapshots numbered from 1. Rows written before
//! history existed keep their body in a legacy column and no snapshots; such a row reads
//! as a single synthesized version 1 until something is appended, at which point the
//! synthesized version is persisted first.
//!
//! The current version is the snapshot referenced by the row's current pointer. Without a
//! pointer (or with a pointer that no longer resolves) the highest number is current.

use chrono::{DateTime, Utc};

/// Where the body of a version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Body copied from the pre-versioning column.
    Legacy,
    /// Produced by the brief generator.
    Generated,
    /// Written by the owner through the content endpoint.
    Edited,
    /// Written by an admin through the catalog endpoints.
    Admin,
}

impl VersionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Generated => "generated",
            Self::Edited => "edited",
            Self::Admin => "admin",
        }
    }

    /// Parses a stored source. Unknown values read as `Edited`.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "legacy" => Self::Legacy,
            "generated" => Self::Generated,
            "admin" => Self::Admin,
            _ => Self::Edited,
        }
    }
}

/// One version of a versioned body.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Row ID, `None` for a legacy version synthesized on read.
    pub id: Option<i32>,
    pub number: i32,
    pub body: T,
    pub source: VersionSource,
    /// Ledger entry that paid for this version, if any.
    pub ledger_entry_id: Option<i32>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    /// Builds the synthesized version 1 for a row that predates version history.
    pub fn legacy(body: T, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            number: 1,
            body,
            source: VersionSource::Legacy,
            ledger_entry_id: None,
            note: None,
            created_at,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A version about to be appended.
///
/// `meta` holds what only one kind of row records: the paying ledger entry for dossiers,
/// the admin's note for datasheets.
#[derive(Debug, Clone)]
pub struct NewVersion<T, M> {
    pub body: T,
    pub source: VersionSource,
    pub meta: M,
}

/// A row that owns a version history.
pub trait Versioned {
    type Body: Clone + Send + Sync;

    fn id(&self) -> i32;

    /// Resolves the row's history from its stored versions and legacy column.
    fn history(&self, stored: Vec<Snapshot<Self::Body>>) -> History<Self::Body>;
}

/// Resolved history of a single versioned row, ordered by version number.
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    versions: Vec<Snapshot<T>>,
    current_id: Option<i32>,
}

impl<T> History<T> {
    /// Resolves stored snapshots and the legacy column into a history.
    ///
    /// # Arguments
    /// - `stored` - Snapshot rows in any order
    /// - `legacy` - Legacy body and the row's creation time; ignored once snapshots exist
    /// - `current_id` - Value of the row's current pointer
    pub fn resolve(
        mut stored: Vec<Snapshot<T>>,
        legacy: Option<(T, DateTime<Utc>)>,
        current_id: Option<i32>,
    ) -> Self {
        stored.sort_by_key(|v| v.number);

        if stored.is_empty() {
            if let Some((body, created_at)) = legacy {
                stored.push(Snapshot::legacy(body, created_at));
            }
        }

        Self {
            versions: stored,
            current_id,
        }
    }

    pub fn versions(&self) -> &[Snapshot<T>] {
        &self.versions
    }

    pub fn into_versions(self) -> Vec<Snapshot<T>> {
        self.versions
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn get(&self, number: i32) -> Option<&Snapshot<T>> {
        self.versions.iter().find(|v| v.number == number)
    }

    pub fn current(&self) -> Option<&Snapshot<T>> {
        self.current_id
            .and_then(|id| self.versions.iter().find(|v| v.id == Some(id)))
            .or_else(|| self.versions.last())
    }

    pub fn current_number(&self) -> Option<i32> {
        self.current().map(|v| v.number)
    }

    /// Number the next appended version receives.
    pub fn next_number(&self) -> i32 {
        self.versions.last().map_or(1, |v| v.number + 1)
    }

    /// Synthesized legacy version that has to be written before the next append.
    pub fn unpersisted_legacy(&self) -> Option<&Snapshot<T>> {
        self.versions.iter().find(|v| !v.is_persisted())
    }

    /// Resolves the pointer value for making `number` current.
    ///
    /// # Returns
    /// - `Some(Some(id))` - Point at the stored version `id`
    /// - `Some(None)` - `number` is the synthesized legacy version; the pointer stays unset
    /// - `None` - No version with that number
    pub fn pointer_for(&self, number: i32) -> Option<Option<i32>> {
        self.get(number).map(|v| v.id)
    }

    /// Maps every body, keeping numbering and the current pointer.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> History<U> {
        History {
            versions: self
                .versions
                .into_iter()
                .map(|v| Snapshot {
                    id: v.id,
                    number: v.number,
                    body: f(v.body),
                    source: v.source,
                    ledger_entry_id: v.ledger_entry_id,
                    note: v.note,
                    created_at: v.created_at,
                })
                .collect(),
            current_id: self.current_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stored(id: i32, number: i32, body: &str) -> Snapshot<String> {
        Snapshot {
            id: Some(id),
            number,
            body: body.to_string(),
            source: VersionSource::Edited,
            ledger_entry_id: None,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Tests reading a row that only has legacy content.
    ///
    /// Expected: a single unpersisted version 1 dated at the row's creation, which is current
    #[test]
    fn synthesizes_legacy_version() {
        let created_at = Utc::now() - Duration::days(30);
        let history = History::resolve(vec![], Some(("old".to_string(), created_at)), None);

        assert_eq!(history.versions().len(), 1);
        let current = history.current().unwrap();
        assert_eq!(current.number, 1);
        assert_eq!(current.body, "old");
        assert_eq!(current.source, VersionSource::Legacy);
        assert_eq!(current.created_at, created_at);
        assert!(history.unpersisted_legacy().is_some());
        assert_eq!(history.next_number(), 2);
    }

    /// Tests that stored versions take precedence over the legacy column.
    ///
    /// Expected: legacy body ignored, no unpersisted version
    #[test]
    fn ignores_legacy_once_versions_exist() {
        let history = History::resolve(
            vec![stored(10, 1, "v1"), stored(11, 2, "v2")],
            Some(("old".to_string(), Utc::now())),
            None,
        );

        assert_eq!(history.versions().len(), 2);
        assert!(history.unpersisted_legacy().is_none());
        assert_eq!(history.current().unwrap().body, "v2");
    }

    /// Tests the current pointer.
    ///
    /// Expected: pointer wins over highest number; a dangling pointer falls back to highest
    #[test]
    fn current_follows_pointer() {
        let versions = vec![stored(11, 2, "v2"), stored(10, 1, "v1"), stored(12, 3, "v3")];

        let pointed = History::resolve(versions.clone(), None, Some(10));
        assert_eq!(pointed.current_number(), Some(1));

        let dangling = History::resolve(versions.clone(), None, Some(99));
        assert_eq!(dangling.current_number(), Some(3));

        let unset = History::resolve(versions, None, None);
        assert_eq!(unset.current_number(), Some(3));
        assert_eq!(unset.next_number(), 4);
    }

    /// Tests numbering of an empty history.
    ///
    /// Expected: first version is number 1 and nothing is current
    #[test]
    fn empty_history_starts_at_one() {
        let history: History<String> = History::resolve(vec![], None, None);

        assert!(history.is_empty());
        assert!(history.current().is_none());
        assert_eq!(history.next_number(), 1);
    }

    /// Tests pointer resolution for set-current.
    ///
    /// Expected: stored versions resolve to their id, legacy to an unset pointer, unknown to None
    #[test]
    fn pointer_for_versions() {
        let legacy = History::resolve(vec![], Some(("old".to_string(), Utc::now())), None);
        assert_eq!(legacy.pointer_for(1), Some(None));
        assert_eq!(legacy.pointer_for(2), None);

        let stored = History::resolve(vec![stored(10, 1, "v1")], None, None);
        assert_eq!(stored.pointer_for(1), Some(Some(10)));
    }
}
