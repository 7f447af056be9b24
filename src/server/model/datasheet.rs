//! Datasheet catalog models. Profiles are versioned like dossier content.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::datasheet::{CreateDatasheetDto, DatasheetDto, DatasheetVersionDto},
    server::{
        error::internal::InternalError,
        model::version::{History, Snapshot, VersionSource, Versioned},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Datasheet {
    pub id: i32,
    pub faction_id: i32,
    pub name: String,
    pub role: String,
    pub keywords: Vec<String>,
    pub is_enabled: bool,
    pub legacy_profile: Option<Value>,
    pub current_version_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Datasheet {
    pub fn from_entity(entity: entity::datasheet::Model) -> Self {
        Self {
            id: entity.id,
            faction_id: entity.faction_id,
            name: entity.name,
            role: entity.role,
            keywords: split_keywords(&entity.keywords),
            is_enabled: entity.is_enabled,
            legacy_profile: entity.legacy_profile,
            current_version_id: entity.current_version_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl Versioned for Datasheet {
    type Body = Value;

    fn id(&self) -> i32 {
        self.id
    }

    fn history(&self, stored: Vec<Snapshot<Value>>) -> History<Value> {
        History::resolve(
            stored,
            self.legacy_profile
                .clone()
                .map(|profile| (profile, self.created_at)),
            self.current_version_id,
        )
    }
}

/// Keywords are stored comma separated.
pub fn join_keywords(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn split_keywords(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn datasheet_version_from_entity(entity: entity::datasheet_version::Model) -> Snapshot<Value> {
    Snapshot {
        id: Some(entity.id),
        number: entity.version_number,
        body: entity.profile,
        source: VersionSource::from_stored(&entity.source),
        ledger_entry_id: None,
        note: entity.note,
        created_at: entity.created_at,
    }
}

/// Datasheet with its resolved profile history.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedDatasheet {
    pub datasheet: Datasheet,
    pub history: History<Value>,
}

impl VersionedDatasheet {
    pub fn into_dto(self) -> Result<DatasheetDto, InternalError> {
        let current = self.history.current().ok_or(InternalError::EmptyHistory {
            table: "datasheet",
            id: self.datasheet.id,
        })?;

        Ok(DatasheetDto {
            id: self.datasheet.id,
            faction_id: self.datasheet.faction_id,
            name: self.datasheet.name,
            role: self.datasheet.role,
            keywords: self.datasheet.keywords,
            is_enabled: self.datasheet.is_enabled,
            current_version: current.number,
            profile: current.body.clone(),
        })
    }

    pub fn into_version_dtos(self) -> Vec<DatasheetVersionDto> {
        let current = self.history.current_number();
        self.history
            .into_versions()
            .into_iter()
            .map(|v| DatasheetVersionDto {
                is_current: Some(v.number) == current,
                version: v.number,
                profile: v.body,
                source: v.source.as_str().to_string(),
                note: v.note,
                created_at: v.created_at,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CreateDatasheetParam {
    pub faction_id: i32,
    pub name: String,
    pub role: String,
    pub keywords: Vec<String>,
    pub profile: Value,
}

impl CreateDatasheetParam {
    pub fn from_dto(dto: CreateDatasheetDto) -> Self {
        Self {
            faction_id: dto.faction_id,
            name: dto.name,
            role: dto.role,
            keywords: dto.keywords,
            profile: dto.profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip_through_storage_format() {
        let keywords = vec![
            " Infantry ".to_string(),
            "".to_string(),
            "Battleline".to_string(),
        ];
        let stored = join_keywords(&keywords);

        assert_eq!(stored, "Infantry,Battleline");
        assert_eq!(split_keywords(&stored), vec!["Infantry", "Battleline"]);
        assert!(split_keywords("").is_empty());
    }
}
