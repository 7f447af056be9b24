//! Dossier (brief) models and their version history.

use chrono::{DateTime, Utc};

use crate::{
    model::brief::{BriefDto, BriefSummaryDto, BriefVersionDto, PaginatedBriefsDto},
    server::{
        error::internal::InternalError,
        model::version::{History, Snapshot, VersionSource, Versioned},
        util::{markdown, pagination::Page},
    },
};

pub const MAX_TITLE_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Dossier {
    pub id: i32,
    pub user_id: i32,
    pub army_id: Option<i32>,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub title: String,
    pub is_public: bool,
    /// Body of dossiers written before version history existed.
    pub legacy_content: Option<String>,
    pub current_version_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dossier {
    pub fn from_entity(entity: entity::dossier::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            army_id: entity.army_id,
            faction_id: entity.faction_id,
            detachment_id: entity.detachment_id,
            title: entity.title,
            is_public: entity.is_public,
            legacy_content: entity.legacy_content,
            current_version_id: entity.current_version_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> BriefSummaryDto {
        BriefSummaryDto {
            id: self.id,
            user_id: self.user_id,
            faction_id: self.faction_id,
            detachment_id: self.detachment_id,
            title: self.title,
            is_public: self.is_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn visible_to(&self, user_id: Option<i32>) -> bool {
        self.is_public || user_id == Some(self.user_id)
    }
}

impl Versioned for Dossier {
    type Body = String;

    fn id(&self) -> i32 {
        self.id
    }

    fn history(&self, stored: Vec<Snapshot<String>>) -> History<String> {
        History::resolve(
            stored,
            self.legacy_content
                .clone()
                .map(|content| (content, self.created_at)),
            self.current_version_id,
        )
    }
}

pub fn dossier_version_from_entity(entity: entity::dossier_version::Model) -> Snapshot<String> {
    Snapshot {
        id: Some(entity.id),
        number: entity.version_number,
        body: entity.content,
        source: VersionSource::from_stored(&entity.source),
        ledger_entry_id: entity.ledger_entry_id,
        note: None,
        created_at: entity.created_at,
    }
}

pub fn briefs_page_into_dto(page: Page<Dossier>) -> PaginatedBriefsDto {
    PaginatedBriefsDto {
        briefs: page.items.into_iter().map(Dossier::into_summary_dto).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    }
}

/// Dossier together with its resolved history.
#[derive(Debug, Clone, PartialEq)]
pub struct Brief {
    pub dossier: Dossier,
    pub history: History<String>,
}

impl Brief {
    /// Converts to the API representation showing the current version.
    ///
    /// # Returns
    /// - `Err(InternalError::EmptyHistory)` - Dossier has neither versions nor legacy content
    pub fn into_dto(self) -> Result<BriefDto, InternalError> {
        let current = self.history.current().ok_or(InternalError::EmptyHistory {
            table: "dossier",
            id: self.dossier.id,
        })?;

        let content = current.body.clone();
        let content_html = markdown::render(&content);
        let dossier = self.dossier;

        Ok(BriefDto {
            id: dossier.id,
            user_id: dossier.user_id,
            army_id: dossier.army_id,
            faction_id: dossier.faction_id,
            detachment_id: dossier.detachment_id,
            title: dossier.title,
            is_public: dossier.is_public,
            current_version: current.number,
            content,
            content_html,
            created_at: dossier.created_at,
            updated_at: dossier.updated_at,
        })
    }

    pub fn into_version_dtos(self) -> Vec<BriefVersionDto> {
        let current = self.history.current_number();
        self.history
            .into_versions()
            .into_iter()
            .map(|v| {
                let is_current = Some(v.number) == current;
                brief_version_into_dto(v, is_current)
            })
            .collect()
    }
}

pub fn brief_version_into_dto(version: Snapshot<String>, is_current: bool) -> BriefVersionDto {
    BriefVersionDto {
        version: version.number,
        content: version.body,
        source: version.source.as_str().to_string(),
        ledger_entry_id: version.ledger_entry_id,
        is_current,
        created_at: version.created_at,
    }
}

/// Fields needed to write a new dossier row.
#[derive(Debug, Clone)]
pub struct CreateDossierParam {
    pub user_id: i32,
    pub army_id: i32,
    pub faction_id: i32,
    pub detachment_id: Option<i32>,
    pub title: String,
    pub is_public: bool,
}
