pub use super::army::Entity as Army;
pub use super::datasheet::Entity as Datasheet;
pub use super::datasheet_version::Entity as DatasheetVersion;
pub use super::detachment::Entity as Detachment;
pub use super::dossier::Entity as Dossier;
pub use super::dossier_version::Entity as DossierVersion;
pub use super::faction::Entity as Faction;
pub use super::feature_cost::Entity as FeatureCost;
pub use super::game_session::Entity as GameSession;
pub use super::mission::Entity as Mission;
pub use super::session_event::Entity as SessionEvent;
pub use super::stratagem::Entity as Stratagem;
pub use super::token_ledger::Entity as TokenLedger;
pub use super::token_purchase::Entity as TokenPurchase;
pub use super::user::Entity as User;
