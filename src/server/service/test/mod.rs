mod army;
mod auth;
mod datasheet;
mod detachment;
mod dossier;
mod faction;
mod feature_cost;
mod game_session;
mod ledger;
mod mission;
mod token;
mod user;
