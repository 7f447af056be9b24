mod army;
mod dossier;
mod faction;
mod feature_cost;
mod game_session;
mod stratagem;
mod token_purchase;
mod user;
