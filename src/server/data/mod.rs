//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same methods run against the
//! connection pool or inside a `DatabaseTransaction`.

pub mod army;
pub mod datasheet;
pub mod detachment;
pub mod dossier;
pub mod faction;
pub mod feature_cost;
pub mod game_session;
pub mod mission;
pub mod stratagem;
pub mod token_ledger;
pub mod token_purchase;
pub mod user;
pub mod version;

#[cfg(test)]
mod test;

use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    Select,
};

use crate::server::util::pagination::{Page, PaginationParams};

/// Matches rows whose `column` equals `value` ignoring ASCII case.
pub(crate) fn equals_ignore_case<Col: ColumnTrait>(column: Col, value: &str) -> Condition {
    Condition::all().add(sea_orm::sea_query::ExprTrait::eq(
        Expr::expr(Func::lower(Expr::col(column))),
        value.to_lowercase(),
    ))
}

/// Fetches one page of `select` together with its totals.
pub(crate) async fn fetch_page<C, E>(
    db: &C,
    select: Select<E>,
    params: PaginationParams,
) -> Result<Page<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync + 'static,
{
    let paginator = select.paginate(db, params.per_page());
    let totals = paginator.num_items_and_pages().await?;
    let models = paginator.fetch_page(params.page_index()).await?;

    Ok(Page::new(models, totals.number_of_items, params))
}
