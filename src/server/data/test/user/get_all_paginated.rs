use super::*;
use crate::server::util::pagination::PaginationParams;

/// Tests paginating users alphabetically.
///
/// Expected: Ok with the second page holding the last user and correct totals
#[tokio::test]
async fn pages_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    for name in ["Charlie", "alpha", "Bravo"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let first = repo.get_all_paginated(PaginationParams::new(0, 2)).await?;
    let second = repo.get_all_paginated(PaginationParams::new(1, 2)).await?;

    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.len(), 2);
    assert_eq!(second.items.len(), 1);

    Ok(())
}
