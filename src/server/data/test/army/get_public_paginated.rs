use super::*;

/// Tests that the gallery only lists public armies.
///
/// Expected: Ok with the single public army
#[tokio::test]
async fn lists_only_public_armies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    let public = factory::army::ArmyFactory::new(db, user.id, faction.id)
        .public(true)
        .build()
        .await?;
    factory::create_army(db, user.id, faction.id).await?;

    let repo = ArmyRepository::new(db);
    let page = repo
        .get_public_paginated(&GalleryFilter::default(), PaginationParams::default())
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, public.id);

    Ok(())
}

/// Tests filtering the gallery by faction and name.
///
/// Verifies that `query` matches a name substring regardless of case.
///
/// Expected: Ok with only the matching army of the requested faction
#[tokio::test]
async fn filters_by_faction_and_query() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    let other_faction = factory::create_faction(db).await?;

    let wanted = factory::army::ArmyFactory::new(db, user.id, faction.id)
        .name("Ironclad Spearhead")
        .public(true)
        .build()
        .await?;
    factory::army::ArmyFactory::new(db, user.id, faction.id)
        .name("Green Tide")
        .public(true)
        .build()
        .await?;
    factory::army::ArmyFactory::new(db, user.id, other_faction.id)
        .name("Spearhead of Doom")
        .public(true)
        .build()
        .await?;

    let repo = ArmyRepository::new(db);
    let filter = GalleryFilter {
        faction_id: Some(faction.id),
        detachment_id: None,
        query: Some("spearhead".to_string()),
    };
    let page = repo
        .get_public_paginated(&filter, PaginationParams::default())
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, wanted.id);

    Ok(())
}

/// Tests requesting a page far past the end.
///
/// Expected: Ok with no items and the page capped at `MAX_PAGE`
#[tokio::test]
async fn caps_huge_page_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;
    factory::army::ArmyFactory::new(db, user.id, faction.id)
        .public(true)
        .build()
        .await?;

    let repo = ArmyRepository::new(db);
    let page = repo
        .get_public_paginated(&GalleryFilter::default(), PaginationParams::new(u64::MAX, 10))
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);
    assert_eq!(page.page, MAX_PAGE);

    Ok(())
}
