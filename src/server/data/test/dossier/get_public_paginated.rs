use super::*;

/// Tests the public brief gallery.
///
/// Verifies that private dossiers are hidden and `query` matches the title.
///
/// Expected: Ok with the one public dossier whose title matches
#[tokio::test]
async fn lists_public_matching_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;
    let faction = factory::create_faction(db).await?;

    let wanted = factory::dossier::DossierFactory::new(db, user.id, faction.id)
        .title("Armoured Push Plan")
        .public(true)
        .build()
        .await?;
    factory::dossier::DossierFactory::new(db, user.id, faction.id)
        .title("Infantry Screen")
        .public(true)
        .build()
        .await?;
    factory::dossier::DossierFactory::new(db, user.id, faction.id)
        .title("Armoured Secret")
        .build()
        .await?;

    let repo = DossierRepository::new(db);
    let filter = GalleryFilter {
        query: Some("armoured".to_string()),
        ..Default::default()
    };
    let page = repo
        .get_public_paginated(&filter, PaginationParams::default())
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, wanted.id);

    Ok(())
}
