use super::*;

/// Tests that names are scoped to a detachment or to the core set.
///
/// Expected: Ok(true) only inside the scope that holds the name
#[tokio::test]
async fn scopes_names_by_detachment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();

    let (_, detachment) = factory::helpers::create_faction_with_detachment(db).await?;
    factory::stratagem::StratagemFactory::new(db)
        .detachment(detachment.id)
        .name("Armoured Might")
        .build()
        .await?;

    let repo = StratagemRepository::new(db);

    assert!(repo.name_taken(Some(detachment.id), "armoured might", None).await?);
    assert!(!repo.name_taken(None, "Armoured Might", None).await?);

    Ok(())
}
