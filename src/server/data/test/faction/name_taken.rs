use super::*;

/// Tests case-insensitive name clashes.
///
/// Expected: Ok(true) for a differently cased name, Ok(false) when excluding the owner
#[tokio::test]
async fn matches_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();

    let faction = factory::faction::FactionFactory::new(db)
        .name("Iron Legion")
        .build()
        .await?;

    let repo = FactionRepository::new(db);

    assert!(repo.name_taken("iron legion", None).await?);
    assert!(!repo.name_taken("IRON LEGION", Some(faction.id)).await?);
    assert!(!repo.name_taken("Iron Host", None).await?);

    Ok(())
}
