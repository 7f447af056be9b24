use super::*;

/// Tests that deleting a faction removes its detachments.
///
/// Expected: Ok(true) and the detachment gone
#[tokio::test]
async fn cascades_to_detachments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();

    let (faction, detachment) = factory::helpers::create_faction_with_detachment(db).await?;

    let deleted = FactionRepository::new(db).delete(faction.id).await?;

    assert!(deleted);
    let remaining = DetachmentRepository::new(db).find_by_id(detachment.id).await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests deleting an unknown faction.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_faction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();

    assert!(!FactionRepository::new(db).delete(999).await?);

    Ok(())
}
