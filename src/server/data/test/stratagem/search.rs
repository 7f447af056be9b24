use super::*;

/// Tests looking up a detachment's stratagems with core ones included.
///
/// Expected: Ok with the detachment and core stratagems, but not another detachment's
#[tokio::test]
async fn includes_core_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();

    let (faction, detachment) = factory::helpers::create_faction_with_detachment(db).await?;
    let other = factory::create_detachment(db, faction.id).await?;

    let own = factory::stratagem::StratagemFactory::new(db)
        .detachment(detachment.id)
        .build()
        .await?;
    let core = factory::create_stratagem(db).await?;
    factory::stratagem::StratagemFactory::new(db)
        .detachment(other.id)
        .build()
        .await?;

    let repo = StratagemRepository::new(db);
    let with_core = repo
        .search(&StratagemFilter {
            detachment_id: Some(detachment.id),
            phase: None,
            include_core: true,
        })
        .await?;
    let without_core = repo
        .search(&StratagemFilter {
            detachment_id: Some(detachment.id),
            phase: None,
            include_core: false,
        })
        .await?;

    let ids: Vec<i32> = with_core.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&own.id));
    assert!(ids.contains(&core.id));
    assert_eq!(without_core.len(), 1);
    assert_eq!(without_core[0].id, own.id);

    Ok(())
}

/// Tests filtering by phase.
///
/// Verifies that `any` stratagems match every phase.
///
/// Expected: Ok with the shooting and any-phase stratagems only
#[tokio::test]
async fn filters_by_phase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();

    let shooting = factory::stratagem::StratagemFactory::new(db)
        .phase("shooting")
        .build()
        .await?;
    let any = factory::create_stratagem(db).await?;
    factory::stratagem::StratagemFactory::new(db)
        .phase("fight")
        .build()
        .await?;

    let repo = StratagemRepository::new(db);
    let result = repo
        .search(&StratagemFilter {
            detachment_id: None,
            phase: Some(Phase::Shooting),
            include_core: true,
        })
        .await?;

    let ids: Vec<i32> = result.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&shooting.id));
    assert!(ids.contains(&any.id));

    Ok(())
}
