use super::*;

fn param(name: &str) -> MissionParam {
    MissionParam {
        name: name.to_string(),
        deployment: "Hammer and Anvil".to_string(),
        primary_objective: "Take and Hold".to_string(),
        rules: String::new(),
    }
}

/// Tests renaming a mission to its own name and to a taken one.
///
/// Expected: Ok when keeping its name, Err(Conflict) when copying another's
#[tokio::test]
async fn name_must_be_unique() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let service = MissionService::new(db);

    let first = service.create(param("Supply Drop")).await?;
    service.create(param("Scorched Earth")).await?;

    let kept = service.update(first.id, param("Supply Drop")).await?;
    assert_eq!(kept.deployment, "Hammer and Anvil");

    assert!(matches!(
        service.update(first.id, param("Scorched Earth")).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.create(param("  ")).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
