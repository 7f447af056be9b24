use super::*;

fn param(faction_id: i32, name: &str) -> CreateDatasheetParam {
    CreateDatasheetParam {
        faction_id,
        name: name.to_string(),
        role: "Battleline".to_string(),
        keywords: vec!["Infantry".to_string()],
        profile: json!({ "movement": 6, "toughness": 4, "save": 3 }),
    }
}

/// Tests creating a datasheet.
///
/// Expected: enabled datasheet whose profile is stored as admin version 1
#[tokio::test]
async fn stores_profile_as_first_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let faction = factory::create_faction(db).await?;

    let created = DatasheetService::new(db)
        .create(param(faction.id, "  Line Troopers "))
        .await?;

    assert_eq!(created.datasheet.name, "Line Troopers");
    assert!(created.datasheet.is_enabled);

    let current = created.history.current().unwrap();
    assert_eq!(current.number, 1);
    assert_eq!(current.source, VersionSource::Admin);
    assert_eq!(current.body["toughness"], 4);

    Ok(())
}

/// Tests name and profile validation.
///
/// Expected: Err(Conflict) for a duplicate name, Err(BadRequest) for a non-object profile,
/// Err(NotFound) for an unknown faction
#[tokio::test]
async fn validates_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let faction = factory::create_faction(db).await?;
    factory::datasheet::DatasheetFactory::new(db, faction.id)
        .name("Line Troopers")
        .build()
        .await?;

    let service = DatasheetService::new(db);

    assert!(matches!(
        service.create(param(faction.id, "Line Troopers")).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service
            .create(CreateDatasheetParam {
                profile: json!([1, 2, 3]),
                ..param(faction.id, "Scouts")
            })
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(param(faction.id + 100, "Scouts")).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that disabled datasheets are hidden from the public listing.
///
/// Expected: public list excludes the disabled sheet, admin list includes it
#[tokio::test]
async fn list_hides_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let faction = factory::create_faction(db).await?;
    factory::create_datasheet(db, faction.id).await?;
    let disabled = factory::datasheet::DatasheetFactory::new(db, faction.id)
        .enabled(false)
        .build()
        .await?;

    let service = DatasheetService::new(db);
    let public = service.list(Some(faction.id), false).await?;
    let admin = service.list(Some(faction.id), true).await?;

    assert_eq!(public.len(), 1);
    assert!(public.iter().all(|d| d.datasheet.id != disabled.id));
    assert_eq!(admin.len(), 2);
    assert!(matches!(
        service.get(disabled.id, false).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
