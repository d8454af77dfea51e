//! Region and WalkDifficulty endpoints, deletion policy and health.

mod common;

use common::{id_of, spawn, spawn_in_memory};
use nz_walks_api::{CatalogPolicies, ReferenceDeletePolicy, Stores};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn region_lifecycle() {
    let server = spawn_in_memory().await;

    let response = server
        .post(
            "/Regions",
            &json!({
                "Name": "Otago",
                "Code": "OTA",
                "Lat": -45.0,
                "Long": 170.5,
                "Image": "otago.jpg",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();
    let otago: Value = response.json().await.unwrap();
    assert_eq!(location, format!("/Regions/{}", id_of(&otago)));
    assert_eq!(otago["Image"], "otago.jpg");

    // Full replace: the image is dropped because the update leaves it out.
    let updated: Value = server
        .put(
            &location,
            &json!({"Name": "Otago", "Code": "OTG", "Lat": -45.1, "Long": 170.4}),
        )
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(updated["Code"], "OTG");
    assert_eq!(updated["Image"], Value::Null);

    let listed: Vec<Value> = server.get("/Regions").await.json().await.unwrap();
    assert_eq!(listed, vec![updated.clone()]);

    let removed = server.delete(&location).await;
    assert_eq!(removed.status(), StatusCode::OK);
    assert_eq!(removed.json::<Value>().await.unwrap(), updated);
    assert_eq!(server.get(&location).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn region_requires_name_and_code() {
    let server = spawn_in_memory().await;

    let response = server.post("/Regions", &json!({"Lat": 1.0, "Long": 2.0})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["Code"], json!(["Code is required."]));
    assert_eq!(body["errors"]["Name"], json!(["Name is required."]));
}

#[tokio::test]
async fn walk_difficulty_lifecycle() {
    let server = spawn_in_memory().await;

    let medium = server.create_difficulty("Medium").await;
    let path = format!("/WalkDifficulties/{}", id_of(&medium));

    let fetched: Value = server.get(&path).await.json().await.unwrap();
    assert_eq!(fetched, json!({"Id": medium["Id"], "Code": "Medium"}));

    let response = server.put(&path, &json!({"code": "Moderate"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap()["Code"], "Moderate");

    assert_eq!(server.delete(&path).await.status(), StatusCode::OK);
    assert_eq!(server.delete(&path).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn walk_difficulty_code_is_required() {
    let server = spawn_in_memory().await;

    let response = server.post("/WalkDifficulties", &json!({"Code": "  "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let missing = server
        .put(&format!("/WalkDifficulties/{}", Uuid::new_v4()), &json!({}))
        .await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST, "validation runs before lookup");
}

#[tokio::test]
async fn ignore_policy_deletes_referenced_region() {
    let server = spawn_in_memory().await;
    let otago = server.create_otago().await;
    let easy = server.create_difficulty("Easy").await;
    let walk = server
        .create(
            "/Walks",
            json!({
                "Name": "Lake Track",
                "Length": 5.2,
                "RegionId": id_of(&otago),
                "WalkDifficultyId": id_of(&easy),
            }),
        )
        .await;

    let response = server.delete(&format!("/Regions/{}", id_of(&otago))).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The walk keeps its now-dangling reference.
    let kept: Value = server
        .get(&format!("/Walks/{}", id_of(&walk)))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(kept["RegionId"], otago["Id"]);
}

#[tokio::test]
async fn restrict_policy_blocks_referenced_deletes() {
    let server = spawn(
        Stores::in_memory(),
        CatalogPolicies {
            reference_delete: ReferenceDeletePolicy::Restrict,
            ..CatalogPolicies::default()
        },
    )
    .await;
    let otago = server.create_otago().await;
    let easy = server.create_difficulty("Easy").await;
    let walk = server
        .create(
            "/Walks",
            json!({
                "Name": "Lake Track",
                "Length": 5.2,
                "RegionId": id_of(&otago),
                "WalkDifficultyId": id_of(&easy),
            }),
        )
        .await;

    let region = server.delete(&format!("/Regions/{}", id_of(&otago))).await;
    assert_eq!(region.status(), StatusCode::CONFLICT);
    let body: Value = region.json().await.unwrap();
    assert!(body["errors"]["Walks"].is_array());

    let difficulty = server
        .delete(&format!("/WalkDifficulties/{}", id_of(&easy)))
        .await;
    assert_eq!(difficulty.status(), StatusCode::CONFLICT);

    // Once the walk is gone both deletes go through.
    server.delete(&format!("/Walks/{}", id_of(&walk))).await;
    assert_eq!(
        server
            .delete(&format!("/Regions/{}", id_of(&otago)))
            .await
            .status(),
        StatusCode::OK
    );
    assert_eq!(
        server
            .delete(&format!("/WalkDifficulties/{}", id_of(&easy)))
            .await
            .status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn health_reports_backend() {
    let server = spawn_in_memory().await;

    let response = server.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"status": "ok", "backend": "memory"})
    );
}

#[tokio::test]
async fn restrict_policy_still_reports_missing_region_as_not_found() {
    let stores = Stores::in_memory();

    // Under Ignore the region goes away while a walk still points at it.
    let lenient = spawn(stores.clone(), CatalogPolicies::default()).await;
    let otago = lenient.create_otago().await;
    let easy = lenient.create_difficulty("Easy").await;
    lenient
        .create(
            "/Walks",
            json!({
                "Name": "Lake Track",
                "Length": 5.2,
                "RegionId": id_of(&otago),
                "WalkDifficultyId": id_of(&easy),
            }),
        )
        .await;
    let region_path = format!("/Regions/{}", id_of(&otago));
    assert_eq!(lenient.delete(&region_path).await.status(), StatusCode::OK);
    drop(lenient);

    let strict = spawn(
        stores,
        CatalogPolicies {
            reference_delete: ReferenceDeletePolicy::Restrict,
            ..CatalogPolicies::default()
        },
    )
    .await;
    let response = strict.delete(&region_path).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().is_empty());
}
