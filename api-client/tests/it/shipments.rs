use api_client::{CreateShipment, ShipmentsFilter, StatusCode, UpdateShipmentRequest};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use shipment_core::{eta::estimate_eta, ShipmentId, ShipmentStatus};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::helper::{shipment_json, TestHelper};

fn departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn lists_shipments() {
    let helper = TestHelper::new().await;

    let envelope = json!({
        "data": [shipment_json(1, "MSKU0000001"), shipment_json(2, "MSKU0000002")],
        "pagination": { "total": 2, "limit": 50, "offset": 0, "hasMore": false }
    });

    Mock::given(method("GET"))
        .and(path("/v1.0/shipments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope))
        .mount(&helper.mock_server)
        .await;

    let response = helper
        .client()
        .shipments(&ShipmentsFilter::default())
        .await
        .unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].container_id, "MSKU0000001");
    assert_eq!(response.data[0].id, ShipmentId(1));
    assert_eq!(response.pagination.total, 2);
    assert!(!response.pagination.has_more);
}

#[tokio::test]
async fn sends_filter_query_parameters() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/shipments"))
        .and(query_param("search", "msku"))
        .and(query_param("status", "In Transit"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination": { "total": 0, "limit": 10, "offset": 20, "hasMore": false }
        })))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    let filter = ShipmentsFilter {
        search: Some("msku".into()),
        status: Some(ShipmentStatus::InTransit),
        limit: Some(10),
        offset: Some(20),
    };

    helper.client().shipments(&filter).await.unwrap();
}

#[tokio::test]
async fn fetches_shipment_by_id() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/shipments/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shipment_json(7, "MSKU0000007")))
        .mount(&helper.mock_server)
        .await;

    let shipment = helper.client().shipment(ShipmentId(7)).await.unwrap();

    assert_eq!(shipment.id, ShipmentId(7));
    assert_eq!(shipment.status, ShipmentStatus::InTransit);
    assert_eq!(shipment.last_known_lat, None);
}

#[tokio::test]
async fn missing_shipment_surfaces_the_status() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/shipments/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "ShipmentNotFound",
            "description": "shipment not found"
        })))
        .mount(&helper.mock_server)
        .await;

    let error = helper.client().shipment(ShipmentId(999)).await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert!(error.body().unwrap().contains("ShipmentNotFound"));
}

#[tokio::test]
async fn create_estimates_eta_when_absent() {
    let helper = TestHelper::new().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/shipments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(shipment_json(1, "MSKU0000001")))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    helper
        .client()
        .create_shipment(CreateShipment {
            container_id: "MSKU0000001".into(),
            origin_port: "Shanghai".into(),
            destination_port: "Rotterdam".into(),
            departure_date: departure(),
            status: ShipmentStatus::InTransit,
            eta: None,
            known_distance: None,
            last_known_lat: None,
            last_known_lng: None,
        })
        .await
        .unwrap();

    let requests = helper.mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sent_eta: DateTime<Utc> = body["eta"].as_str().unwrap().parse().unwrap();

    assert_eq!(
        sent_eta,
        estimate_eta("Shanghai", "Rotterdam", departure(), 0.0)
    );
    assert_eq!(body["status"], json!("In Transit"));
}

#[tokio::test]
async fn create_sends_caller_supplied_eta() {
    let helper = TestHelper::new().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/shipments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(shipment_json(1, "MSKU0000001")))
        .mount(&helper.mock_server)
        .await;

    let eta = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    helper
        .client()
        .create_shipment(CreateShipment {
            container_id: "MSKU0000001".into(),
            origin_port: "Unknownia".into(),
            destination_port: "Nowhereland".into(),
            departure_date: departure(),
            status: ShipmentStatus::InTransit,
            eta: Some(eta),
            known_distance: Some(1000.0),
            last_known_lat: None,
            last_known_lng: None,
        })
        .await
        .unwrap();

    let requests = helper.mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sent_eta: DateTime<Utc> = body["eta"].as_str().unwrap().parse().unwrap();

    assert_eq!(sent_eta, eta);
    // The known distance only feeds the estimator, it never goes on the wire.
    assert!(body.get("knownDistance").is_none());
}

#[tokio::test]
async fn updates_shipment() {
    let helper = TestHelper::new().await;

    let mut updated = shipment_json(3, "MSKU0000003");
    updated["status"] = json!("Delayed");

    Mock::given(method("PUT"))
        .and(path("/v1.0/shipments/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .mount(&helper.mock_server)
        .await;

    let shipment = helper
        .client()
        .update_shipment(
            ShipmentId(3),
            &UpdateShipmentRequest {
                status: Some(ShipmentStatus::Delayed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(shipment.status, ShipmentStatus::Delayed);

    let requests = helper.mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    // Patch semantics, absent fields stay off the wire.
    assert_eq!(body, json!({ "status": "Delayed" }));
}

#[tokio::test]
async fn deletes_shipment() {
    let helper = TestHelper::new().await;

    Mock::given(method("DELETE"))
        .and(path("/v1.0/shipments/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    helper.client().delete_shipment(ShipmentId(5)).await.unwrap();
}
