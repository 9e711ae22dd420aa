use api_client::ApiClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub struct TestHelper {
    pub mock_server: MockServer,
}

impl TestHelper {
    pub async fn new() -> TestHelper {
        TestHelper {
            mock_server: MockServer::start().await,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.mock_server.uri())
    }
}

pub fn shipment_json(id: i64, container_id: &str) -> Value {
    json!({
        "id": id,
        "containerId": container_id,
        "originPort": "Shanghai",
        "destinationPort": "Rotterdam",
        "departureDate": "2024-03-01T12:00:00Z",
        "status": "In Transit",
        "eta": "2024-03-21T12:00:00Z",
        "lastKnownLat": null,
        "lastKnownLng": null,
        "createdAt": "2024-03-01T12:00:00Z",
        "updatedAt": "2024-03-01T12:00:00Z"
    })
}
