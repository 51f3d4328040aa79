use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use carlog_analytics::build_router;
use carlog_analytics::config::environment::EnvironmentConfig;
use carlog_analytics::database::{seed, MemoryDatabase};
use carlog_analytics::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestApp {
    router: Router,
}

impl TestApp {
    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, None).await
    }

    async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Id del coche de demostración con la matrícula dada
    async fn car_id(&self, plate: &str) -> String {
        let (status, car) = self.get(&format!("/api/cars/license-plate/{}", plate)).await;
        assert_eq!(status, StatusCode::OK);
        car["id"].as_str().unwrap().to_string()
    }
}

fn create_test_app() -> TestApp {
    let state = AppState::new(
        MemoryDatabase::with_tables(seed::demo_tables()),
        EnvironmentConfig::default(),
    );
    TestApp {
        router: build_router(state),
    }
}

fn create_empty_app() -> TestApp {
    let state = AppState::new(MemoryDatabase::new(), EnvironmentConfig::default());
    TestApp {
        router: build_router(state),
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = create_empty_app();
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "carlog-analytics");
}

#[tokio::test]
async fn test_car_lifecycle() {
    let app = create_empty_app();

    let (status, body) = app
        .post(
            "/api/cars",
            json!({
                "make": "Mazda",
                "model": "3",
                "year": 2021,
                "licensePlate": "MZD-303",
                "mileage": 12000,
                "fuelType": "gasoline"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, car) = app.get(&format!("/api/cars/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(car["licensePlate"], "MZD-303");
    assert_eq!(car["fuelType"], "gasoline");

    let (_, exists) = app.get(&format!("/api/cars/{}/exists", id)).await;
    assert_eq!(exists["exists"], true);

    let (status, body) = app.put(&format!("/api/cars/{}/mileage?newMileage=12500", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["mileage"], 12500);

    let (status, body) = app
        .put_json(&format!("/api/cars/{}", id), json!({ "model": "CX-30" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["model"], "CX-30");
    assert_eq!(body["data"]["make"], "Mazda");

    let (status, _) = app.delete(&format!("/api/cars/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/cars/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_license_plate_is_conflict() {
    let app = create_test_app();
    let (status, body) = app
        .post(
            "/api/cars",
            json!({ "make": "Toyota", "model": "Corolla", "year": 2022, "licensePlate": "abc-123" }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_invalid_car_is_rejected() {
    let app = create_empty_app();
    let (status, body) = app
        .post(
            "/api/cars",
            json!({ "make": "", "model": "Civic", "year": 1800, "licensePlate": "X" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_cars_by_make() {
    let app = create_test_app();
    let (status, cars) = app.get("/api/cars?make=honda").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cars.as_array().unwrap().len(), 1);
    assert_eq!(cars[0]["licensePlate"], "XYZ-789");
}

#[tokio::test]
async fn test_trip_for_unknown_car_is_not_found() {
    let app = create_test_app();
    let (status, _) = app
        .post(
            "/api/trips",
            json!({
                "carId": "00000000-0000-0000-0000-000000000001",
                "startLocation": "Home",
                "endLocation": "Work",
                "distance": 10.0
            }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trips_filters_and_stats() {
    let app = create_test_app();
    let camry = app.car_id("ABC-123").await;

    let (status, trips) = app
        .get(&format!("/api/trips?carId={}&startDate=2024-01-15&endDate=2024-01-31", camry))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trips.as_array().unwrap().len(), 1);
    assert_eq!(trips[0]["startLocation"], "Home");

    let (status, _) = app.get("/api/trips?startDate=15-01-2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, stats) = app.get(&format!("/api/trips/stats?carId={}", camry)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["tripCount"], 2);
    assert_eq!(stats["totalDuration"], 43);

    let (_, monthly) = app.get("/api/trips/monthly-distance").await;
    assert_eq!(monthly.as_array().unwrap().len(), 1);
    assert_eq!(monthly[0]["yearMonth"], "2024-01");

    let (_, recent) = app.get("/api/trips/recent?limit=1").await;
    assert_eq!(recent.as_array().unwrap().len(), 1);
    assert_eq!(recent[0]["date"], "2024-01-15");
}

#[tokio::test]
async fn test_trip_single_field_edits() {
    let app = create_test_app();
    let (_, trips) = app.get("/api/trips").await;
    let id = trips[0]["id"].as_str().unwrap().to_string();

    let (status, body) = app.put(&format!("/api/trips/{}/distance?newDistance=22.5", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["distance"], 22.5);

    let (status, body) = app.put(&format!("/api/trips/{}/duration?newDuration=30", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["duration"], 30);

    let (status, _) = app.put(&format!("/api/trips/{}/distance?newDistance=-1", id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fuel_entry_total_defaults_to_liters_times_price() {
    let app = create_test_app();
    let civic = app.car_id("XYZ-789").await;

    let (status, body) = app
        .post(
            "/api/fuel-entries",
            json!({
                "carId": civic,
                "date": "2024-01-20",
                "liters": 40.0,
                "costPerLiter": 1.5,
                "mileage": 32050
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalCost"], 60.0);

    let (status, _) = app
        .post(
            "/api/fuel-entries",
            json!({ "carId": civic, "liters": 0.0, "costPerLiter": 1.5, "mileage": 32100 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fuel_stats_and_efficiency() {
    let app = create_test_app();
    let camry = app.car_id("ABC-123").await;

    let (status, summary) = app.get(&format!("/api/fuel-entries/stats?carId={}", camry)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["entryCount"], 2);

    let (status, report) = app
        .get(&format!("/api/fuel-entries/stats/efficiency?carId={}", camry))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["points"].as_array().unwrap().len(), 1);
    assert_eq!(report["points"][0]["distanceDelta"], 200.0);
    assert!(report["anomalies"].as_array().unwrap().is_empty());

    let (_, monthly) = app.get("/api/fuel-entries/monthly-costs").await;
    assert_eq!(monthly[0]["yearMonth"], "2024-01");
}

#[tokio::test]
async fn test_efficiency_reports_odometer_anomaly() {
    let app = create_test_app();
    let civic = app.car_id("XYZ-789").await;

    // Odómetro menor que el repostaje anterior (31650)
    let (status, _) = app
        .post(
            "/api/fuel-entries",
            json!({
                "carId": civic,
                "date": "2024-01-25",
                "liters": 30.0,
                "costPerLiter": 0.9,
                "mileage": 31000
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, report) = app
        .get(&format!("/api/fuel-entries/stats/efficiency?carId={}", civic))
        .await;
    assert!(report["points"].as_array().unwrap().is_empty());
    assert_eq!(report["anomalies"][0]["kind"], "odometer_decreased");
}

#[tokio::test]
async fn test_maintenance_flow() {
    let app = create_test_app();
    let civic = app.car_id("XYZ-789").await;

    let (status, body) = app
        .post(
            "/api/maintenance",
            json!({
                "carId": civic,
                "title": "Annual inspection",
                "date": "2023-06-01",
                "mileage": 30000,
                "cost": 80.0,
                "type": "inspection",
                "nextDueDate": "2023-12-01"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "scheduled");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, overdue) = app.get(&format!("/api/maintenance/overdue?carId={}", civic)).await;
    assert_eq!(overdue.as_array().unwrap().len(), 1);
    assert_eq!(overdue[0]["id"], id.as_str());

    let (status, body) = app.put(&format!("/api/maintenance/{}/complete", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "completed");

    let (_, overdue) = app.get(&format!("/api/maintenance/overdue?carId={}", civic)).await;
    assert!(overdue.as_array().unwrap().is_empty());

    let (_, summary) = app.get("/api/maintenance/summary").await;
    assert_eq!(summary["completedCount"], 3);
    assert_eq!(summary["scheduledCount"], 1);
    assert_eq!(summary["completedCost"], 160.0);

    let (_, scheduled) = app.get("/api/maintenance?status=scheduled&type=brake_service").await;
    assert_eq!(scheduled.as_array().unwrap().len(), 1);
    assert_eq!(scheduled[0]["title"], "Brake Inspection");
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = create_test_app();
    let (status, summary) = app.get("/api/dashboard/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["vehicleCount"], 2);
    assert_eq!(summary["tripCount"], 3);
    assert_eq!(summary["recentActivity"].as_array().unwrap().len(), 4);
    assert_eq!(summary["recentActivity"][0]["kind"], "trip");
    assert!(summary["selectedVehicleId"].is_null());

    // Solo el Camry tiene dos repostajes consecutivos: 200 km con 47.3 L
    let average = summary["averageEfficiency"].as_f64().unwrap();
    assert!((average - 200.0 / 47.3).abs() < 1e-9);
}

#[tokio::test]
async fn test_dashboard_selected_vehicle() {
    let app = create_test_app();
    let civic = app.car_id("XYZ-789").await;

    let (status, car) = app.get(&format!("/api/dashboard/selected-vehicle?carId={}", civic)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(car["licensePlate"], "XYZ-789");
    assert_eq!(car["id"], civic.as_str());

    let (status, _) = app
        .get("/api/dashboard/selected-vehicle?carId=00000000-0000-0000-0000-000000000001")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/dashboard/selected-vehicle").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_maintenance_date_range() {
    let app = create_test_app();
    let camry = app.car_id("ABC-123").await;

    let (status, january) = app
        .get(&format!(
            "/api/maintenance?carId={}&startDate=2024-01-01&endDate=2024-01-31",
            camry
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = january
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Oil Change", "Tire Rotation"]);

    let (_, february) = app.get("/api/maintenance?startDate=2024-02-01").await;
    assert_eq!(february.as_array().unwrap().len(), 1);
    assert_eq!(february[0]["title"], "Brake Inspection");

    let (status, _) = app
        .get("/api/maintenance?startDate=2024-02-01&endDate=2024-01-01")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fuel_entries_by_fuel_type() {
    let app = create_test_app();
    let civic = app.car_id("XYZ-789").await;

    let (status, _) = app
        .post(
            "/api/fuel-entries",
            json!({
                "carId": civic,
                "date": "2024-01-20",
                "liters": 35.0,
                "costPerLiter": 1.2,
                "mileage": 32000,
                "fuelType": "Premium"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, premium) = app.get("/api/fuel-entries?fuelType=premium").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(premium.as_array().unwrap().len(), 1);
    assert_eq!(premium[0]["fuelType"], "Premium");

    let (_, regular) = app.get(&format!("/api/fuel-entries?carId={}&fuelType=Regular", civic)).await;
    assert_eq!(regular.as_array().unwrap().len(), 1);
    assert_eq!(regular[0]["mileage"], 31650);

    let (_, all) = app.get("/api/fuel-entries").await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_dashboard_for_selected_car() {
    let app = create_test_app();
    let civic = app.car_id("XYZ-789").await;

    let (status, summary) = app.get(&format!("/api/dashboard/stats?carId={}&limit=10", civic)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["vehicleCount"], 2);
    assert_eq!(summary["tripCount"], 1);
    assert_eq!(summary["recentActivity"].as_array().unwrap().len(), 2);

    let (status, _) = app
        .get("/api/dashboard/stats?carId=00000000-0000-0000-0000-000000000001")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_on_empty_store() {
    let app = create_empty_app();
    let (status, summary) = app.get("/api/dashboard/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["vehicleCount"], 0);
    assert_eq!(summary["totalDistance"], 0.0);
    assert_eq!(summary["totalFuelCost"], 0.0);
    assert!(summary["recentActivity"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_recent_activity_limit() {
    let app = create_test_app();
    let (status, feed) = app.get("/api/dashboard/recent-activity?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(feed.as_array().unwrap().len(), 2);
    assert_eq!(feed[0]["title"], "Home → Work");
    assert_eq!(feed[1]["title"], "Fuel refill - $40.63");
}

#[tokio::test]
async fn test_deleting_car_removes_its_records() {
    let app = create_test_app();
    let camry = app.car_id("ABC-123").await;

    let (status, _) = app.delete(&format!("/api/cars/{}", camry)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, trips) = app.get(&format!("/api/trips?carId={}", camry)).await;
    assert!(trips.as_array().unwrap().is_empty());
    let (_, fuel) = app.get(&format!("/api/fuel-entries?carId={}", camry)).await;
    assert!(fuel.as_array().unwrap().is_empty());
    let (_, maintenance) = app.get(&format!("/api/maintenance?carId={}", camry)).await;
    assert!(maintenance.as_array().unwrap().is_empty());
}
