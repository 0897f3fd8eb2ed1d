use chrono::{DateTime, Utc};
use httpmock::prelude::*;
use price_alert::core::AlertKind;
use price_alert::{build_job, Credentials, RunOutcome, Settings};

fn credentials() -> Credentials {
    Credentials {
        price_api_key: "goldapi-test-key".to_string(),
        push_user: "user-key".to_string(),
        push_token: "app-token".to_string(),
    }
}

fn settings_for(server: &MockServer) -> Settings {
    Settings {
        price_api_url: server.url("/api"),
        notify_url: server.url("/1/messages.json"),
        ..Settings::default()
    }
}

fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

#[tokio::test]
async fn test_trigger_hour_drop_sends_opportunity_alert() {
    let server = MockServer::start();
    let current_mock = server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD");
        then.status(200).json_body(serde_json::json!({"price": 1900.0}));
    });
    let history_mock = server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD/20260228");
        then.status(200).json_body(serde_json::json!({"price": 2000.0}));
    });
    let push_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/1/messages.json")
            .x_www_form_urlencoded_tuple("title", "Alerta de Oportunidade")
            .x_www_form_urlencoded_tuple(
                "message",
                "🚨 QUEDA DE 5.0%!\nOntem: $2000.00\nAgora: $1900.00",
            );
        then.status(200)
            .json_body(serde_json::json!({"status": 1, "request": "abc"}));
    });

    let job = build_job(&settings_for(&server), &credentials()).unwrap();
    // 10:00 in UTC-3
    let outcome = job.run_at(utc("2026-03-01T13:00:00Z")).await;

    current_mock.assert();
    history_mock.assert();
    push_mock.assert();
    assert_eq!(
        outcome,
        RunOutcome::Sent {
            price: 1900.0,
            kind: AlertKind::OpportunityDrop
        }
    );
}

#[tokio::test]
async fn test_trigger_hour_without_drop_sends_daily_quote() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD");
        then.status(200).json_body(serde_json::json!({"price": 1990.0}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD/20260228");
        then.status(200).json_body(serde_json::json!({"price": 2000.0}));
    });
    let push_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/1/messages.json")
            .x_www_form_urlencoded_tuple("title", "Cotação 10h");
        then.status(200).json_body(serde_json::json!({"status": 1}));
    });

    let job = build_job(&settings_for(&server), &credentials()).unwrap();
    let outcome = job.run_at(utc("2026-03-01T13:00:00Z")).await;

    push_mock.assert();
    assert_eq!(
        outcome,
        RunOutcome::Sent {
            price: 1990.0,
            kind: AlertKind::DailyQuote
        }
    );
}

#[tokio::test]
async fn test_afternoon_run_sends_plain_quote() {
    let server = MockServer::start();
    let current_mock = server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD");
        then.status(200).json_body(serde_json::json!({"price": 1950.55}));
    });
    let push_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/1/messages.json")
            .x_www_form_urlencoded_tuple("title", "Cotação Atual")
            .x_www_form_urlencoded_tuple("message", "Ouro: $1950.55 às 15h");
        then.status(200).json_body(serde_json::json!({"status": 1}));
    });

    let job = build_job(&settings_for(&server), &credentials()).unwrap();
    // 15:00 in UTC-3
    let outcome = job.run_at(utc("2026-03-01T18:00:00Z")).await;

    current_mock.assert_hits(1);
    push_mock.assert();
    assert!(outcome.notification_sent());
}

#[tokio::test]
async fn test_current_price_failure_sends_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD");
        then.status(500).body("internal error");
    });
    let push_mock = server.mock(|when, then| {
        when.method(POST).path("/1/messages.json");
        then.status(200).json_body(serde_json::json!({"status": 1}));
    });

    let job = build_job(&settings_for(&server), &credentials()).unwrap();
    let outcome = job.run_at(utc("2026-03-01T13:00:00Z")).await;

    push_mock.assert_hits(0);
    assert_eq!(outcome, RunOutcome::PriceUnavailable);
}

#[tokio::test]
async fn test_historical_failure_at_trigger_hour_sends_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD");
        then.status(200).json_body(serde_json::json!({"price": 1900.0}));
    });
    let history_mock = server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD/20260228");
        then.status(404).json_body(serde_json::json!({"error": "No data"}));
    });
    let push_mock = server.mock(|when, then| {
        when.method(POST).path("/1/messages.json");
        then.status(200).json_body(serde_json::json!({"status": 1}));
    });

    let job = build_job(&settings_for(&server), &credentials()).unwrap();
    let outcome = job.run_at(utc("2026-03-01T13:00:00Z")).await;

    history_mock.assert();
    push_mock.assert_hits(0);
    assert_eq!(outcome, RunOutcome::ComparisonSkipped { price: 1900.0 });
}

#[tokio::test]
async fn test_gateway_failure_is_reported_not_raised() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/XAU/USD");
        then.status(200).json_body(serde_json::json!({"price": 1950.0}));
    });
    let push_mock = server.mock(|when, then| {
        when.method(POST).path("/1/messages.json");
        then.status(429).body("rate limited");
    });

    let job = build_job(&settings_for(&server), &credentials()).unwrap();
    let outcome = job.run_at(utc("2026-03-01T18:00:00Z")).await;

    push_mock.assert_hits(1);
    assert_eq!(
        outcome,
        RunOutcome::DeliveryFailed {
            price: 1950.0,
            kind: AlertKind::HourlyQuote
        }
    );
}

#[tokio::test]
async fn test_test_push_only_hits_gateway() {
    let server = MockServer::start();
    let price_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({"price": 1950.0}));
    });
    let push_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/1/messages.json")
            .x_www_form_urlencoded_tuple("title", "Teste de Notificação");
        then.status(200)
            .json_body(serde_json::json!({"status": 1, "request": "test-1"}));
    });

    let job = build_job(&settings_for(&server), &credentials()).unwrap();
    let delivery = job.send_test_push().await.unwrap();

    push_mock.assert();
    price_mock.assert_hits(0);
    assert_eq!(delivery.request.as_deref(), Some("test-1"));
}
