/*
[INPUT]:  Dispatched public and private calls against a mock server
[OUTPUT]: Test results for structured dispatch logging
[POS]:    Integration tests - tracing fields
[UPDATE]: When dispatch log fields change
*/

mod common;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use common::{form_fields, mock_client, setup_mock_server, test_credentials};
use tokio_test::assert_ok;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

struct CaptureLayer {
    events: Captured,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().expect("capture lock").push(visitor.0);
    }
}

fn dispatch_events(events: &Captured) -> Vec<HashMap<String, String>> {
    events
        .lock()
        .expect("capture lock")
        .iter()
        .filter(|fields| {
            fields
                .get("message")
                .is_some_and(|message| message.starts_with("dispatching"))
        })
        .cloned()
        .collect()
}

#[tokio::test]
async fn test_dispatch_logs_carry_private_flag_and_no_secrets() {
    let events = Captured::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        events: events.clone(),
    });
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(test_credentials()));
    assert_ok!(client.ticker(Some("GHS/BTC")).await);
    assert_ok!(client.balance().await);

    let logged = dispatch_events(&events);
    assert_eq!(logged.len(), 2);

    assert_eq!(logged[0]["private"], "false");
    assert_eq!(logged[0]["verb"], "GET");
    assert_eq!(logged[0]["endpoint"], "ticker");

    assert_eq!(logged[1]["private"], "true");
    assert_eq!(logged[1]["verb"], "POST");
    assert_eq!(logged[1]["endpoint"], "balance");

    let requests = server.received_requests().await.expect("request recording");
    let sent = form_fields(&requests[1]);
    for fields in &logged {
        for value in fields.values() {
            assert!(!value.contains(&sent["signature"]));
            assert!(!value.contains(&sent["nonce"]));
            assert!(!value.contains("test_api_secret"));
        }
    }
}
