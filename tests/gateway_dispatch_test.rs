use httpmock::prelude::*;
use nalo_sms_notify::{
    DispatchError, DispatchOutcome, NaloGateway, NotificationDispatcher, OrderAmount, OrderFact,
    OrderEventHandler, StatusChange, TomlConfig,
};
use std::time::Duration;

fn config_for(server: &MockServer, timeout_seconds: u64) -> TomlConfig {
    let toml_content = format!(
        r#"
[gateway]
endpoint = "{}"
timeout_seconds = {}
auth_key = "test-key"
sender_id = "MYSHOP"

[notifications]
enabled_statuses = ["completed"]

[templates]
completed = "Order {{order_number}} total {{order_total}}"
processing = "Order {{order_number}} is {{order_status}}"
"#,
        server.url("/send-message/"),
        timeout_seconds
    );

    TomlConfig::from_toml_str(&toml_content).unwrap()
}

fn dispatcher_for(config: &TomlConfig) -> NotificationDispatcher<NaloGateway> {
    let gateway = NaloGateway::new(&config.gateway_settings()).unwrap();
    NotificationDispatcher::new(config.notification_settings().unwrap(), gateway)
}

fn order_event(status: &str, phone: &str) -> StatusChange {
    StatusChange {
        order_id: 55,
        previous_status: "pending".to_string(),
        order: OrderFact {
            order_number: "55".to_string(),
            total_amount: OrderAmount::Number(20.0),
            new_status: status.to_string(),
            billing_first_name: "Ama".to_string(),
            billing_phone: phone.to_string(),
        },
    }
}

#[tokio::test]
async fn test_completed_order_posts_one_form_request() {
    let server = MockServer::start();
    let sms_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/send-message/")
            .header("content-type", "application/x-www-form-urlencoded")
            .x_www_form_urlencoded_tuple("key", "test-key")
            .x_www_form_urlencoded_tuple("sender_id", "MYSHOP")
            .x_www_form_urlencoded_tuple("msisdn", "+233241234567")
            .x_www_form_urlencoded_tuple("message", "Order 55 total GHS 20.00");
        then.status(200).body("1701|233241234567|ok");
    });

    let dispatcher = dispatcher_for(&config_for(&server, 20));
    let outcome = dispatcher
        .status_changed(&order_event("completed", "0241234567"))
        .await;

    assert!(outcome.is_sent());
    sms_mock.assert_hits(1);
}

#[tokio::test]
async fn test_disabled_status_makes_no_request() {
    let server = MockServer::start();
    let sms_mock = server.mock(|when, then| {
        when.method(POST).path("/send-message/");
        then.status(200);
    });

    let dispatcher = dispatcher_for(&config_for(&server, 20));
    let outcome = dispatcher
        .status_changed(&order_event("processing", "0241234567"))
        .await;

    assert!(matches!(
        outcome,
        DispatchOutcome::Halted(DispatchError::IneligibleStatus { .. })
    ));
    sms_mock.assert_hits(0);
}

#[tokio::test]
async fn test_invalid_phone_makes_no_request() {
    let server = MockServer::start();
    let sms_mock = server.mock(|when, then| {
        when.method(POST).path("/send-message/");
        then.status(200);
    });

    let dispatcher = dispatcher_for(&config_for(&server, 20));
    let outcome = dispatcher
        .status_changed(&order_event("completed", "024123456"))
        .await;

    assert!(matches!(
        outcome,
        DispatchOutcome::Halted(DispatchError::InvalidPhone)
    ));
    sms_mock.assert_hits(0);
}

#[tokio::test]
async fn test_missing_credentials_makes_no_request() {
    let server = MockServer::start();
    let sms_mock = server.mock(|when, then| {
        when.method(POST).path("/send-message/");
        then.status(200);
    });

    let mut config = config_for(&server, 20);
    config.gateway.credentials.auth_key.clear();
    let dispatcher = dispatcher_for(&config);

    let outcome = dispatcher
        .status_changed(&order_event("completed", "0241234567"))
        .await;

    assert!(matches!(
        outcome,
        DispatchOutcome::Halted(DispatchError::MissingCredentials)
    ));
    sms_mock.assert_hits(0);
}

#[tokio::test]
async fn test_unset_env_credential_makes_no_request() {
    let server = MockServer::start();
    let sms_mock = server.mock(|when, then| {
        when.method(POST).path("/send-message/");
        then.status(200);
    });

    std::env::remove_var("NALO_DISPATCH_TEST_UNSET_KEY");
    let toml_content = format!(
        r#"
[gateway]
endpoint = "{}"
auth_key = "${{NALO_DISPATCH_TEST_UNSET_KEY}}"
sender_id = "MYSHOP"

[notifications]
enabled_statuses = ["completed"]

[templates]
completed = "Order {{order_number}} total {{order_total}}"
"#,
        server.url("/send-message/")
    );
    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    assert!(!config.has_credentials());

    let dispatcher = dispatcher_for(&config);
    let outcome = dispatcher
        .status_changed(&order_event("completed", "0241234567"))
        .await;

    assert!(matches!(
        outcome,
        DispatchOutcome::Halted(DispatchError::MissingCredentials)
    ));
    sms_mock.assert_hits(0);
}

#[tokio::test]
async fn test_gateway_error_status_is_not_checked() {
    let server = MockServer::start();
    let sms_mock = server.mock(|when, then| {
        when.method(POST).path("/send-message/");
        then.status(500).body("internal error");
    });

    let dispatcher = dispatcher_for(&config_for(&server, 20));
    let outcome = dispatcher
        .status_changed(&order_event("completed", "0241234567"))
        .await;

    assert!(outcome.is_sent());
    sms_mock.assert_hits(1);
}

#[tokio::test]
async fn test_slow_gateway_times_out_without_failing_caller() {
    let server = MockServer::start();
    let sms_mock = server.mock(|when, then| {
        when.method(POST).path("/send-message/");
        then.status(200).delay(Duration::from_secs(3));
    });

    let dispatcher = dispatcher_for(&config_for(&server, 1));
    let outcome = dispatcher
        .status_changed(&order_event("completed", "0241234567"))
        .await;

    assert!(matches!(
        outcome,
        DispatchOutcome::Halted(DispatchError::TransportFailure(_))
    ));
    sms_mock.assert_hits(1);
}

#[tokio::test]
async fn test_unreachable_gateway_is_swallowed() {
    let toml_content = r#"
[gateway]
endpoint = "http://127.0.0.1:1/send-message/"
timeout_seconds = 2
auth_key = "test-key"
sender_id = "MYSHOP"

[notifications]
enabled_statuses = ["completed"]

[templates]
completed = "Done"
"#;
    let config = TomlConfig::from_toml_str(toml_content).unwrap();
    let dispatcher = dispatcher_for(&config);

    let outcome = dispatcher
        .status_changed(&order_event("completed", "0241234567"))
        .await;

    assert!(matches!(
        outcome,
        DispatchOutcome::Halted(DispatchError::TransportFailure(_))
    ));
}

#[tokio::test]
async fn test_custom_text_is_sent_to_billing_phone() {
    let server = MockServer::start();
    let sms_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/send-message/")
            .x_www_form_urlencoded_tuple("msisdn", "+233241234567")
            .x_www_form_urlencoded_tuple("message", "Your parcel is at the front desk");
        then.status(200);
    });

    let dispatcher = dispatcher_for(&config_for(&server, 20));
    let order = order_event("on-hold", "+233 24 123 4567").order;
    let outcome = dispatcher
        .send_custom_text(55, &order, "<b>Your parcel</b> is at the front desk\n")
        .await;

    assert!(outcome.is_sent());
    sms_mock.assert_hits(1);
}
