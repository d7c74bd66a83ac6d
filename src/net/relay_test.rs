use super::*;

fn fields() -> BTreeMap<String, String> {
    [("name", "Ada"), ("email", "ada@example.com"), ("message", "Hello")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

// =============================================================
// build_request
// =============================================================

#[test]
fn build_request_serializes_relay_wire_shape() {
    let config = RelayConfig::default();
    let fields = fields();
    let value = serde_json::to_value(build_request(&config, &fields)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "service_id": "service_439axng",
            "template_id": "template_8slsqor",
            "user_id": "xzS9ZOIj7mFOoR-gz",
            "template_params": {
                "email": "ada@example.com",
                "message": "Hello",
                "name": "Ada"
            }
        })
    );
}

#[test]
fn build_request_uses_configured_identifiers() {
    let config = RelayConfig {
        public_key: "pk".to_owned(),
        service_id: "svc".to_owned(),
        template_id: "tpl".to_owned(),
        endpoint: "https://relay.test".to_owned(),
    };
    let fields = BTreeMap::new();
    let request = build_request(&config, &fields);
    assert_eq!(request.service_id, "svc");
    assert_eq!(request.template_id, "tpl");
    assert_eq!(request.user_id, "pk");
    assert!(request.template_params.is_empty());
}

// =============================================================
// send / errors
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn send_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(send(&RelayConfig::default(), &fields()));
    assert_eq!(result, Err(RelayError::Unavailable));
}

#[test]
fn relay_error_messages_are_readable() {
    let status = RelayError::Status { status: 400, body: "The Public Key is invalid".to_owned() };
    assert_eq!(status.to_string(), "relay responded with status 400: The Public Key is invalid");
    let config: RelayError = ConfigError::Blank { var: "PORTFOLIO_EMAILJS_SERVICE_ID" }.into();
    assert_eq!(config.to_string(), "relay config invalid: relay setting PORTFOLIO_EMAILJS_SERVICE_ID is blank");
}
