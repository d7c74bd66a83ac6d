use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |var| map.get(var).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = RelayConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, RelayConfig::default());
    assert_eq!(cfg.service_id, DEFAULT_SERVICE_ID);
    assert_eq!(cfg.template_id, DEFAULT_TEMPLATE_ID);
    assert_eq!(cfg.public_key, DEFAULT_PUBLIC_KEY);
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn from_lookup_applies_overrides_and_trims() {
    let cfg = RelayConfig::from_lookup(lookup(&[
        ("PORTFOLIO_EMAILJS_SERVICE_ID", " service_x "),
        ("PORTFOLIO_EMAILJS_TEMPLATE_ID", "template_y"),
        ("PORTFOLIO_EMAILJS_PUBLIC_KEY", "pk"),
        ("PORTFOLIO_EMAILJS_ENDPOINT", "https://relay.test/send/"),
    ]))
    .unwrap();
    assert_eq!(cfg.service_id, "service_x");
    assert_eq!(cfg.template_id, "template_y");
    assert_eq!(cfg.public_key, "pk");
    assert_eq!(cfg.endpoint, "https://relay.test/send");
}

#[test]
fn from_lookup_rejects_blank_values() {
    let err = RelayConfig::from_lookup(lookup(&[("PORTFOLIO_EMAILJS_TEMPLATE_ID", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Blank { var: "PORTFOLIO_EMAILJS_TEMPLATE_ID" });
    assert_eq!(err.to_string(), "relay setting PORTFOLIO_EMAILJS_TEMPLATE_ID is blank");
}

#[test]
fn from_env_resolves_without_build_overrides() {
    assert!(RelayConfig::from_env().is_ok());
}
