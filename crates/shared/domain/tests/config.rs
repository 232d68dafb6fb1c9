use serde_json::json;
use webcfg_domain::auth::{AuthenticationMode, AuthorizationRuleAction, FormsProtection};
use webcfg_domain::config::{FormsConfig, ProcessModelConfig, WebConfig};
use webcfg_domain::custom_errors::CustomErrorsMode;
use webcfg_domain::hierarchy::WebApplicationLevel;
use webcfg_domain::pages::PagesEnableSessionState;

#[test]
fn config_defaults_are_sane() {
    let forms = FormsConfig::default();
    assert_eq!(forms.name, ".WEBCFG_AUTH");
    assert_eq!(forms.login_url, "login");
    assert_eq!(forms.timeout_minutes, 30);
    assert!(!forms.require_ssl);

    let process = ProcessModelConfig::default();
    assert_eq!(process.regex_match_timeout_ms, 10_000);

    let config = WebConfig::default();
    assert_eq!(config.level, WebApplicationLevel::AtApplication);
    assert_eq!(config.authentication.mode, AuthenticationMode::Windows);
    assert_eq!(config.custom_errors.mode, CustomErrorsMode::RemoteOnly);
    assert!(config.authorization.rules.is_empty());
    assert!(!config.trace.enabled);
}

#[test]
fn web_config_deserializes_with_partial_sections() {
    let raw = json!({
        "level": "BelowApplication",
        "authentication": {
            "mode": "forms",
            "forms": { "login_url": "account/signin", "protection": "Validation" }
        },
        "authorization": {
            "rules": [
                { "action": "allow", "roles": ["admins"] },
                { "action": "deny", "users": ["*"] }
            ]
        },
        "pages": { "enable_session_state": "ReadOnly" },
        "trace": { "enabled": true }
    });

    let config: WebConfig = serde_json::from_value(raw).expect("config deserialize");

    assert_eq!(config.level, WebApplicationLevel::BelowApplication);
    assert_eq!(config.authentication.mode, AuthenticationMode::Forms);
    assert_eq!(config.authentication.forms.login_url, "account/signin");
    assert_eq!(config.authentication.forms.protection, FormsProtection::Validation);
    // Untouched fields keep their defaults.
    assert_eq!(config.authentication.forms.timeout_minutes, 30);

    assert_eq!(config.authorization.rules.len(), 2);
    assert_eq!(config.authorization.rules[0].action, AuthorizationRuleAction::Allow);
    assert_eq!(config.authorization.rules[0].roles, vec!["admins".to_owned()]);
    assert_eq!(config.authorization.rules[1].action, AuthorizationRuleAction::Deny);

    assert_eq!(config.pages.enable_session_state, PagesEnableSessionState::ReadOnly);
    assert!(config.trace.enabled);
}

#[test]
fn unknown_tokens_fail_deserialization() {
    let raw = json!({ "authentication": { "mode": "kerberos" } });
    let err = serde_json::from_value::<WebConfig>(raw).unwrap_err();
    assert!(err.to_string().contains("kerberos"));
}

#[test]
fn web_config_is_cheap_to_clone_and_mutable_via_deref() {
    let mut config = WebConfig::default();
    let snapshot = config.clone();

    config.custom_errors.mode = CustomErrorsMode::Off;

    assert_eq!(config.custom_errors.mode, CustomErrorsMode::Off);
    // Copy-on-write: the earlier clone is unaffected.
    assert_eq!(snapshot.custom_errors.mode, CustomErrorsMode::RemoteOnly);
}
