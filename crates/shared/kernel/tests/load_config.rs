use std::fs;
use webcfg_domain::auth::AuthenticationMode;
use webcfg_domain::config::WebConfig;
use webcfg_domain::custom_errors::CustomErrorsMode;
use webcfg_kernel::config::load_config;

#[test]
fn loads_a_toml_file_with_defaults_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("web.toml");
    fs::write(
        &file,
        r#"
[authentication]
mode = "Forms"

[custom_errors]
mode = "off"
default_redirect = "errors/oops"

[trace]
enabled = true
"#,
    )
    .expect("write config");

    let config: WebConfig = load_config(Some(dir.path().join("web"))).expect("load");

    assert_eq!(config.authentication.mode, AuthenticationMode::Forms);
    assert_eq!(config.custom_errors.mode, CustomErrorsMode::Off);
    assert_eq!(config.custom_errors.default_redirect.as_deref(), Some("errors/oops"));
    assert!(config.trace.enabled);
    // Sections absent from the file keep their defaults.
    assert_eq!(config.process_model.regex_match_timeout_ms, 10_000);
}

#[test]
fn missing_base_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result: Result<WebConfig, _> = load_config(Some(dir.path().join("absent")));
    assert!(result.is_err());
}

#[test]
fn bad_tokens_fail_loading() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("web.toml");
    fs::write(&file, "[authentication]\nmode = \"kerberos\"\n").expect("write config");

    let result: Result<WebConfig, _> = load_config(Some(dir.path().join("web")));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("kerberos"), "error should name the token: {err}");
}
