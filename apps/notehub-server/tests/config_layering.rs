#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Configuration sources: defaults, YAML file, environment.

use std::io::Write;
use std::path::Path;

use notehub_server::AppConfig;
use notehub_server::config::LogFormat;
use tempfile::NamedTempFile;

/// Variables touched by these tests; every test clears or sets them so the
/// process environment cannot leak between tests.
const VARS: [&str; 3] = [
    "NOTEHUB__LOGGING__LEVEL",
    "NOTEHUB__MODULES__API_GATEWAY__BIND_ADDR",
    "NOTEHUB__MODULES__ADMIN_MESSAGING__MAX_RECIPIENTS",
];

fn yaml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const FILE: &str = r#"
logging:
  level: debug
  format: json
modules:
  api_gateway:
    bind_addr: "0.0.0.0:9000"
    session_cookie: notehub_session
  session_resolver:
    plugins: [static, appwrite]
  static_session_plugin:
    tokens:
      - token: admin-tok
        principal:
          id: u1
          prefs:
            admin: "true"
  appwrite_session_plugin:
    project_id: notehub
  admin_messaging:
    static_users: [u1, u2]
    appwrite:
      api_key: super-secret-key
"#;

#[test]
fn defaults_apply_without_file() {
    temp_env::with_vars_unset(VARS, || {
        let cfg = AppConfig::load(None).unwrap();

        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.modules.api_gateway.bind_addr, "127.0.0.1:8087");
        assert_eq!(cfg.modules.session_resolver.plugins, vec!["appwrite"]);
        assert!(cfg.modules.static_session_plugin.tokens.is_empty());
        assert_eq!(cfg.modules.admin_messaging.max_recipients, None);
    });
}

#[test]
fn file_overrides_defaults() {
    let file = yaml(FILE);
    temp_env::with_vars_unset(VARS, || {
        let cfg = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        let gateway = &cfg.modules.api_gateway;
        assert_eq!(gateway.bind_addr, "0.0.0.0:9000");
        assert_eq!(gateway.session_cookie.as_deref(), Some("notehub_session"));
        assert_eq!(gateway.defaults.body_limit_bytes, 1024 * 1024);
        assert_eq!(
            cfg.modules.session_resolver.plugins,
            vec!["static", "appwrite"]
        );
        let tokens = &cfg.modules.static_session_plugin.tokens;
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].principal.is_admin());
        assert_eq!(cfg.modules.appwrite_session_plugin.project_id, "notehub");
        assert_eq!(cfg.modules.admin_messaging.static_users, vec!["u1", "u2"]);
        assert!(cfg.modules.admin_messaging.appwrite.api_key.is_some());
    });
}

#[test]
fn environment_overrides_file() {
    let file = yaml(FILE);
    temp_env::with_vars(
        [
            ("NOTEHUB__LOGGING__LEVEL", Some("warn")),
            ("NOTEHUB__MODULES__API_GATEWAY__BIND_ADDR", Some("127.0.0.1:9100")),
            ("NOTEHUB__MODULES__ADMIN_MESSAGING__MAX_RECIPIENTS", Some("25")),
        ],
        || {
            let cfg = AppConfig::load(Some(file.path())).unwrap();

            assert_eq!(cfg.logging.level, "warn");
            assert_eq!(cfg.modules.api_gateway.bind_addr, "127.0.0.1:9100");
            assert_eq!(cfg.modules.admin_messaging.max_recipients, Some(25));
            // Untouched keys keep their file values.
            assert_eq!(cfg.logging.format, LogFormat::Json);
        },
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let file = yaml("modules:\n  api_gateway:\n    auth_disabled: true\n");
    temp_env::with_vars_unset(VARS, || {
        let err = AppConfig::load(Some(file.path())).unwrap_err();

        assert!(format!("{err:#}").contains("auth_disabled"));
    });
}

#[test]
fn missing_file_is_an_error() {
    temp_env::with_vars_unset(VARS, || {
        let err = AppConfig::load(Some(Path::new("/nonexistent/notehub.yaml"))).unwrap_err();

        assert!(err.to_string().contains("config file not found"));
    });
}

#[test]
fn printed_config_omits_secrets() {
    let file = yaml(FILE);
    temp_env::with_vars_unset(VARS, || {
        let cfg = AppConfig::load(Some(file.path())).unwrap();

        let rendered = serde_json::to_string(&cfg).unwrap();

        assert!(!rendered.contains("super-secret-key"));
        assert!(!rendered.contains("admin-tok"));
        assert!(rendered.contains("0.0.0.0:9000"));
    });
}
