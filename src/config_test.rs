use super::*;

#[test]
fn app_env_accepts_prod_aliases() {
    assert_eq!(AppEnv::parse("production"), AppEnv::Production);
    assert_eq!(AppEnv::parse(" PROD "), AppEnv::Production);
    assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
    assert!(!AppEnv::parse("").is_production());
}

#[test]
fn public_routes_default_when_blank() {
    assert_eq!(parse_public_routes(""), vec!["/login", "/register"]);
    assert_eq!(parse_public_routes(" , ,"), vec!["/login", "/register"]);
}

#[test]
fn public_routes_trims_entries() {
    assert_eq!(
        parse_public_routes(" /login , /forgot-password,"),
        vec!["/login", "/forgot-password"]
    );
}

#[test]
fn api_url_requires_http_scheme() {
    assert!(parse_api_url("http://localhost:8000").is_ok());
    assert!(parse_api_url("https://api.example.com/").is_ok());
    assert!(matches!(
        parse_api_url("ftp://example.com"),
        Err(ConfigError::Invalid("API_URL"))
    ));
    assert!(matches!(
        parse_api_url("not a url"),
        Err(ConfigError::Invalid("API_URL"))
    ));
}

#[test]
fn bool_values() {
    for (val, expected) in [
        ("1", Some(true)),
        ("Yes", Some(true)),
        (" on ", Some(true)),
        ("0", Some(false)),
        ("FALSE", Some(false)),
        ("maybe", None),
        ("", None),
    ] {
        assert_eq!(parse_bool(val), expected, "value {val:?}");
    }
}

#[test]
fn cookie_secure_defaults_to_production() {
    assert!(parse_cookie_secure(None, AppEnv::Production).unwrap());
    assert!(!parse_cookie_secure(None, AppEnv::Development).unwrap());
    assert!(!parse_cookie_secure(Some("off"), AppEnv::Production).unwrap());
}

#[test]
fn cookie_secure_rejects_typos() {
    for raw in ["ture", "", "secure"] {
        assert!(
            matches!(
                parse_cookie_secure(Some(raw), AppEnv::Production),
                Err(ConfigError::Invalid("COOKIE_SECURE"))
            ),
            "value {raw:?}"
        );
    }
}

#[test]
fn auth_timeout_stays_below_request_timeout() {
    assert_eq!(parse_auth_timeout(None, 30).unwrap(), Duration::from_secs(10));
    assert_eq!(parse_auth_timeout(None, 4).unwrap(), Duration::from_secs(2));
    assert_eq!(parse_auth_timeout(None, 1).unwrap(), Duration::from_millis(500));
    assert_eq!(
        parse_auth_timeout(Some(" 5 "), 30).unwrap(),
        Duration::from_secs(5)
    );
}

#[test]
fn auth_timeout_rejects_out_of_range() {
    for raw in ["0", "30", "45", "soon"] {
        assert!(
            matches!(
                parse_auth_timeout(Some(raw), 30),
                Err(ConfigError::Invalid("AUTH_TIMEOUT_SECONDS"))
            ),
            "value {raw:?}"
        );
    }
}

#[test]
fn config_error_messages_name_the_key() {
    assert_eq!(
        ConfigError::Missing("API_URL").to_string(),
        "missing configuration: API_URL"
    );
    assert_eq!(
        ConfigError::Invalid("PORT").to_string(),
        "invalid configuration: PORT"
    );
}
