use super::*;

#[test]
fn default_public_prefixes() {
    let policy = RoutePolicy::default();
    assert_eq!(policy.public_prefixes(), ["/login", "/register"]);
}

#[test]
fn login_and_register_are_public() {
    let policy = RoutePolicy::default();
    for path in ["/login", "/login/reset", "/register", "/register?invite=1"] {
        assert!(policy.is_public(path), "{path} should be public");
    }
}

#[test]
fn api_prefix_is_public() {
    let policy = RoutePolicy::default();
    assert!(policy.is_public("/api/"));
    assert!(policy.is_public("/api/auth/login"));
    assert!(policy.is_public("/api/health"));
}

#[test]
fn prefix_match_is_literal() {
    let policy = RoutePolicy::default();
    // starts_with semantics, not segment matching
    assert!(policy.is_public("/login-help"));
    assert!(policy.is_public("/registered"));
    assert!(!policy.is_public("/api"));
    assert!(!policy.is_public("/apix"));
    assert!(!policy.is_public("/v1/api/"));
}

#[test]
fn everything_else_is_private() {
    let policy = RoutePolicy::default();
    for path in ["/", "/dashboard", "/appointments", "/clients/12", "/logout", ""] {
        assert!(!policy.is_public(path), "{path:?} should be private");
    }
}

#[test]
fn custom_prefixes_keep_login_public() {
    let policy = RoutePolicy::new(["/forgot-password"]);
    assert!(policy.is_public("/forgot-password"));
    assert!(policy.is_public("/login"));
    assert!(!policy.is_public("/register"));
}

#[test]
fn empty_prefixes_are_ignored() {
    // An empty prefix would make every path public.
    let policy = RoutePolicy::new(["", "/register"]);
    assert!(!policy.is_public("/dashboard"));
    assert_eq!(policy.public_prefixes(), ["/register", "/login"]);
}
