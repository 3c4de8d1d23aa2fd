use super::*;

// =============================================================
// Cookie record formatting
// =============================================================

#[test]
fn build_token_cookie_formats_full_record() {
    let record = build_token_cookie(TOKEN_COOKIE, "t1", TOKEN_TTL, false);
    assert_eq!(record, "facematch_token=t1; Max-Age=604800; Path=/; SameSite=Strict");
}

#[test]
fn build_token_cookie_adds_secure_on_https() {
    let record = build_token_cookie(TOKEN_COOKIE, "t1", TOKEN_TTL, true);
    assert!(record.ends_with("; Secure"));
}

#[test]
fn token_ttl_is_seven_days() {
    assert_eq!(TOKEN_TTL.as_secs(), 7 * 24 * 60 * 60);
}

#[test]
fn expired_token_cookie_zeroes_max_age() {
    assert_eq!(expired_token_cookie(TOKEN_COOKIE), "facematch_token=; Max-Age=0; Path=/; SameSite=Strict");
}

// =============================================================
// Cookie header parsing
// =============================================================

#[test]
fn cookie_value_finds_token_among_other_cookies() {
    let header = "theme=dark; facematch_token=abc123; _ga=GA1.2";
    assert_eq!(cookie_value(header, TOKEN_COOKIE), Some("abc123".to_owned()));
}

#[test]
fn cookie_value_requires_exact_name() {
    let header = "old_facematch_token=stale; other=1";
    assert_eq!(cookie_value(header, TOKEN_COOKIE), None);
}

#[test]
fn cookie_value_handles_empty_header() {
    assert_eq!(cookie_value("", TOKEN_COOKIE), None);
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_token() {
    let store = MemoryStore::default();
    assert_eq!(store.read(), None);

    store.write("t1", TOKEN_TTL);
    assert_eq!(store.read(), Some("t1".to_owned()));

    store.write("t2", TOKEN_TTL);
    assert_eq!(store.read(), Some("t2".to_owned()));

    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryStore::with_token("t1");
    store.clear();
    store.clear();
    assert_eq!(store.read(), None);
}
