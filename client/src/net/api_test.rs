use futures::executor::block_on;

use super::*;
use crate::net::storage::MemoryTokens;
use crate::net::testing::{self, BASE, USER_JSON};
use crate::net::types::{BeachReport, ConservationAction, NewSighting, Sighting};

#[test]
fn build_url_without_query() {
    assert_eq!(build_url("http://h", "/me", &[]), "http://h/me");
}

#[test]
fn build_url_encodes_query_values() {
    let url = build_url("http://h", "/ocean-data/conditions", &[("location_name", "La Jolla, CA".to_owned()), ("days", "3".to_owned())]);
    assert_eq!(url, "http://h/ocean-data/conditions?location_name=La%20Jolla%2C%20CA&days=3");
}

#[test]
fn login_form_url_encodes_credentials() {
    assert_eq!(login_form("a+b@example.com", "p&ss word"), "email=a%2Bb%40example.com&password=p%26ss%20word");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}

#[test]
fn new_trims_trailing_slash_from_base() {
    let client = ApiClient::new("http://backend.test/", BrowserTransport, MemoryTokens::default());
    assert_eq!(client.base_url(), "http://backend.test");
}

#[test]
fn requests_are_anonymous_without_token() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Get, "/stats/community", 200, "{}");
    block_on(api.community_stats()).unwrap();
    assert_eq!(transport.sent()[0].bearer, None);
}

#[test]
fn bearer_is_read_at_dispatch_time() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Get, "/me", 200, USER_JSON);

    tokens.store("first");
    block_on(api.current_user()).unwrap();
    tokens.store("second");
    block_on(api.current_user()).unwrap();
    tokens.clear();
    let _ = block_on(api.current_user());

    let bearers: Vec<Option<String>> = transport.sent().into_iter().map(|r| r.bearer).collect();
    assert_eq!(bearers, vec![Some("first".to_owned()), Some("second".to_owned()), None]);
}

#[test]
fn login_posts_form_encoded_credentials() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Post, "/login", 200, r#"{"access_token":"tok","token_type":"bearer"}"#);

    let token = block_on(api.login("ana@example.com", "secret")).unwrap();
    assert_eq!(token.access_token, "tok");

    let sent = &transport.sent()[0];
    assert_eq!(sent.url, format!("{BASE}/login"));
    assert_eq!(sent.body, Body::Form("email=ana%40example.com&password=secret".to_owned()));
}

#[test]
fn signup_posts_json_and_ignores_body() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Post, "/signup", 201, "not json at all");

    let request = SignupRequest {
        email: "ana@example.com".to_owned(),
        name: "Ana".to_owned(),
        password: "secret1".to_owned(),
        location: None,
    };
    block_on(api.signup(&request)).unwrap();

    let Body::Json(body) = &transport.sent()[0].body else { panic!("expected json body") };
    let value: Value = serde_json::from_str(body).unwrap();
    assert_eq!(value["email"], "ana@example.com");
    assert!(value["location"].is_null());
    assert!(value.get("confirm_password").is_none());
}

#[test]
fn non_2xx_carries_decoded_detail() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Post, "/login", 401, r#"{"detail":"Incorrect email or password"}"#);

    let err = block_on(api.login("ana@example.com", "wrong")).unwrap_err();
    assert_eq!(
        err,
        ApiError::Status { status: 401, detail: ErrorDetail::Message("Incorrect email or password".to_owned()) }
    );
}

#[test]
fn malformed_success_body_is_decode_error() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Get, "/me", 200, "[]");
    assert!(matches!(block_on(api.current_user()), Err(ApiError::Decode(_))));
}

#[test]
fn list_maps_query_to_collection_path() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Get, "/sightings", 200, "[]");
    transport.on(Method::Get, "/beach-reports", 200, "[]");
    transport.on(Method::Get, "/conservation-actions", 200, "[]");

    block_on(api.list::<Sighting>(&ListQuery::latest(5))).unwrap();
    block_on(api.list::<BeachReport>(&ListQuery::by_user(9))).unwrap();
    block_on(api.list::<ConservationAction>(&ListQuery::default())).unwrap();

    let urls: Vec<String> = transport.sent().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE}/sightings?limit=5"),
            format!("{BASE}/beach-reports?user_id=9"),
            format!("{BASE}/conservation-actions"),
        ]
    );
}

#[test]
fn create_and_delete_use_record_paths() {
    let tokens = MemoryTokens::with_token("tok");
    let (api, transport) = testing::client(&tokens);
    transport.on(
        Method::Post,
        "/sightings",
        201,
        r#"{"id":12,"species_name":"Bottlenose","species_type":"Dolphin","date_spotted":"2024-05-01","group_size":4}"#,
    );
    transport.on(Method::Delete, "/sightings/12", 204, "");
    transport.on(
        Method::Get,
        "/sightings/12",
        200,
        r#"{"id":12,"species_name":"Bottlenose","species_type":"Dolphin","date_spotted":"2024-05-01"}"#,
    );

    let draft = NewSighting {
        species_name: "Bottlenose".to_owned(),
        species_type: "Dolphin".to_owned(),
        location_name: None,
        latitude: None,
        longitude: None,
        date_spotted: "2024-05-01".to_owned(),
        time_spotted: None,
        group_size: 4,
        behavior: None,
        notes: None,
    };
    let created: Sighting = block_on(api.create::<Sighting>(&draft)).unwrap();
    assert_eq!(created.id, 12);
    assert_eq!(created.group_size, 4);

    let fetched: Sighting = block_on(api.get::<Sighting>(12)).unwrap();
    assert_eq!(fetched.species_name, "Bottlenose");

    block_on(api.delete::<Sighting>(12)).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[2].method, Method::Delete);
    assert_eq!(sent[2].bearer.as_deref(), Some("tok"));
}

#[test]
fn delete_surfaces_backend_refusal() {
    let tokens = MemoryTokens::with_token("tok");
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Delete, "/beach-reports/3", 403, r#"{"detail":"Not authorized to delete this report"}"#);
    let err = block_on(api.delete::<BeachReport>(3)).unwrap_err();
    assert_eq!(err.status(), Some(403));
}

#[test]
fn ocean_data_endpoints_map_parameters() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Get, "/ocean-data/tides/9410230", 200, "{}");
    transport.on(Method::Get, "/ocean-data/weather", 200, "{}");
    transport.on(Method::Get, "/ocean-data/temperature", 200, "{}");
    transport.on(Method::Get, "/ocean-data/conditions", 200, r#"{"ok":true}"#);

    block_on(api.tides("9410230", 3)).unwrap();
    block_on(api.weather(32.8, -117.2, 2)).unwrap();
    block_on(api.temperature(32.8, -117.2, 1)).unwrap();
    let conditions = block_on(api.conditions("La Jolla", 32.8, -117.2, 7)).unwrap();
    assert_eq!(conditions["ok"], true);

    let urls: Vec<String> = transport.sent().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE}/ocean-data/tides/9410230?days=3"),
            format!("{BASE}/ocean-data/weather?latitude=32.8&longitude=-117.2&days=2"),
            format!("{BASE}/ocean-data/temperature?latitude=32.8&longitude=-117.2&days=1"),
            format!("{BASE}/ocean-data/conditions?location_name=La%20Jolla&latitude=32.8&longitude=-117.2&days=7"),
        ]
    );
}
