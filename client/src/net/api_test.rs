use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("session_abc"), "Bearer session_abc");
}

#[test]
fn wishlist_paths_embed_trip_id() {
    assert_eq!(wishlist_item_path("trip_9"), "/wishlist/trip_9");
    assert_eq!(wishlist_check_path("trip_9"), "/wishlist/check/trip_9");
}

#[test]
fn trips_url_without_filters_is_bare_endpoint() {
    let api = HttpApi::default();
    assert_eq!(api.trips_url(&TripQuery::default()), "/api/trips");
}

#[test]
fn trips_url_encodes_search_terms() {
    let api = HttpApi::new(ClientConfig {
        api_base: "https://api.seeker.test/api".to_owned(),
        ..ClientConfig::default()
    });
    let query = TripQuery {
        search: Some("mount bromo & co".to_owned()),
        limit: Some(6),
        ..TripQuery::default()
    };
    assert_eq!(
        api.trips_url(&query),
        "https://api.seeker.test/api/trips?search=mount+bromo+%26+co&limit=6"
    );
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn footer_content_falls_back_off_browser() {
    let api = HttpApi::default();
    assert_eq!(api.footer_content().await, FooterContent::default());
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn auth_calls_are_unavailable_off_browser() {
    let api = HttpApi::default();
    assert_eq!(api.current_user("t").await, Err(ApiError::Unavailable));
    assert_eq!(api.logout(None).await, Err(ApiError::Unavailable));
}
