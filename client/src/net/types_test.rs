use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_backend_shape_ignoring_extras() {
    let raw = serde_json::json!({
        "user_id": "user_abc",
        "client_id": "SA-000001",
        "email": "a@b.com",
        "name": "Ayu",
        "role": "host",
        "auth_provider": "google",
        "avatar": "https://img/1.png",
        "is_active": true,
        "created_at": "2025-01-01T00:00:00Z"
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.user_id, "user_abc");
    assert_eq!(user.role, UserRole::Host);
    assert_eq!(user.auth_provider, AuthProvider::Google);
    assert_eq!(user.avatar.as_deref(), Some("https://img/1.png"));
    assert_eq!(user.phone, None);
}

#[test]
fn user_role_defaults_to_client() {
    let raw = serde_json::json!({ "user_id": "u1", "email": "a@b.com", "name": "A" });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.role, UserRole::Client);
}

#[test]
fn user_role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(UserRole::Webdev).unwrap(), serde_json::json!("webdev"));
}

#[test]
fn token_response_defaults_token_type() {
    let raw = serde_json::json!({
        "access_token": "t1",
        "user": { "user_id": "u1", "email": "a@b.com", "name": "A" }
    });
    let resp: TokenResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.token_type, "bearer");
    assert_eq!(resp.access_token, "t1");
}

// =============================================================
// Trips
// =============================================================

fn make_trip(slug: Option<&str>) -> TripSummary {
    TripSummary {
        trip_id: "trip_1".to_owned(),
        title: "Rinjani Summit".to_owned(),
        slug: slug.map(str::to_owned),
        location: "Lombok".to_owned(),
        activity_type: "hiking".to_owned(),
        duration: "3D2N".to_owned(),
        difficulty: "Challenging".to_owned(),
        price: 1200.0,
        currency: "RM".to_owned(),
        images: Vec::new(),
        rating: 0.0,
        review_count: 0,
    }
}

#[test]
fn detail_path_prefers_slug() {
    assert_eq!(make_trip(Some("rinjani-summit")).detail_path(), "/trips/rinjani-summit");
    assert_eq!(make_trip(None).detail_path(), "/trips/trip_1");
    assert_eq!(make_trip(Some("")).detail_path(), "/trips/trip_1");
}

#[test]
fn trip_query_skips_empty_and_all_filters() {
    let query = TripQuery {
        search: Some("  ".to_owned()),
        activity_type: Some("all".to_owned()),
        ..TripQuery::default()
    };
    assert!(query.to_pairs().is_empty());
}

#[test]
fn trip_query_emits_pairs_in_order() {
    let query = TripQuery {
        search: Some(" bromo ".to_owned()),
        activity_type: Some("hiking".to_owned()),
        featured: Some(true),
        page: Some(2),
        limit: Some(12),
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("search", "bromo".to_owned()),
            ("activity_type", "hiking".to_owned()),
            ("featured", "true".to_owned()),
            ("page", "2".to_owned()),
            ("limit", "12".to_owned()),
        ]
    );
}

// =============================================================
// Footer content
// =============================================================

#[test]
fn footer_content_fills_missing_fields_from_fallback() {
    let raw = serde_json::json!({ "email": "hello@seeker.test" });
    let footer: FooterContent = serde_json::from_value(raw).unwrap();
    assert_eq!(footer.email, "hello@seeker.test");
    assert_eq!(footer.location, "Indonesia");
}
