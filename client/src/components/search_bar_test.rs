use super::*;

#[test]
fn search_target_without_filters_lists_everything() {
    assert_eq!(search_target("", "all"), "/trips");
    assert_eq!(search_target("   ", ""), "/trips");
}

#[test]
fn search_target_encodes_query_and_activity() {
    assert_eq!(search_target("rinjani 3D2N", "hiking"), "/trips?search=rinjani+3D2N&activity_type=hiking");
}

#[test]
fn search_target_drops_all_activity() {
    assert_eq!(search_target("bali", "all"), "/trips?search=bali");
}

#[test]
fn activity_types_start_with_all() {
    assert_eq!(ACTIVITY_TYPES[0].0, "all");
}
