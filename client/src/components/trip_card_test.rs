use super::*;

// =============================================================
// Carousel
// =============================================================

#[test]
fn next_index_wraps_to_start() {
    assert_eq!(next_index(0, 3), 1);
    assert_eq!(next_index(2, 3), 0);
}

#[test]
fn prev_index_wraps_to_end() {
    assert_eq!(prev_index(0, 3), 2);
    assert_eq!(prev_index(2, 3), 1);
}

#[test]
fn carousel_with_no_images_stays_at_zero() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(prev_index(0, 0), 0);
}

#[test]
fn carousel_controls_by_image_count() {
    assert_eq!(carousel_controls(0), (false, false));
    assert_eq!(carousel_controls(1), (true, false));
    assert_eq!(carousel_controls(4), (true, true));
}

// =============================================================
// Price
// =============================================================

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price("RM", 1250.0), "RM 1,250");
    assert_eq!(format_price("RM", 1_234_567.4), "RM 1,234,567");
}

#[test]
fn format_price_small_values() {
    assert_eq!(format_price("RM", 99.5), "RM 100");
    assert_eq!(format_price("RM", 0.0), "RM 0");
}
