use super::*;

#[test]
fn kg_rounds_to_one_decimal() {
    assert_eq!(format_kg(12.345), "12.3 kg");
    assert_eq!(format_kg(0.0), "0.0 kg");
}

#[test]
fn area_rounds_to_whole_metres() {
    assert_eq!(format_area(1520.6), "1521 m²");
    assert_eq!(format_area(0.0), "0 m²");
}

#[test]
fn coordinates_need_both_parts() {
    assert_eq!(format_coordinates(Some(32.853_12), Some(-117.273_9)), Some("32.8531, -117.2739".to_owned()));
    assert_eq!(format_coordinates(Some(32.8), None), None);
    assert_eq!(format_coordinates(None, None), None);
}

#[test]
fn score_dash_when_missing() {
    assert_eq!(format_score(None), "-");
    assert_eq!(format_score(Some(7.26)), "7.3");
}

#[test]
fn date_part_strips_time() {
    assert_eq!(date_part("2024-05-01T10:00:00"), "2024-05-01");
    assert_eq!(date_part("2024-05-01"), "2024-05-01");
}

#[test]
fn iso_date_pads_fields() {
    assert_eq!(iso_date(2024, 5, 1), "2024-05-01");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn today_is_empty_off_browser() {
    assert!(today_iso().is_empty());
}
