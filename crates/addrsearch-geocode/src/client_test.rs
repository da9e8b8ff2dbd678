use super::*;

fn test_client(base_url: &str) -> GeocodeClient {
    GeocodeClient::with_base_url("test-key", 30, "addrsearch-test/0.1", 10, base_url)
        .expect("client construction should not fail")
}

fn record(place_id: &str, display_name: &str, lat: &str, lon: &str) -> PlaceRecord {
    PlaceRecord {
        place_id: place_id.to_owned(),
        display_name: display_name.to_owned(),
        lat: lat.to_owned(),
        lon: lon.to_owned(),
    }
}

#[test]
fn search_url_constructs_correct_query_string() {
    let client = test_client("https://us1.locationiq.com/v1");
    let url = client.search_url("1600 amphitheatre").unwrap();
    assert_eq!(
        url.as_str(),
        "https://us1.locationiq.com/v1/search.php?key=test-key&q=1600+amphitheatre&format=json&limit=10"
    );
}

#[test]
fn search_url_strips_trailing_slash() {
    let client = test_client("https://us1.locationiq.com/v1/");
    let url = client.search_url("main").unwrap();
    assert!(url.as_str().starts_with("https://us1.locationiq.com/v1/search.php?"));
}

#[test]
fn search_url_encodes_special_characters() {
    let client = test_client("https://us1.locationiq.com/v1");
    let url = client.search_url("main & 5th").unwrap();
    assert!(
        url.as_str().contains("main+%26+5th") || url.as_str().contains("main%20%26%205th"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn map_record_parses_string_coordinates() {
    let mapped = map_record(record("p1", "1 Infinite Loop", "37.33", "-122.03")).unwrap();
    assert_eq!(
        mapped,
        addrsearch_core::AddressModel {
            id: "p1".to_owned(),
            display_address: "1 Infinite Loop".to_owned(),
            latitude: 37.33,
            longitude: -122.03,
        }
    );
}

#[test]
fn map_record_drops_unparsable_latitude() {
    assert!(map_record(record("p2", "Nowhere", "not-a-number", "0.0")).is_none());
}

#[test]
fn map_record_drops_out_of_range_longitude() {
    assert!(map_record(record("p3", "Off the map", "0.0", "181.0")).is_none());
}
