use multivalued_map::{multivalued_map, MultivaluedMap};

#[test]
fn test_multivalued_map_macro_empty() {
    let map: MultivaluedMap<&str, &str> = multivalued_map! {};
    assert!(map.is_empty());
}

#[test]
fn test_multivalued_map_macro_headers() {
    let headers = multivalued_map! {
        "Accept" => ["text/html", "application/xml"],
        "Accept-Encoding" => ["gzip"],
    };

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get_first("Accept"), Some(&"text/html"));
    assert_eq!(
        headers.to_string(),
        "{Accept=[text/html, application/xml], Accept-Encoding=[gzip]}"
    );
}

#[test]
fn test_multivalued_map_macro_empty_list_registers_key() {
    let map = multivalued_map! {
        "present" => [1],
        "empty" => [],
    };

    assert!(map.contains_key("empty"));
    assert_eq!(map.get_first("empty"), None);
    assert_eq!(map.get("present"), Some(&vec![1]));
}

#[test]
fn test_multivalued_map_macro_owned_keys() {
    let map = multivalued_map! {
        String::from("a") => [1.5, 2.5],
    };

    assert_eq!(map.get("a").map(|v| v.iter().sum::<f64>()), Some(4.0));
}

#[test]
fn test_multivalued_map_macro_then_mutate() {
    let mut map = multivalued_map! { "k" => [2] };
    map.add_first("k", 1);
    map.add("k", 3);
    assert_eq!(map.get("k"), Some(&vec![1, 2, 3]));
}
