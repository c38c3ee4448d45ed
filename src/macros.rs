/// Builds a [`MultivaluedMap`](crate::MultivaluedMap) from literal entries.
///
/// Each entry registers its key with exactly the listed values, so an empty
/// list still registers the key. A key listed twice keeps the later list.
///
/// ```rust
/// use multivalued_map::multivalued_map;
///
/// let map = multivalued_map! {
///     "Accept" => ["text/html", "application/json"],
///     "Host" => ["example.com"],
///     "Cookie" => [],
/// };
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get_first("Host"), Some(&"example.com"));
/// assert_eq!(map.get("Cookie").map(Vec::len), Some(0));
/// ```
#[macro_export]
macro_rules! multivalued_map {
    // Handle empty map
    () => {
        $crate::MultivaluedMap::new()
    };

    ($($key:expr => [ $($value:expr),* $(,)? ]),+ $(,)?) => {{
        let mut map = $crate::MultivaluedMap::new();
        $(
            map.insert($key, vec![$($value),*]);
        )+
        map
    }};
}
