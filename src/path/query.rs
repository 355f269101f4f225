use std::collections::HashMap;

use super::codec::decode;

/// Decodes a query string into a name/value map.
///
/// Pairs are split on `&` before decoding, so an encoded `%26` stays inside
/// its value. A name without `=` maps to an empty string and a repeated name
/// keeps its last value.
///
/// # Example
///
/// ```
/// use odata_intake::path::query::extract_query_parameters;
///
/// let params = extract_query_parameters(Some("$top=10&$filter=Name%20eq%20'A%26B'&flag"));
/// assert_eq!(params["$top"], "10");
/// assert_eq!(params["$filter"], "Name eq 'A&B'");
/// assert_eq!(params["flag"], "");
/// ```
pub fn extract_query_parameters(query: Option<&str>) -> HashMap<String, String> {
    let Some(query) = query else {
        return HashMap::new();
    };

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (decode(name), decode(value)),
            None => (decode(pair), String::new()),
        })
        .collect()
}
