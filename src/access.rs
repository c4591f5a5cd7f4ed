use serde_json::Value;
use thiserror::Error;

/// Errors raised while traversing a nested map.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// The named key was absent, or the value holding it was not an object.
    #[error("Key not found: {0}")]
    KeyNotFound(String),
}

/// Walk `nested_map` by applying each key of `path` in order.
///
/// Returns the value at the end of the path. An empty path returns
/// `nested_map` itself. Fails with [`AccessError::KeyNotFound`] naming the
/// offending key when a key is absent or an intermediate value is not an
/// object; the two cases are not distinguished.
///
/// # Example
/// ```rust
/// use payload_utils::access::access_nested_map;
/// use serde_json::json;
///
/// let nested = json!({"a": {"b": 2}});
/// assert_eq!(*access_nested_map(&nested, &["a", "b"]).unwrap(), json!(2));
/// ```
pub fn access_nested_map<'a>(
    nested_map: &'a Value,
    path: &[&str],
) -> Result<&'a Value, AccessError> {
    let mut current = nested_map;
    for key in path {
        current = current
            .as_object()
            .and_then(|map| map.get(*key))
            .ok_or_else(|| AccessError::KeyNotFound((*key).to_string()))?;
    }
    Ok(current)
}
