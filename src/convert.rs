//! Small value conversions.

/// String form of a float.
///
/// Integral values keep their fractional part, so `2.0` becomes `"2.0"` rather
/// than `"2"`.
pub fn to_str(n: f64) -> String {
    format!("{n:?}")
}

/// Pairs `k` with the square of `v`.
///
/// # Examples
///
/// ```rust
/// use github_org_client::convert::to_kv;
///
/// assert_eq!(to_kv("eggs", 3), ("eggs".to_string(), 9.0));
/// assert_eq!(to_kv("school", 1.5), ("school".to_string(), 2.25));
/// ```
pub fn to_kv(k: &str, v: impl Into<f64>) -> (String, f64) {
    let v = v.into();
    (k.to_string(), v * v)
}
