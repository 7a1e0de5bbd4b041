/// Color used when neither a color nor a fallback is given.
pub const DEFAULT_COLOR: &str = "000000";

/// Normalize a color for the rendering engine, which expects bare hex digits.
///
/// A single leading `#` is stripped from `primary`, or from `fallback` when `primary` is absent. Without either,
/// [DEFAULT_COLOR] is returned. The digits themselves are passed through unchecked.
/// # Example
/// ```
/// use bcval_render::normalize_color;
/// assert_eq!(normalize_color(Some("#ffffff"), None), "ffffff");
/// assert_eq!(normalize_color(None, Some("#eee")), "eee");
/// assert_eq!(normalize_color(None, None), "000000");
/// ```
pub fn normalize_color(primary: Option<&str>, fallback: Option<&str>) -> String {
    match primary.or(fallback) {
        Some(color) => color.strip_prefix('#').unwrap_or(color).to_owned(),
        None => DEFAULT_COLOR.to_owned(),
    }
}
