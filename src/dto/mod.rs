pub mod api;
pub mod category;
pub mod customer;
pub mod main;
pub mod product;

/// Permissive integer parse for pagination query values: anything that is not
/// a positive number falls back to the default.
pub(crate) fn parse_page_value(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::parse_page_value;

    #[test]
    fn garbage_and_non_positive_values_fall_back() {
        assert_eq!(parse_page_value(None, 1), 1);
        assert_eq!(parse_page_value(Some("abc"), 1), 1);
        assert_eq!(parse_page_value(Some("0"), 1), 1);
        assert_eq!(parse_page_value(Some("-3"), 1), 1);
        assert_eq!(parse_page_value(Some(" 7 "), 1), 7);
    }
}
