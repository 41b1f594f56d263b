/// Merge conditional class fragments into one class string.
///
/// Fragments may hold several space separated classes. Empty fragments and
/// repeats are dropped; the first occurrence keeps its position.
pub fn cn<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: Vec<&str> = Vec::new();
    for class in parts.into_iter().flatten().flat_map(str::split_whitespace) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merges_and_dedups() {
        assert_eq!(
            cn([Some("nav-link"), Some("active nav-link"), None, Some("  ")]),
            "nav-link active"
        );
    }

    #[test]
    fn test_conditional_fragments() {
        let open = true;
        let scrolled = false;
        let classes = cn([
            Some("mobile-menu"),
            open.then_some("mobile-menu--open"),
            scrolled.then_some("scrolled"),
        ]);
        assert_eq!(classes, "mobile-menu mobile-menu--open");
    }

    #[test]
    fn test_empty() {
        assert_eq!(cn(std::iter::empty()), "");
    }
}
