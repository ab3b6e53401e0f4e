//! Text rendering utilities for human-friendly error messages.
//!
//! Provides helpers to format key lists and "did you mean?" suggestions
//! in error output.

/// Renders a list of names as a comma-separated string.
///
/// # Examples
/// ```
/// use chassis_support::rendering::render_list;
///
/// let keys = vec!["logger", "cache", "database"];
/// assert_eq!(render_list(&keys), "logger, cache, database");
/// ```
pub fn render_list(items: &[impl AsRef<str>]) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generates "did you mean?" suggestions for a requested key.
///
/// Compares the requested key against the available keys and returns
/// close matches, best first.
///
/// # Examples
/// ```
/// use chassis_support::rendering::suggest_similar;
///
/// let available = vec!["logger", "cache"];
/// let suggestions = suggest_similar("loger", &available, 3);
/// assert_eq!(suggestions, ["logger"]);
/// ```
pub fn suggest_similar(
    requested: &str,
    available: &[&str],
    max_suggestions: usize,
) -> Vec<String> {
    let requested_lower = requested.to_lowercase();

    let mut scored: Vec<(&str, usize)> = available
        .iter()
        .filter_map(|&name| {
            let name_lower = name.to_lowercase();

            // Exact substring match (highest priority)
            if name_lower.contains(&requested_lower)
                || requested_lower.contains(&name_lower)
            {
                return Some((name, 100));
            }

            // Common prefix
            let common = name_lower
                .chars()
                .zip(requested_lower.chars())
                .take_while(|(a, b)| a == b)
                .count();

            if common >= 3 {
                return Some((name, common * 10));
            }

            None
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_simple_list() {
        let items = vec!["a", "b", "c"];
        assert_eq!(render_list(&items), "a, b, c");
    }

    #[test]
    fn render_single_element_list() {
        let items = vec!["a"];
        assert_eq!(render_list(&items), "a");
    }

    #[test]
    fn render_empty_list() {
        let items: Vec<&str> = vec![];
        assert_eq!(render_list(&items), "");
    }

    #[test]
    fn suggest_typo() {
        let available = vec!["logger", "cache", "database"];
        let suggestions = suggest_similar("loger", &available, 3);
        assert_eq!(suggestions, ["logger"]);
    }

    #[test]
    fn suggest_substring_outranks_prefix() {
        let available = vec!["connection_pool", "config"];
        let suggestions = suggest_similar("connection", &available, 3);
        assert_eq!(suggestions[0], "connection_pool");
    }

    #[test]
    fn suggest_ignores_case() {
        let available = vec!["Logger"];
        let suggestions = suggest_similar("logger", &available, 3);
        assert_eq!(suggestions, ["Logger"]);
    }

    #[test]
    fn suggest_respects_limit() {
        let available = vec!["svc_a", "svc_b", "svc_c", "svc_d"];
        let suggestions = suggest_similar("svc", &available, 2);
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn suggest_no_match() {
        let available = vec!["database"];
        let suggestions = suggest_similar("xyz", &available, 3);
        assert!(suggestions.is_empty());
    }
}
