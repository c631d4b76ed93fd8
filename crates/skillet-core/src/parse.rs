//! Best-effort ingredient-list parsing.
//!
//! The corpus serializes ingredient lists as a bracket-delimited,
//! comma-separated, quoted-token string: `['eggs', 'milk', "flour"]`.
//! Parsing is an extraction step, not a format validator: anything that
//! cannot be read degrades to an empty token list with a warning, and the
//! record stays in the corpus.

use tracing::warn;

/// Parse a serialized ingredient-list field into clean tokens.
///
/// - Empty input and the empty-list marker `[]` yield an empty vec.
/// - Otherwise the outer brackets are stripped, the body is split on commas,
///   and each token loses surrounding whitespace and quotes.
/// - Empty tokens are dropped.
/// - Input without the bracket frame is malformed: it is logged and yields
///   an empty vec rather than an error.
#[must_use]
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "[]" {
        return Vec::new();
    }

    let Some(body) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        warn!(field = trimmed, "unparseable ingredient field, treating as empty");
        return Vec::new();
    };

    body.split(',')
        .map(|token| {
            token
                .trim()
                .trim_matches(|c| c == '\'' || c == '"')
                .trim()
        })
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_ingredients;

    #[test]
    fn empty_list_marker_yields_empty() {
        assert!(parse_ingredients("[]").is_empty());
    }

    #[test]
    fn blank_input_yields_empty() {
        assert!(parse_ingredients("").is_empty());
        assert!(parse_ingredients("   ").is_empty());
    }

    #[test]
    fn two_quoted_tokens() {
        assert_eq!(parse_ingredients("['a', 'b']"), vec!["a", "b"]);
    }

    #[test]
    fn mixed_quote_styles() {
        assert_eq!(
            parse_ingredients(r#"['eggs', "milk", 'all-purpose flour']"#),
            vec!["eggs", "milk", "all-purpose flour"]
        );
    }

    #[test]
    fn whitespace_inside_quotes_is_trimmed() {
        assert_eq!(parse_ingredients("[' salt ', 'pepper']"), vec!["salt", "pepper"]);
    }

    #[test]
    fn empty_tokens_are_dropped() {
        assert_eq!(parse_ingredients("['a', '', ,'b']"), vec!["a", "b"]);
    }

    #[test]
    fn unbracketed_input_is_malformed() {
        assert!(parse_ingredients("eggs, milk").is_empty());
    }

    #[test]
    fn single_token() {
        assert_eq!(parse_ingredients("['sugar']"), vec!["sugar"]);
    }

    #[test]
    fn surrounding_field_whitespace_is_ignored() {
        assert_eq!(parse_ingredients("  ['a', 'b']  "), vec!["a", "b"]);
    }
}
