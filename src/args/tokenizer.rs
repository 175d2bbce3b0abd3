//! Command line tokenizer: one string to tokens.

/// Split a command line into tokens.
///
/// A token is either a double-quoted span (quotes stripped, inner whitespace
/// kept) or a run of characters that are neither whitespace nor `"`.
/// A quote without a closing partner is dropped.
///
/// ```
/// use clirouter::args::tokenize;
///
/// assert_eq!(tokenize(r#"app add "two words""#), ["app", "add", "two words"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == '"' {
            let body = &rest[1..];
            match body.find('"') {
                Some(end) => {
                    tokens.push(body[..end].to_string());
                    rest = &body[end + 1..];
                }
                // Unbalanced: skip the quote, keep scanning after it
                None => rest = body,
            }
            continue;
        }

        let end = rest
            .find(|ch: char| ch == '"' || ch.is_whitespace())
            .unwrap_or(rest.len());
        tokens.push(rest[..end].to_string());
        rest = &rest[end..];
    }

    tokens
}

/// Join tokens back into a command line that [`tokenize`] splits the same way.
///
/// Tokens that are empty or contain whitespace are wrapped in double quotes.
/// Tokens containing `"` cannot be represented and come back split.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| {
            let t = t.as_ref();
            if t.is_empty() || t.chars().any(char::is_whitespace) {
                format!("\"{}\"", t)
            } else {
                t.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
