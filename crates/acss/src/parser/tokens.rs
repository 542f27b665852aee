//! Splitting of parenthesized property lists.
//!
//! `hover(bd[1px solid red] c[blue])` carries two tokens, not four: a space
//! only separates tokens when it sits outside every `[...]` and `(...)`.

/// Splits a property list on whitespace that is not nested in brackets or
/// parentheses. Empty tokens are dropped.
pub fn split_tokens(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth: usize = 0;
    let mut start = None;

    for (i, c) in input.char_indices() {
        match c {
            '[' | '(' => {
                depth += 1;
                start.get_or_insert(i);
            }
            ']' | ')' => {
                depth = depth.saturating_sub(1);
                start.get_or_insert(i);
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&input[s..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }

    if let Some(s) = start {
        tokens.push(&input[s..]);
    }
    tokens
}
