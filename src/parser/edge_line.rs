//! Tokenizer for bracketed edge lines.
//!
//! An edge line looks like `(source,target)` or `(source,target,weight)`.
//! Tokens are split on commas and taken literally; only the opening
//! bracket of the first token and the closing bracket of the last token
//! are removed.

use tracing::trace;

use super::types::EdgeSpec;
use crate::error::{GraphError, GraphResult};

/// Splits an edge line into its tokens with the surrounding brackets removed.
///
/// Always returns at least one token.
///
/// # Example
///
/// ```
/// use graphsum::parser::edge_line::tokenize;
///
/// assert_eq!(tokenize("(a,b,5)"), vec!["a", "b", "5"]);
/// assert_eq!(tokenize("(A)"), vec!["A"]);
/// ```
pub fn tokenize(raw: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = raw.split(',').collect();

    let first = tokens[0];
    tokens[0] = first.strip_prefix('(').unwrap_or(first);

    let last_idx = tokens.len() - 1;
    let last = tokens[last_idx];
    tokens[last_idx] = last.strip_suffix(')').unwrap_or(last);

    tokens
}

/// Parses one edge line into an [`EdgeSpec`].
///
/// # Arguments
///
/// * `raw` - The edge line as read from the file
/// * `line` - 1-based line number, carried into the spec and any error
///
/// # Returns
///
/// The typed edge, or `MalformedEdgeLine` when the line does not hold
/// exactly 2 or 3 parameters.
///
/// # Example
///
/// ```
/// use graphsum::parser::edge_line::parse_edge_line;
///
/// let edge = parse_edge_line("(a,b,5)", 3).unwrap();
/// assert_eq!(edge.source, "a");
/// assert_eq!(edge.target, "b");
/// assert_eq!(edge.weight.as_deref(), Some("5"));
/// ```
pub fn parse_edge_line(raw: &str, line: usize) -> GraphResult<EdgeSpec> {
    let tokens = tokenize(raw);
    trace!(line, ?tokens, "tokenized edge line");

    match tokens.as_slice() {
        [source, target] => Ok(EdgeSpec {
            source: source.to_string(),
            target: target.to_string(),
            weight: None,
            line,
        }),
        [source, target, weight] => Ok(EdgeSpec {
            source: source.to_string(),
            target: target.to_string(),
            weight: Some(weight.to_string()),
            line,
        }),
        _ => Err(GraphError::MalformedEdgeLine {
            node: tokens[0].to_string(),
            count: tokens.len(),
            line,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_outer_brackets_only() {
        assert_eq!(tokenize("(a,b)"), vec!["a", "b"]);
        assert_eq!(tokenize("((a),(b))"), vec!["(a)", "(b)"]);
    }

    #[test]
    fn test_tokenize_keeps_whitespace() {
        assert_eq!(tokenize("( a, b )"), vec![" a", " b "]);
    }

    #[test]
    fn test_tokenize_without_brackets() {
        assert_eq!(tokenize("a,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn test_parse_unweighted_edge() {
        let edge = parse_edge_line("(b,c)", 4).unwrap();
        assert_eq!(edge.source, "b");
        assert_eq!(edge.target, "c");
        assert!(edge.weight.is_none());
        assert_eq!(edge.line, 4);
    }

    #[test]
    fn test_parse_weighted_edge() {
        let edge = parse_edge_line("(a,b,5)", 3).unwrap();
        assert_eq!(edge.weight, Some("5".to_string()));
    }

    #[test]
    fn test_parse_single_token_is_malformed() {
        let err = parse_edge_line("(A)", 7).unwrap_err();
        match err {
            GraphError::MalformedEdgeLine { node, count, line } => {
                assert_eq!(node, "A");
                assert_eq!(count, 1);
                assert_eq!(line, 7);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_four_tokens_is_malformed() {
        let err = parse_edge_line("(a,b,1,2)", 3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::MalformedEdgeLine { ref node, count: 4, .. } if node == "a"
        ));
    }

    #[test]
    fn test_parse_blank_line_is_malformed() {
        let err = parse_edge_line("", 5).unwrap_err();
        assert!(matches!(
            err,
            GraphError::MalformedEdgeLine {
                ref node,
                count: 1,
                line: 5
            } if node.is_empty()
        ));
    }
}
