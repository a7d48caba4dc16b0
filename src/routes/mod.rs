//! Route table codec.
//!
//! # Responsibilities
//! - Decode the single shell-quoted `SH_ROUTES` value into an ordered
//!   path → command table
//! - Re-encode a table so that re-tokenizing reproduces it exactly
//!
//! # Design Decisions
//! - Tokenization uses POSIX shell word splitting (single quotes, double
//!   quotes, backslash escapes) so the value can be pasted straight onto a
//!   shell2http command line
//! - Tokens pair up strictly as (path, command); a trailing unpaired token
//!   is dropped, not rejected — stored configurations with accidental odd
//!   token counts must keep loading
//! - Empty commands are legal and round-trip as quoted empty words

use indexmap::IndexMap;

use crate::error::AdminError;

/// Ordered mapping of URL path → shell command.
pub type RouteTable = IndexMap<String, String>;

/// Decode a shell-quoted route string into a table.
///
/// An empty string yields an empty table. An unterminated quote is the only
/// failure; an odd token count silently drops the trailing token.
pub fn decode(value: &str) -> Result<RouteTable, AdminError> {
    let tokens = shell_words::split(value)?;
    let mut table = RouteTable::new();
    // chunks_exact drops the unpaired remainder by construction.
    for pair in tokens.chunks_exact(2) {
        table.insert(pair[0].clone(), pair[1].clone());
    }
    Ok(table)
}

/// Encode a table back into one shell-quoted string.
pub fn encode(table: &RouteTable) -> String {
    let mut tokens = Vec::with_capacity(table.len() * 2);
    for (path, command) in table {
        tokens.push(path.as_str());
        tokens.push(command.as_str());
    }
    shell_words::join(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> RouteTable {
        pairs
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn empty_string_decodes_to_empty_table() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn empty_table_encodes_to_empty_string() {
        assert_eq!(encode(&RouteTable::new()), "");
    }

    #[test]
    fn decode_pairs_tokens_in_order() {
        let t = decode("/date date /uptime uptime").unwrap();
        let pairs: Vec<_> = t.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
        assert_eq!(pairs, vec![("/date", "date"), ("/uptime", "uptime")]);
    }

    #[test]
    fn trailing_unpaired_token_is_dropped() {
        let t = decode("/date date /orphan").unwrap();
        assert_eq!(t.len(), 1);
        assert!(!t.contains_key("/orphan"));
    }

    #[test]
    fn quoted_commands_survive() {
        let t = decode("/hi 'echo \"hello world\"'").unwrap();
        assert_eq!(
            t.get("/hi").map(String::as_str),
            Some("echo \"hello world\"")
        );
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(decode("/hi 'echo oops").is_err());
    }

    #[test]
    fn round_trip_with_spaces_quotes_and_empty_command() {
        let routes = table(&[
            ("/date", "date"),
            ("/say", "echo 'it works'"),
            ("/blank", ""),
            ("/args", "df -h | tail -n +2"),
        ]);
        let decoded = decode(&encode(&routes)).unwrap();
        assert_eq!(decoded, routes);
    }

    #[test]
    fn encode_quotes_empty_command() {
        let t = table(&[("/blank", "")]);
        assert_eq!(encode(&t), "/blank ''");
    }

    #[test]
    fn round_trip_preserves_order() {
        let routes = table(&[("/z", "a"), ("/a", "b"), ("/m", "c")]);
        let decoded = decode(&encode(&routes)).unwrap();
        let order: Vec<_> = decoded.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["/z", "/a", "/m"]);
    }
}
