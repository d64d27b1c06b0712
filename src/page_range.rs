use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Zero-based page indices resolved from `--pages` tokens, in order of first
/// appearance. Overlapping ranges leave duplicates in place; consumers filter
/// by membership, so duplicates are harmless.
///
/// Indices are not checked against any document here. Operations iterate the
/// document's real pages and test membership, which makes out-of-range
/// indices inert by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndexSet {
    indices: Vec<usize>,
}

impl PageIndexSet {
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[cfg(test)]
    fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

fn range_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)-(\d+)").expect("literal pattern"))
}

/// Parse one token into zero-based indices.
///
/// A token is either a single 1-based page number ("7") or an inclusive
/// 1-based range ("2-5"). The range form is recognized by its first
/// `digits-digits` occurrence anywhere in the token. Reversed bounds are
/// rejected rather than silently producing nothing.
pub fn parse_token(token: &str) -> Result<Vec<usize>> {
    let invalid = || Error::InvalidRangeFormat {
        token: token.to_string(),
    };

    if let Some(caps) = range_pattern().captures(token) {
        let lo: usize = caps[1].parse().map_err(|_| invalid())?;
        let hi: usize = caps[2].parse().map_err(|_| invalid())?;
        if lo < 1 || hi < lo {
            return Err(invalid());
        }
        Ok((lo - 1..hi).collect())
    } else {
        let n: usize = token.trim().parse().map_err(|_| invalid())?;
        if n < 1 {
            return Err(invalid());
        }
        Ok(vec![n - 1])
    }
}

/// Resolve a list of tokens into one flat PageIndexSet.
///
/// Tokens are parsed in order and their indices concatenated; the first
/// invalid token aborts resolution. An empty token list resolves to an empty
/// set.
pub fn resolve(tokens: &[String]) -> Result<PageIndexSet> {
    let mut indices = Vec::new();
    for token in tokens {
        indices.extend(parse_token(token)?);
    }
    Ok(PageIndexSet { indices })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_token() {
        assert_eq!(parse_token("2-5").unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(parse_token("6").unwrap(), vec![5]);
    }

    #[test]
    fn test_first_page() {
        assert_eq!(parse_token("1").unwrap(), vec![0]);
        assert_eq!(parse_token("1-1").unwrap(), vec![0]);
    }

    #[test]
    fn test_resolve_multiple_tokens() {
        let set = resolve(&["2-5".to_string(), "6".to_string()]).unwrap();
        assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_resolve_keeps_duplicates() {
        let set = resolve(&["1-3".to_string(), "2-4".to_string()]).unwrap();
        assert_eq!(set.as_slice(), &[0, 1, 2, 1, 2, 3]);
        assert!(set.contains(1));
        assert!(set.contains(3));
        assert!(!set.contains(4));
    }

    #[test]
    fn test_resolve_empty() {
        let set = resolve(&[]).unwrap();
        assert!(set.as_slice().is_empty());
    }

    #[test]
    fn test_non_numeric_token() {
        assert!(matches!(
            parse_token("abc"),
            Err(Error::InvalidRangeFormat { token }) if token == "abc"
        ));
    }

    #[test]
    fn test_bare_dashes() {
        assert!(parse_token("--").is_err());
    }

    #[test]
    fn test_page_zero() {
        assert!(parse_token("0").is_err());
        assert!(parse_token("0-3").is_err());
    }

    #[test]
    fn test_reversed_range() {
        assert!(parse_token("5-2").is_err());
    }

    #[test]
    fn test_resolve_aborts_on_first_invalid() {
        let err = resolve(&["1-3".to_string(), "x".to_string(), "5".to_string()]);
        assert!(matches!(
            err,
            Err(Error::InvalidRangeFormat { token }) if token == "x"
        ));
    }
}
