//! `<TOKEN>` substitution in format strings

use crate::error::FormatError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

/// Uppercase letters, digits and underscore between angle brackets
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[\p{Lu}\d_]+>").unwrap());

/// Replace every `<TOKEN>` in `fmt` with the value stored under its
/// lowercased name (`<TEAM_NAME>` looks up `team_name`).
///
/// A token with no value, or whose value renders as an empty string, is an
/// error rather than being left in place.
///
/// ```
/// use std::collections::BTreeMap;
/// use pltform::replace_tokens;
///
/// let values = BTreeMap::from([("team_name".to_string(), "Lions")]);
/// assert_eq!(replace_tokens("Winner: <TEAM_NAME>", &values).unwrap(), "Winner: Lions");
/// ```
pub fn replace_tokens<V: Display>(
    fmt: &str,
    values: &BTreeMap<String, V>,
) -> Result<String, FormatError> {
    let tokens: BTreeSet<&str> = TOKEN_PATTERN.find_iter(fmt).map(|m| m.as_str()).collect();

    let mut new_str = fmt.to_string();
    for token in tokens {
        let token_var = token[1..token.len() - 1].to_lowercase();
        let value = values
            .get(&token_var)
            .map(ToString::to_string)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| FormatError::MissingToken { token: token_var.clone() })?;
        new_str = new_str.replace(token, &value);
    }

    Ok(new_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::argv::ArgValue;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_single_token() {
        let out = replace_tokens("Winner: <TEAM_NAME>", &values(&[("team_name", "Lions")]));
        assert_eq!(out, Ok("Winner: Lions".to_string()));
    }

    #[test]
    fn test_repeated_and_multiple_tokens() {
        let out = replace_tokens(
            "<HOME> vs <AWAY> (<HOME> favored, week <WEEK_2>)",
            &values(&[("home", "Bears"), ("away", "Packers"), ("week_2", "7")]),
        );
        assert_eq!(out, Ok("Bears vs Packers (Bears favored, week 7)".to_string()));
    }

    #[test]
    fn test_missing_token() {
        let err = replace_tokens("<X>", &values(&[])).unwrap_err();
        assert_eq!(err, FormatError::MissingToken { token: "x".to_string() });
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_empty_value_is_missing() {
        let err = replace_tokens("<X>", &values(&[("x", "")])).unwrap_err();
        assert_eq!(err, FormatError::MissingToken { token: "x".to_string() });

        let typed = BTreeMap::from([("x".to_string(), ArgValue::Null)]);
        assert!(replace_tokens("<X>", &typed).is_err());
    }

    #[test]
    fn test_non_tokens_left_alone() {
        let input = "<lower> <Mixed> <> <HAS SPACE> a < b > c";
        assert_eq!(replace_tokens(input, &values(&[])), Ok(input.to_string()));
    }

    #[test]
    fn test_typed_values_render() {
        let typed = BTreeMap::from([
            ("week".to_string(), ArgValue::Int(3)),
            ("conf".to_string(), ArgValue::Float(0.75)),
        ]);
        assert_eq!(replace_tokens("<WEEK>:<CONF>", &typed), Ok("3:0.75".to_string()));
    }
}
