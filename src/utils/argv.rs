//! argv-style argument parsing
//!
//! Splits a token list into bare arguments followed by `key=value` keyword
//! arguments, casting every value to the most specific type it fits.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A typecast command-line value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Str(String),
}

impl ArgValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Null renders as the empty string.
impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Int(i) => write!(f, "{i}"),
            ArgValue::Float(x) => write!(f, "{x}"),
            ArgValue::Bool(b) => write!(f, "{b}"),
            ArgValue::Null => Ok(()),
            ArgValue::Str(s) => f.write_str(s),
        }
    }
}

/// Cast a raw token to its typed value.
///
/// Precedence: integer, float, boolean (`false/f/no/n`, `true/t/yes/y`),
/// null (`null/none/nil`), then the string itself. The empty string is null.
pub fn typecast(val: &str) -> ArgValue {
    if is_integer(val) {
        // digits that overflow i64 are still numeric
        return match val.parse::<i64>() {
            Ok(i) => ArgValue::Int(i),
            Err(_) => val.parse::<f64>().map(ArgValue::Float).unwrap_or_else(|_| str_value(val)),
        };
    }
    if is_float(val) {
        if let Ok(x) = val.parse::<f64>() {
            return ArgValue::Float(x);
        }
    }

    match val.to_lowercase().as_str() {
        "false" | "f" | "no" | "n" => ArgValue::Bool(false),
        "true" | "t" | "yes" | "y" => ArgValue::Bool(true),
        "null" | "none" | "nil" => ArgValue::Null,
        _ => str_value(val),
    }
}

fn str_value(val: &str) -> ArgValue {
    if val.is_empty() {
        ArgValue::Null
    } else {
        ArgValue::Str(val.to_string())
    }
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Optional sign followed by ASCII digits only.
fn is_integer(s: &str) -> bool {
    all_digits(strip_sign(s))
}

/// Optional sign, digits with at most one `.`, optional exponent.
/// At least one mantissa digit is required; `inf`/`nan` are not numeric.
fn is_float(s: &str) -> bool {
    let body = strip_sign(s);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => {
            (int.is_empty() || all_digits(int))
                && (frac.is_empty() || all_digits(frac))
                && !(int.is_empty() && frac.is_empty())
        }
        None => all_digits(mantissa),
    };

    mantissa_ok && exponent.map_or(true, |exp| all_digits(strip_sign(exp)))
}

/// Parse tokens into positional `args` and keyword `kwargs`.
///
/// Tokens before the first one containing `=` are positional. From that
/// token on everything is a keyword argument, split on the first `=`; a later
/// token without `=` gets an empty (null) value. Keys are kept verbatim and a
/// repeated key keeps its last value.
pub fn parse_argv<S: AsRef<str>>(argv: &[S]) -> (Vec<ArgValue>, BTreeMap<String, ArgValue>) {
    let mut args = Vec::new();
    let mut kwargs = BTreeMap::new();
    let mut args_done = false;

    for arg in argv {
        let arg = arg.as_ref();
        if !args_done {
            if !arg.contains('=') {
                args.push(typecast(arg));
                continue;
            }
            args_done = true;
        }
        let (kw, val) = arg.split_once('=').unwrap_or((arg, ""));
        kwargs.insert(kw.to_string(), typecast(val));
    }

    (args, kwargs)
}
