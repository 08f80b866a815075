//! `key=value` parameter parsing with scalar type inference

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{InspectError, Result};

/// A scalar parameter value inferred from a command-line literal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    /// Digits beyond `i64::MAX`
    UInt(u64),
    Float(f64),
    String(String),
}

impl ParamValue {
    /// Infer the type of a literal.
    ///
    /// Priority: `true`/`false` (any case), all-digit integer (signed, then
    /// unsigned), finite float, then the literal string unchanged.
    pub fn infer(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<i64>() {
                return Self::Int(n);
            }
            if let Ok(n) = raw.parse::<u64>() {
                return Self::UInt(n);
            }
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::Float(f),
            _ => Self::String(raw.to_string()),
        }
    }
}

/// Parameters keyed by name; a repeated key keeps its last value
pub type Params = BTreeMap<String, ParamValue>;

/// Split a single `key=value` token on its first `=`
pub fn parse_param(token: &str) -> Result<(String, ParamValue)> {
    let (key, value) = token
        .split_once('=')
        .ok_or_else(|| InspectError::InvalidParam(token.to_string()))?;
    Ok((key.to_string(), ParamValue::infer(value)))
}

/// Parse every token, failing on the first one without `=`
pub fn parse_params<S: AsRef<str>>(tokens: &[S]) -> Result<Params> {
    let mut params = Params::new();
    for token in tokens {
        let (key, value) = parse_param(token.as_ref())?;
        params.insert(key, value);
    }
    Ok(params)
}

/// Serialize parameters to the compact JSON passed on the inspector command line
pub fn to_json(params: &Params) -> Result<String> {
    Ok(serde_json::to_string(params)?)
}
