//! Forgiving cell deserializers for spreadsheet-exported rows.
//!
//! Spreadsheet exports are loose about scalar types: years come out as
//! `2001.0`, numbers end up in text columns and blank cells are either
//! missing, `null` or `""`. These helpers coerce just enough for joins and
//! groupings to behave.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn coerce_int(value: &Value) -> Result<Option<i64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
                _ => Err(format!("expected an integer, got {}", n)),
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(Some(i));
            }
            match trimmed.parse::<f64>() {
                Ok(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
                _ => Err(format!("expected an integer, got \"{}\"", s)),
            }
        }
        other => Err(format!("expected an integer, got {}", other)),
    }
}

fn coerce_text(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_owned()))
            }
        }
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(Some(i.to_string())),
            (None, Some(f)) if f.fract() == 0.0 => Ok(Some((f as i64).to_string())),
            _ => Ok(Some(n.to_string())),
        },
        Value::Bool(true) => Ok(Some("Yes".to_owned())),
        Value::Bool(false) => Ok(Some("No".to_owned())),
        other => Err(format!("expected a text value, got {}", other)),
    }
}

pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    coerce_int(&value)
        .map_err(D::Error::custom)?
        .ok_or_else(|| D::Error::custom("expected an integer, got a blank cell"))
}

fn coerce_opt_i32(value: &Value) -> Result<Option<i32>, String> {
    match coerce_int(value)? {
        None => Ok(None),
        Some(i) => i32::try_from(i)
            .map(Some)
            .map_err(|_| format!("{} is out of range", i)),
    }
}

/// Cells that do not coerce load as blanks. The loader reports them using
/// [`is_valid_int`].
pub fn opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_opt_i32(&value).ok().flatten())
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    coerce_text(&value)
        .map_err(D::Error::custom)?
        .ok_or_else(|| D::Error::custom("expected a text value, got a blank cell"))
}

/// Cells that do not coerce load as blanks. The loader reports them using
/// [`is_valid_text`].
pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value).ok().flatten())
}

pub fn is_valid_int(value: &Value) -> bool {
    coerce_opt_i32(value).is_ok()
}

pub fn is_valid_text(value: &Value) -> bool {
    coerce_text(value).is_ok()
}

/// True for rows that are entirely blank, which spreadsheet exports emit
/// for trailing empty lines.
pub fn is_blank_row(row: &Value) -> bool {
    match row {
        Value::Object(map) => map.values().all(|v| match v {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        }),
        Value::Null => true,
        _ => false,
    }
}
