//! Key/value records
//!
//! Every block of the input protocol is a set of `<fieldName> <value>` lines.
//! A `Record` holds one such block with the raw string values; typed
//! accessors parse on demand and fail with the offending field name.

use crate::error::{PushError, PushResult};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Field names shared by the system profile and push records
pub mod fields {
    pub const TEXT: &str = "text";
    pub const TYPE: &str = "type";
    pub const GENDER: &str = "gender";
    pub const AGE: &str = "age";
    pub const RADIUS: &str = "radius";
    pub const X_COORD: &str = "x_coord";
    pub const Y_COORD: &str = "y_coord";
    pub const EXPIRY_DATE: &str = "expiry_date";
    pub const OS_VERSION: &str = "os_version";
    pub const TIME: &str = "time";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a protocol line into `(name, value)`.
    ///
    /// The name ends at the first whitespace; the value is the trimmed rest of
    /// the line, so display texts may contain spaces. Unlike token-only
    /// splitting, `gender M F` yields `"M F"`, not `"M"`. Returns `None` when
    /// either part is empty.
    pub fn split_line(line: &str) -> Option<(&str, &str)> {
        let line = line.trim();
        let (name, value) = line.split_once(char::is_whitespace)?;
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            return None;
        }
        Some((name, value))
    }

    /// Parse one protocol line and store it. Later duplicates overwrite.
    pub fn push_line(&mut self, line_no: usize, line: &str) -> PushResult<()> {
        let (name, value) = Self::split_line(line).ok_or_else(|| PushError::MalformedLine {
            line_no,
            line: line.to_string(),
        })?;
        self.insert(name, value);
        Ok(())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn require_str(&self, name: &str) -> PushResult<&str> {
        self.get(name).ok_or_else(|| PushError::missing(name))
    }

    pub fn require_i32(&self, name: &str) -> PushResult<i32> {
        self.require_parsed(name)
    }

    pub fn require_i64(&self, name: &str) -> PushResult<i64> {
        self.require_parsed(name)
    }

    pub fn require_f32(&self, name: &str) -> PushResult<f32> {
        self.require_parsed(name)
    }

    fn require_parsed<T>(&self, name: &str) -> PushResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.require_str(name)?;
        raw.parse::<T>().map_err(|e| PushError::InvalidValue {
            field: name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
