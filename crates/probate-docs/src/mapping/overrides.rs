use super::coerce::{flag_from_value, money_from_value, parse_date, text_from_value};
use super::schedule::{assets_from_override, secured_assets_from_override};
use crate::estate::{Asset, Money, SecuredAsset};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Hand-entered values keyed by dotted model path (`deceased.first_name`,
/// `filing.certified_copies`, `assets.real_property`, ...).
///
/// An override that is present and well-formed always wins over derived
/// data. A malformed value is treated as absent so the field falls back to
/// derivation; `null` is likewise absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualOverrides(BTreeMap<String, Value>);

impl ManualOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    fn coerce<T>(&self, key: &str, convert: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        let value = self.raw(key)?;
        let converted = convert(value);
        if converted.is_none() {
            warn!(key, "ignoring malformed manual override");
        }
        converted
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.coerce(key, text_from_value)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.coerce(key, flag_from_value)
    }

    pub fn count(&self, key: &str) -> Option<u32> {
        self.coerce(key, |value| match value {
            Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(raw) => raw.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.coerce(key, |value| value.as_str().and_then(parse_date))
    }

    pub fn money(&self, key: &str) -> Option<Money> {
        self.coerce(key, money_from_value)
    }

    /// Asset lines with dollar amounts. Any negative or malformed amount
    /// discards the whole list.
    pub fn secured_assets(&self, key: &str) -> Option<Vec<SecuredAsset>> {
        self.coerce(key, secured_assets_from_override)
    }

    pub fn assets(&self, key: &str) -> Option<Vec<Asset>> {
        self.coerce(key, assets_from_override)
    }

    /// Structured values (lists, nested records, enums) deserialized verbatim.
    pub fn value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.coerce(key, |value| serde_json::from_value(value.clone()).ok())
    }
}
