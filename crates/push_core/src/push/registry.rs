//! Push type registry
//!
//! Static table from the `type` tag to the constructor of that variant.
//! Built once on first use and never mutated afterwards.

use super::types::*;
use crate::error::{PushError, PushResult};
use crate::record::{fields, Record};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Builds the targeting predicate of one variant from its record
pub type Constructor = fn(&Record) -> PushResult<Targeting>;

static REGISTRY: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, Constructor> = HashMap::new();
    table.insert(PushKind::GenderPush.as_str(), |r| {
        GenderPush::from_record(r).map(Targeting::GenderPush)
    });
    table.insert(PushKind::GenderAgePush.as_str(), |r| {
        GenderAgePush::from_record(r).map(Targeting::GenderAgePush)
    });
    table.insert(PushKind::LocationAgePush.as_str(), |r| {
        LocationAgePush::from_record(r).map(Targeting::LocationAgePush)
    });
    table.insert(PushKind::LocationPush.as_str(), |r| {
        LocationPush::from_record(r).map(Targeting::LocationPush)
    });
    table.insert(PushKind::TechPush.as_str(), |r| {
        TechPush::from_record(r).map(Targeting::TechPush)
    });
    table.insert(PushKind::AgeSpecificPush.as_str(), |r| {
        AgeSpecificPush::from_record(r).map(Targeting::AgeSpecificPush)
    });
    table
});

/// Look up a constructor by tag
pub fn constructor(type_name: &str) -> Option<Constructor> {
    REGISTRY.get(type_name).copied()
}

/// Registered tags, sorted
pub fn type_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Create a fully initialised push of the variant named by `type_name`.
///
/// `record` must carry `text` and every field the variant requires.
pub fn create(type_name: &str, record: &Record) -> PushResult<Push> {
    let build = constructor(type_name).ok_or_else(|| PushError::UnknownType(type_name.to_string()))?;
    let text = record.require_str(fields::TEXT)?;
    let targeting = build(record)?;
    log::debug!("Created {} '{}'", type_name, text);
    Ok(Push::new(text, targeting))
}
