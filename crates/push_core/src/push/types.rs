use crate::error::{PushError, PushResult};
use crate::profile::{Location, SystemProfile};
use crate::record::{fields, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Push type tag as it appears in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PushKind {
    GenderPush,
    GenderAgePush,
    LocationAgePush,
    LocationPush,
    TechPush,
    AgeSpecificPush,
}

impl PushKind {
    pub const ALL: [PushKind; 6] = [
        PushKind::GenderPush,
        PushKind::GenderAgePush,
        PushKind::LocationAgePush,
        PushKind::LocationPush,
        PushKind::TechPush,
        PushKind::AgeSpecificPush,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PushKind::GenderPush => "GenderPush",
            PushKind::GenderAgePush => "GenderAgePush",
            PushKind::LocationAgePush => "LocationAgePush",
            PushKind::LocationPush => "LocationPush",
            PushKind::TechPush => "TechPush",
            PushKind::AgeSpecificPush => "AgeSpecificPush",
        }
    }
}

impl fmt::Display for PushKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PushKind {
    type Err = PushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PushKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PushError::UnknownType(s.to_string()))
    }
}

/// Matches on exact gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderPush {
    pub gender: String,
}

impl GenderPush {
    pub fn from_record(record: &Record) -> PushResult<Self> {
        Ok(Self { gender: record.require_str(fields::GENDER)?.to_string() })
    }

    pub fn matches(&self, system: &SystemProfile) -> bool {
        system.gender == self.gender
    }
}

/// Matches on gender plus a minimum age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderAgePush {
    pub gender: String,
    pub min_age: i32,
}

impl GenderAgePush {
    pub fn from_record(record: &Record) -> PushResult<Self> {
        Ok(Self {
            gender: record.require_str(fields::GENDER)?.to_string(),
            min_age: record.require_i32(fields::AGE)?,
        })
    }

    pub fn matches(&self, system: &SystemProfile) -> bool {
        system.gender == self.gender && system.age >= self.min_age
    }
}

/// Matches recipients inside a circle until the expiry timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPush {
    pub location: Location,
    pub radius: i32,
    pub expiry: i64,
}

impl LocationPush {
    pub fn from_record(record: &Record) -> PushResult<Self> {
        Ok(Self {
            location: Location::from_record(record)?,
            radius: record.require_i32(fields::RADIUS)?,
            expiry: record.require_i64(fields::EXPIRY_DATE)?,
        })
    }

    pub fn matches(&self, system: &SystemProfile) -> bool {
        system.time <= self.expiry && system.location.within(&self.location, self.radius)
    }
}

/// Matches recipients inside a circle above a minimum age.
///
/// Unlike [`LocationPush`] there is no expiry: the time of the system is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAgePush {
    pub location: Location,
    pub radius: i32,
    pub min_age: i32,
}

impl LocationAgePush {
    pub fn from_record(record: &Record) -> PushResult<Self> {
        Ok(Self {
            location: Location::from_record(record)?,
            radius: record.require_i32(fields::RADIUS)?,
            min_age: record.require_i32(fields::AGE)?,
        })
    }

    pub fn matches(&self, system: &SystemProfile) -> bool {
        system.age >= self.min_age && system.location.within(&self.location, self.radius)
    }
}

/// Matches systems whose OS version is not newer than the push supports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechPush {
    pub max_os_version: i32,
}

impl TechPush {
    pub fn from_record(record: &Record) -> PushResult<Self> {
        Ok(Self { max_os_version: record.require_i32(fields::OS_VERSION)? })
    }

    pub fn matches(&self, system: &SystemProfile) -> bool {
        system.os_version <= self.max_os_version
    }
}

/// Matches on minimum age until the expiry timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeSpecificPush {
    pub min_age: i32,
    pub expiry: i64,
}

impl AgeSpecificPush {
    pub fn from_record(record: &Record) -> PushResult<Self> {
        Ok(Self {
            min_age: record.require_i32(fields::AGE)?,
            expiry: record.require_i64(fields::EXPIRY_DATE)?,
        })
    }

    pub fn matches(&self, system: &SystemProfile) -> bool {
        system.time <= self.expiry && system.age >= self.min_age
    }
}

/// Targeting predicate of a push, one variant per push type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Targeting {
    GenderPush(GenderPush),
    GenderAgePush(GenderAgePush),
    LocationAgePush(LocationAgePush),
    LocationPush(LocationPush),
    TechPush(TechPush),
    AgeSpecificPush(AgeSpecificPush),
}

impl Targeting {
    pub fn kind(&self) -> PushKind {
        match self {
            Targeting::GenderPush(_) => PushKind::GenderPush,
            Targeting::GenderAgePush(_) => PushKind::GenderAgePush,
            Targeting::LocationAgePush(_) => PushKind::LocationAgePush,
            Targeting::LocationPush(_) => PushKind::LocationPush,
            Targeting::TechPush(_) => PushKind::TechPush,
            Targeting::AgeSpecificPush(_) => PushKind::AgeSpecificPush,
        }
    }

    pub fn matches(&self, system: &SystemProfile) -> bool {
        match self {
            Targeting::GenderPush(p) => p.matches(system),
            Targeting::GenderAgePush(p) => p.matches(system),
            Targeting::LocationAgePush(p) => p.matches(system),
            Targeting::LocationPush(p) => p.matches(system),
            Targeting::TechPush(p) => p.matches(system),
            Targeting::AgeSpecificPush(p) => p.matches(system),
        }
    }
}

/// A candidate notification: display text plus its targeting predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Push {
    pub text: String,
    pub targeting: Targeting,
}

impl Push {
    pub fn new(text: impl Into<String>, targeting: Targeting) -> Self {
        Self { text: text.into(), targeting }
    }

    /// Build a push from its full record (`type`, `text` and the variant fields)
    pub fn from_record(record: &Record) -> PushResult<Self> {
        let type_name = record.require_str(fields::TYPE)?;
        super::registry::create(type_name, record)
    }

    pub fn kind(&self) -> PushKind {
        self.targeting.kind()
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn matches(&self, system: &SystemProfile) -> bool {
        self.targeting.matches(system)
    }
}
