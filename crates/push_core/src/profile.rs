//! Recipient system profile

use crate::error::PushResult;
use crate::record::{fields, Record};
use serde::{Deserialize, Serialize};

/// Number of `<fieldName> <value>` lines describing the system profile
pub const SYSTEM_FIELD_COUNT: usize = 6;

/// 2D position in the plane used for location targeting
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f32,
    pub y: f32,
}

impl Location {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Read `x_coord` / `y_coord` from a record
    pub fn from_record(record: &Record) -> PushResult<Self> {
        Ok(Self {
            x: record.require_f32(fields::X_COORD)?,
            y: record.require_f32(fields::Y_COORD)?,
        })
    }

    /// Euclidean distance, single precision
    pub fn distance_to(&self, other: &Location) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Non-strict: a point exactly on the circle is inside.
    pub fn within(&self, center: &Location, radius: i32) -> bool {
        self.distance_to(center) <= radius as f32
    }
}

/// Attributes of the recipient that every push predicate is evaluated against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemProfile {
    pub time: i64,
    pub age: i32,
    pub gender: String,
    pub os_version: i32,
    pub location: Location,
}

impl SystemProfile {
    pub fn from_record(record: &Record) -> PushResult<Self> {
        let profile = Self {
            time: record.require_i64(fields::TIME)?,
            age: record.require_i32(fields::AGE)?,
            gender: record.require_str(fields::GENDER)?.to_string(),
            os_version: record.require_i32(fields::OS_VERSION)?,
            location: Location::from_record(record)?,
        };
        log::debug!("System profile: {:?}", profile);
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PushError;

    fn system_record() -> Record {
        [
            ("time", "100"),
            ("age", "30"),
            ("gender", "M"),
            ("os_version", "5"),
            ("x_coord", "0"),
            ("y_coord", "0"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_from_record() {
        let system = SystemProfile::from_record(&system_record()).unwrap();
        assert_eq!(system.time, 100);
        assert_eq!(system.age, 30);
        assert_eq!(system.gender, "M");
        assert_eq!(system.os_version, 5);
        assert_eq!(system.location, Location::new(0.0, 0.0));
    }

    #[test]
    fn test_from_record_missing_field() {
        let record: Record = [("time", "1"), ("age", "1")].into_iter().collect();
        let err = SystemProfile::from_record(&record).unwrap_err();
        assert!(matches!(err, PushError::MissingField { ref field } if field == "gender"));
    }

    #[test]
    fn test_from_record_bad_coordinate() {
        let mut record = system_record();
        record.insert("y_coord", "north");
        let err = SystemProfile::from_record(&record).unwrap_err();
        assert!(matches!(err, PushError::InvalidValue { ref field, .. } if field == "y_coord"));
    }

    #[test]
    fn test_distance() {
        let origin = Location::new(0.0, 0.0);
        let p = Location::new(3.0, 4.0);
        assert_eq!(origin.distance_to(&p), 5.0);
        assert_eq!(p.distance_to(&origin), 5.0);
        assert!(p.within(&origin, 5));
        assert!(!p.within(&origin, 4));
    }

    #[test]
    fn test_within_negative_radius_never_matches() {
        let p = Location::new(1.0, 1.0);
        assert!(!p.within(&p, -1));
        assert!(p.within(&p, 0));
    }
}
