//! # push_core - Push targeting model
//!
//! Recipient system profile, the six push variants with their targeting
//! predicates, and the registry that builds a push from its `type` tag and
//! key/value record.
//!
//! ## Push variants
//! - `GenderPush`: gender equals
//! - `GenderAgePush`: gender equals, age at least
//! - `LocationPush`: not expired, within radius
//! - `LocationAgePush`: age at least, within radius (no expiry)
//! - `TechPush`: OS version at most
//! - `AgeSpecificPush`: not expired, age at least

pub mod error;
pub mod evaluation;
pub mod profile;
pub mod push;
pub mod record;

pub use error::{PushError, PushResult};
pub use evaluation::{evaluate, Evaluation, NO_MATCH_SENTINEL};
pub use profile::{Location, SystemProfile, SYSTEM_FIELD_COUNT};
pub use push::{Push, PushKind, Targeting};
pub use record::{fields, Record};
