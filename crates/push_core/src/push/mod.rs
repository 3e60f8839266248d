pub mod registry;
pub mod types;


pub use registry::{create, type_names, Constructor};
pub use types::{
    AgeSpecificPush, GenderAgePush, GenderPush, LocationAgePush, LocationPush, Push, PushKind,
    Targeting, TechPush,
};
