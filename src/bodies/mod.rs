//! Body descriptor tables and the runtime registry built from them.

pub mod data;
pub mod registry;

pub use data::{BodyDescriptor, BodyKind, InitialAngle, SOLAR_SYSTEM};
pub use registry::{Body, BodyId, BodyRegistry, RegistryError};
