//! Land registry core
//!
//! Domain model and aggregation logic for land-ownership records:
//! - `LandDetails`, `LandOwner`, `PropertyDetails`, `Witness` and the
//!   owner link rows, plus the flattened `CompleteLandDetailsDto`
//! - The scalar mapper between records and transfer objects
//! - Gateway traits any persistence backend implements, with an in-memory
//!   registry for tests and embedding
//! - `LandDetailsService`, which hydrates and persists whole aggregates
//! - Error and logging facilities shared by the other crates

pub mod dto;
pub mod errors;
pub mod gateway;
pub mod logging_facility;
pub mod mapping;
pub mod memory;
pub mod model;
pub mod service;

/// Shared correlation, redaction and schema types
pub use landreg_core_types as core_types;

// Re-export commonly used types
pub use dto::CompleteLandDetailsDto;
pub use errors::{ExError, ExErrorKind, RegistryError, Result};
pub use gateway::{Gateway, LandDetailsScoped, Registry, Transactional};
pub use memory::MemoryRegistry;
pub use model::{EntityId, LandDetails, LandDetailsLandOwner, LandOwner, PropertyDetails, Witness};
pub use service::{LandDetailsService, ServiceOptions};
