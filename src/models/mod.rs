pub mod draft;
pub mod field;
pub mod metrics;
pub mod tier;
pub mod workstation;

pub use draft::WorkstationDraft;
pub use field::Field;
pub use metrics::Metrics;
pub use tier::Tier;
pub use workstation::{WorkstationId, WorkstationInput, WorkstationRecord};
