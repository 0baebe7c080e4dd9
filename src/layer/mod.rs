//! In-memory meshblock and district datasets implementing the host traits.

mod district;
mod meshblock;

pub use district::DistrictLayer;
pub use meshblock::{LayerError, MeshblockLayer, MeshblockRecord};
