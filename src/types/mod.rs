mod district;
mod ids;

pub use district::{DistrictCode, DistrictPair};
pub use ids::{LayerId, MeshblockId};
