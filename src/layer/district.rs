use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use geo::{BoundingRect, Intersects, Rect};

use crate::{
    geom::perimeter,
    host::{District, DistrictSource},
    types::DistrictCode,
};

use super::MeshblockLayer;

/// Districts dissolved from the meshblocks sharing their code.
#[derive(Debug)]
struct Dissolved {
    revision: u64, // Meshblock revision the districts were built from
    districts: Vec<(Rect<f64>, District)>,
}

/// District layer derived from a `MeshblockLayer`.
///
/// Each district's geometry is the union of its meshblocks, and its measure is
/// the boundary length of that union. Dissolving is cached and redone only
/// after a meshblock changes district.
#[derive(Debug)]
pub struct DistrictLayer {
    meshblocks: Rc<MeshblockLayer>,
    cache: RefCell<Option<Dissolved>>,
}

impl DistrictLayer {
    pub fn new(meshblocks: Rc<MeshblockLayer>) -> Self {
        Self { meshblocks, cache: RefCell::new(None) }
    }

    /// Dissolve meshblocks by district code, in code order. Unassigned meshblocks are left out.
    fn dissolve(&self) -> Dissolved {
        let mut members: BTreeMap<DistrictCode, Vec<usize>> = BTreeMap::new();
        for (i, district) in self.meshblocks.assignments() {
            if let Some(code) = district { members.entry(code).or_default().push(i) }
        }

        let districts = members.into_iter()
            .filter_map(|(code, indices)| {
                let geometry = self.meshblocks.shapes().union_of(&indices)?;
                let bbox = geometry.bounding_rect()?;
                let measure = perimeter(&geometry);
                Some((bbox, District { code, geometry, measure }))
            })
            .collect();

        tracing::trace!("[DistrictLayer] dissolved at revision {}", self.meshblocks.revision());
        Dissolved { revision: self.meshblocks.revision(), districts }
    }

    /// Run `f` on the up-to-date dissolved districts.
    fn with_districts<T>(&self, f: impl FnOnce(&[(Rect<f64>, District)]) -> T) -> T {
        let mut cache = self.cache.borrow_mut();
        let stale = cache.as_ref().is_none_or(|d| d.revision != self.meshblocks.revision());
        if stale { *cache = Some(self.dissolve()) }
        f(cache.as_ref().map(|d| d.districts.as_slice()).unwrap_or_default())
    }

    /// All districts currently holding at least one meshblock.
    pub fn districts(&self) -> Vec<District> {
        self.with_districts(|districts| districts.iter().map(|(_, d)| d.clone()).collect())
    }
}

impl DistrictSource for DistrictLayer {
    fn districts_in_rect(&self, rect: Rect<f64>) -> Vec<District> {
        self.with_districts(|districts| {
            districts.iter()
                .filter(|(bbox, _)| bbox.intersects(&rect))
                .map(|(_, district)| district.clone())
                .collect()
        })
    }
}
