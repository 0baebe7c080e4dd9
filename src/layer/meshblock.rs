use std::{
    cell::{Cell, RefCell},
    sync::Arc,
};

use ahash::AHashMap;
use anyhow::{anyhow, Result};
use geo::{BoundingRect, Coord, Intersects, MultiPolygon, Point};
use thiserror::Error;

use crate::{
    geom::{nearest_boundary_point, Geometries},
    host::{Meshblock, MeshblockStore, SpatialLocator},
    snap::{Candidate, MatchKind},
    types::{DistrictCode, LayerId, MeshblockId},
};

/// Errors that can occur when constructing a `MeshblockLayer`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerError {
    #[error("duplicate meshblock id {0}")]
    DuplicateId(MeshblockId),
    #[error("meshblock {0} has an empty geometry")]
    EmptyGeometry(MeshblockId),
}

/// Input row for a `MeshblockLayer`.
#[derive(Debug, Clone)]
pub struct MeshblockRecord {
    pub id: MeshblockId,
    pub label: Arc<str>,
    pub district: Option<DistrictCode>,
    pub geometry: MultiPolygon<f64>,
}

impl MeshblockRecord {
    /// Convenience constructor; a blank `district` means unassigned.
    pub fn new(id: u64, label: impl Into<Arc<str>>, district: &str, geometry: MultiPolygon<f64>) -> Self {
        Self { id: MeshblockId(id), label: label.into(), district: DistrictCode::parse(district), geometry }
    }
}

/// A meshblock dataset held in memory, with an R-tree for cursor lookups.
///
/// District assignments are the only mutable part. They live behind a
/// `RefCell` so the layer can be shared (via `Rc`) between the editing session,
/// which writes, and the district layer, which reads.
#[derive(Debug)]
pub struct MeshblockLayer {
    layer: LayerId,
    ids: Vec<MeshblockId>,
    index: AHashMap<MeshblockId, usize>, // Map between meshblock ids and contiguous indices.
    labels: Vec<Arc<str>>,
    shapes: Geometries,
    districts: RefCell<Vec<Option<DistrictCode>>>,
    revision: Cell<u64>,         // Bumped on every district write
    repaint_requests: Cell<u64>,
}

impl MeshblockLayer {
    pub fn new(layer: LayerId, records: Vec<MeshblockRecord>) -> Result<Self, LayerError> {
        let mut index = AHashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if record.geometry.bounding_rect().is_none() { return Err(LayerError::EmptyGeometry(record.id)) }
            if index.insert(record.id, i).is_some() { return Err(LayerError::DuplicateId(record.id)) }
        }

        let mut ids = Vec::with_capacity(records.len());
        let mut labels = Vec::with_capacity(records.len());
        let mut districts = Vec::with_capacity(records.len());
        let mut shapes = Vec::with_capacity(records.len());
        for record in records {
            ids.push(record.id);
            labels.push(record.label);
            districts.push(record.district);
            shapes.push(record.geometry);
        }

        Ok(Self {
            layer,
            ids,
            index,
            labels,
            shapes: Geometries::new(shapes),
            districts: RefCell::new(districts),
            revision: Cell::new(0),
            repaint_requests: Cell::new(0),
        })
    }

    #[inline] pub fn layer_id(&self) -> LayerId { self.layer }

    /// Get the number of meshblocks.
    #[inline] pub fn len(&self) -> usize { self.ids.len() }

    /// Check if there are no meshblocks.
    #[inline] pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    /// Number of district writes so far.
    #[inline] pub fn revision(&self) -> u64 { self.revision.get() }

    /// Number of repaints requested so far.
    #[inline] pub fn repaint_requests(&self) -> u64 { self.repaint_requests.get() }

    /// Current district of a meshblock; `None` if unassigned or unknown.
    pub fn district(&self, id: MeshblockId) -> Option<DistrictCode> {
        let &i = self.index.get(&id)?;
        self.districts.borrow()[i].clone()
    }

    /// Snapshot of (shape index, district) for every meshblock.
    pub(crate) fn assignments(&self) -> Vec<(usize, Option<DistrictCode>)> {
        self.districts.borrow().iter().cloned().enumerate().collect()
    }

    #[inline] pub(crate) fn shapes(&self) -> &Geometries { &self.shapes }

    fn meshblock(&self, i: usize) -> Meshblock {
        Meshblock {
            id: self.ids[i],
            label: Arc::clone(&self.labels[i]),
            district: self.districts.borrow()[i].clone(),
            geometry: Arc::clone(self.shapes.shape(i)),
        }
    }
}

impl SpatialLocator for MeshblockLayer {
    /// Edge hits at the nearest boundary point within `tolerance`, plus area hits for
    /// meshblocks covering `point`. Sorted by distance, edges first on ties.
    fn search(&self, point: Coord<f64>, tolerance: f64) -> Vec<Candidate> {
        let cursor = Point::from(point);
        let mut candidates = Vec::new();

        for i in self.shapes.near(point, tolerance) {
            let shape = self.shapes.shape(i);
            if let Some((nearest, distance)) = nearest_boundary_point(shape, point) {
                if distance <= tolerance {
                    candidates.push(Candidate {
                        layer: self.layer,
                        meshblock: self.ids[i],
                        kind: MatchKind::Edge,
                        distance,
                        point: nearest,
                    });
                }
            }
            if shape.intersects(&cursor) {
                candidates.push(Candidate {
                    layer: self.layer,
                    meshblock: self.ids[i],
                    kind: MatchKind::Area,
                    distance: 0.0,
                    point,
                });
            }
        }

        let rank = |kind: MatchKind| if kind == MatchKind::Edge { 0 } else { 1 };
        candidates.sort_by(|a, b| {
            a.distance.total_cmp(&b.distance)
                .then_with(|| rank(a.kind).cmp(&rank(b.kind)))
                .then_with(|| a.meshblock.cmp(&b.meshblock))
        });
        candidates
    }
}

impl MeshblockStore for MeshblockLayer {
    fn meshblocks_by_ids(&self, ids: &[MeshblockId]) -> Vec<Meshblock> {
        ids.iter()
            .filter_map(|id| self.index.get(id))
            .map(|&i| self.meshblock(i))
            .collect()
    }

    fn set_district(&self, id: MeshblockId, district: &DistrictCode) -> Result<()> {
        let &i = self.index.get(&id)
            .ok_or_else(|| anyhow!("[MeshblockLayer.set_district] unknown meshblock {id}"))?;
        self.districts.borrow_mut()[i] = Some(district.clone());
        self.revision.set(self.revision.get() + 1);
        Ok(())
    }

    fn request_repaint(&self) {
        self.repaint_requests.set(self.repaint_requests.get() + 1);
    }
}
