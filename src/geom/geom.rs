use std::sync::Arc;

use geo::{BooleanOps, BoundingRect, Coord, MultiPolygon};
use rstar::{RTree, AABB};

use super::bbox::BoundingBox;

/// An indexed collection of MultiPolygons, queryable by window.
#[derive(Debug, Clone)]
pub(crate) struct Geometries {
    shapes: Vec<Arc<MultiPolygon<f64>>>,
    rtree: RTree<BoundingBox>,
}

impl Geometries {
    /// Construct a Geometries object from a vector of MultiPolygons.
    /// Shapes without a bounding rectangle (empty geometries) are stored but never indexed.
    pub(crate) fn new(shapes: impl IntoIterator<Item = MultiPolygon<f64>>) -> Self {
        let shapes = shapes.into_iter().map(Arc::new).collect::<Vec<_>>();
        Self {
            rtree: RTree::bulk_load(
                shapes.iter().enumerate()
                    .filter_map(|(i, shape)| shape.bounding_rect().map(|bbox| BoundingBox::new(i, bbox)))
                    .collect()
            ),
            shapes,
        }
    }

    /// Get a shared handle to a single MultiPolygon.
    #[inline] pub(crate) fn shape(&self, idx: usize) -> &Arc<MultiPolygon<f64>> { &self.shapes[idx] }

    /// Indices of shapes whose bounding box lies within `distance` of `point`.
    pub(crate) fn near(&self, point: Coord<f64>, distance: f64) -> impl Iterator<Item = usize> + '_ {
        let envelope = AABB::from_corners(
            [point.x - distance, point.y - distance],
            [point.x + distance, point.y + distance],
        );
        self.rtree.locate_in_envelope_intersecting(&envelope).map(|bbox| bbox.idx())
    }

    /// Compute the union of the selected MultiPolygons into a single MultiPolygon.
    pub(crate) fn union_of(&self, indices: &[usize]) -> Option<MultiPolygon<f64>> {
        indices.iter()
            .map(|&i| MultiPolygon::clone(&self.shapes[i]))
            .reduce(|a, b| a.union(&b))
    }
}
