use geo::Coord;
use smallvec::SmallVec;

use crate::{
    host::SpatialLocator,
    types::{LayerId, MeshblockId},
};

use super::{MatchFilter, UniqueBoundaryFilter};

/// Kind of geometry a locator candidate snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Vertex,
    Edge,
    Area,
    Centroid,
    MiddleOfSegment,
    LineEndpoint,
}

/// A raw hit reported by a [`SpatialLocator`].
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub layer: LayerId,
    pub meshblock: MeshblockId,
    pub kind: MatchKind,
    pub distance: f64,
    pub point: Coord<f64>, // Snapped location in map units
}

/// Kinds of hit that survive filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitKind {
    Area,
    Edge,
}

/// An accepted match: an area or edge hit within snapping distance.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMatch {
    pub layer: LayerId,
    pub meshblock: MeshblockId,
    pub kind: HitKind,
    pub distance: f64,
    pub point: Coord<f64>,
}

impl EdgeMatch {
    fn from_candidate(candidate: Candidate) -> Option<Self> {
        let kind = match candidate.kind {
            MatchKind::Area => HitKind::Area,
            MatchKind::Edge => HitKind::Edge,
            _ => return None,
        };
        Some(Self {
            layer: candidate.layer,
            meshblock: candidate.meshblock,
            kind,
            distance: candidate.distance,
            point: candidate.point,
        })
    }
}

/// Matches found under the cursor; rarely more than a handful.
pub type Matches = SmallVec<[EdgeMatch; 4]>;

/// Keep the candidates `filter` accepts, in search order.
pub fn filter_and_dedup(candidates: Vec<Candidate>, filter: &mut impl MatchFilter) -> Matches {
    candidates.into_iter()
        .filter(|candidate| filter.accept(candidate))
        .filter_map(EdgeMatch::from_candidate)
        .collect()
}

/// Resolves a map point to at most one match per meshblock near it.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryMatcher {
    snap_distance: f64,
}

impl BoundaryMatcher {
    pub fn new(snap_distance: f64) -> Self { Self { snap_distance } }

    #[inline] pub fn snap_distance(&self) -> f64 { self.snap_distance }

    /// Query `locator` around `point` and keep unique area/edge hits within snapping distance.
    pub fn find_matches(&self, locator: &impl SpatialLocator, point: Coord<f64>) -> Matches {
        let candidates = locator.search(point, self.snap_distance);
        filter_and_dedup(candidates, &mut UniqueBoundaryFilter::new(self.snap_distance))
    }
}
