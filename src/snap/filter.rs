use smallvec::SmallVec;

use crate::types::{LayerId, MeshblockId};

use super::{Candidate, MatchKind};

/// Decides whether a raw locator candidate becomes a match.
pub trait MatchFilter {
    fn accept(&mut self, candidate: &Candidate) -> bool;
}

/// Accepts area and edge hits within `max_distance`, at most once per meshblock.
///
/// A cursor resting on a vertex shared by many meshblock edges produces many
/// candidates for the same meshblock; only the first one is kept.
#[derive(Debug, Clone)]
pub struct UniqueBoundaryFilter {
    max_distance: f64,
    seen: SmallVec<[(LayerId, MeshblockId); 4]>,
}

impl UniqueBoundaryFilter {
    pub fn new(max_distance: f64) -> Self {
        Self { max_distance, seen: SmallVec::new() }
    }
}

impl MatchFilter for UniqueBoundaryFilter {
    fn accept(&mut self, candidate: &Candidate) -> bool {
        if !matches!(candidate.kind, MatchKind::Area | MatchKind::Edge) { return false }
        if !(candidate.distance <= self.max_distance) { return false }

        let key = (candidate.layer, candidate.meshblock);
        if self.seen.contains(&key) { return false }
        self.seen.push(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use geo::Coord;

    use super::*;

    fn candidate(meshblock: u64, kind: MatchKind, distance: f64) -> Candidate {
        Candidate {
            layer: LayerId(0),
            meshblock: MeshblockId(meshblock),
            kind,
            distance,
            point: Coord { x: 0.0, y: 0.0 },
        }
    }

    #[test]
    fn rejects_other_kinds() {
        let mut filter = UniqueBoundaryFilter::new(10.0);
        assert!(!filter.accept(&candidate(1, MatchKind::Vertex, 0.0)));
        assert!(!filter.accept(&candidate(1, MatchKind::Centroid, 0.0)));
        assert!(filter.accept(&candidate(1, MatchKind::Edge, 0.0)));
    }

    #[test]
    fn rejects_beyond_threshold() {
        let mut filter = UniqueBoundaryFilter::new(10.0);
        assert!(!filter.accept(&candidate(1, MatchKind::Edge, 10.5)));
        assert!(!filter.accept(&candidate(1, MatchKind::Edge, f64::NAN)));
        assert!(filter.accept(&candidate(1, MatchKind::Edge, 10.0)));
    }

    #[test]
    fn rejects_second_hit_for_same_meshblock() {
        let mut filter = UniqueBoundaryFilter::new(10.0);
        assert!(filter.accept(&candidate(1, MatchKind::Edge, 1.0)));
        assert!(!filter.accept(&candidate(1, MatchKind::Area, 0.0)));
        assert!(filter.accept(&candidate(2, MatchKind::Area, 0.0)));
    }

    #[test]
    fn same_id_on_other_layer_is_distinct() {
        let mut filter = UniqueBoundaryFilter::new(10.0);
        let mut other = candidate(1, MatchKind::Edge, 1.0);
        other.layer = LayerId(1);
        assert!(filter.accept(&candidate(1, MatchKind::Edge, 1.0)));
        assert!(filter.accept(&other));
    }
}
