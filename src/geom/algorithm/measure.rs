use geo::{BooleanOps, Closest, ClosestPoint, Coord, Distance, Euclidean, Length, LineString, MultiPolygon, Point, Rect};

/// Iterate over every ring (exteriors and holes) of a MultiPolygon.
fn rings(shape: &MultiPolygon<f64>) -> impl Iterator<Item = &LineString<f64>> {
    shape.0.iter().flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
}

/// Nearest point on any ring of `shape` to `p`, with its distance.
/// Returns `None` for an empty geometry.
pub(crate) fn nearest_boundary_point(shape: &MultiPolygon<f64>, p: Coord<f64>) -> Option<(Coord<f64>, f64)> {
    let origin = Point::from(p);
    rings(shape)
        .filter_map(|ring| match ring.closest_point(&origin) {
            Closest::Intersection(q) | Closest::SinglePoint(q) => Some(q),
            Closest::Indeterminate => None,
        })
        .map(|q| (q.0, Euclidean.distance(origin, q)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Total boundary length of a MultiPolygon, holes included.
pub(crate) fn perimeter(shape: &MultiPolygon<f64>) -> f64 {
    rings(shape).map(|ring| Euclidean.length(ring)).sum()
}

/// Clip a MultiPolygon to a rectangle. Parts entirely outside `rect` are dropped.
pub(crate) fn clip_to_rect(shape: &MultiPolygon<f64>, rect: Rect<f64>) -> MultiPolygon<f64> {
    shape.intersection(&MultiPolygon::new(vec![rect.to_polygon()]))
}
