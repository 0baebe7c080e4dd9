use std::{cmp::Ordering, collections::BinaryHeap, f64::consts::SQRT_2};

use geo::{Area, BoundingRect, Centroid, Coord, Distance, Euclidean, Intersects, MultiPolygon, Point, Polygon};

/// Upper bound on the number of cells examined for a single polygon.
const MAX_CELLS: usize = 100_000;

/// Signed distance from `p` to the boundary of `polygon`: positive inside, negative outside.
fn signed_distance(p: Coord<f64>, polygon: &Polygon<f64>) -> f64 {
    let point = Point::from(p);
    let dist = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| Euclidean.distance(&point, ring))
        .fold(f64::INFINITY, f64::min);
    if polygon.intersects(&point) { dist } else { -dist }
}

/// A square cell of the search grid.
#[derive(Clone, Copy)]
struct Cell {
    center: Coord<f64>,
    half: f64,     // half the cell width
    dist: f64,     // signed distance from center to polygon boundary
    potential: f64, // best distance achievable anywhere in the cell
}

impl Cell {
    fn new(center: Coord<f64>, half: f64, polygon: &Polygon<f64>) -> Self {
        let dist = signed_distance(center, polygon);
        Self { center, half, dist, potential: dist + half * SQRT_2 }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Cell {}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on potential so the most promising cell pops first.
        self.potential.total_cmp(&other.potential)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

/// Pole of inaccessibility of a single polygon, with its distance to the boundary.
/// Grid refinement stops once no cell can improve the best distance by more than `precision`.
fn polygon_pole(polygon: &Polygon<f64>, precision: f64) -> Option<(Point<f64>, f64)> {
    let bbox = polygon.bounding_rect()?;
    let cell_size = bbox.width().max(bbox.height());
    if !(cell_size > 0.0) { return Some((bbox.min().into(), 0.0)) }

    let precision = if precision > 0.0 { precision } else { cell_size * 1e-6 };

    // A single square cell covering the bounding box; thin shapes never fan out into a wide grid.
    let mut heap = BinaryHeap::new();
    heap.push(Cell::new(bbox.center(), cell_size / 2.0, polygon));

    // Seed with the centroid, then the bounding box center if it does better.
    let mut best = match polygon.centroid() {
        Some(centroid) => Cell::new(centroid.0, 0.0, polygon),
        None => Cell::new(bbox.center(), 0.0, polygon),
    };
    let center = Cell::new(bbox.center(), 0.0, polygon);
    if center.dist > best.dist { best = center }

    let mut examined = 0;
    while let Some(cell) = heap.pop() {
        if cell.dist > best.dist { best = cell }

        // No point splitting a cell that cannot beat the current best by `precision`.
        if cell.potential - best.dist <= precision { continue }

        examined += 1;
        if examined > MAX_CELLS { break }

        let h = cell.half / 2.0;
        for (dx, dy) in [(-h, -h), (h, -h), (-h, h), (h, h)] {
            heap.push(Cell::new(Coord { x: cell.center.x + dx, y: cell.center.y + dy }, h, polygon));
        }
    }

    Some((best.center.into(), best.dist))
}

/// Pole of inaccessibility of a MultiPolygon, computed on its largest part.
/// Returns `None` if the geometry has no parts.
pub(crate) fn pole_of_inaccessibility(shape: &MultiPolygon<f64>, precision: f64) -> Option<(Point<f64>, f64)> {
    let largest = shape.0.iter()
        .max_by(|a, b| a.unsigned_area().total_cmp(&b.unsigned_area()))?;
    polygon_pole(largest, precision)
}
