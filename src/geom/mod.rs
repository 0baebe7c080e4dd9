mod algorithm;
mod bbox;
mod geom;

pub(crate) use algorithm::{clip_to_rect, nearest_boundary_point, perimeter, pole_of_inaccessibility};
pub(crate) use geom::Geometries;
