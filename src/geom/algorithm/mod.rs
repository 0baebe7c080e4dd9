mod measure;
mod pole;

pub(crate) use measure::{clip_to_rect, nearest_boundary_point, perimeter};
pub(crate) use pole::pole_of_inaccessibility;
