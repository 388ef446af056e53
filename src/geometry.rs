//! Axis-aligned bounding box math for items on the zone grid.
//!
//! All functions are pure and stateless. Out-of-set rotation values are
//! a caller error caught by the validation layer, not normalized here.

use crate::types::{Aabb, Item, ItemKind};

/// Effective footprint of an item, accounting for rack rotation.
///
/// Racks rotated 90 or 270 degrees swap width and height; the stored
/// `w`/`h` always describe the natural orientation. Flats have no
/// rotation concept.
pub fn rotated_dims(item: &Item) -> (f64, f64) {
    match &item.kind {
        ItemKind::Rack(rack) if rack.rotation == 90 || rack.rotation == 270 => {
            (item.h, item.w)
        }
        _ => (item.w, item.h),
    }
}

/// Bounding box of an item at its current position and rotation.
pub fn item_aabb(item: &Item) -> Aabb {
    let (w, h) = rotated_dims(item);
    Aabb {
        x1: item.x,
        y1: item.y,
        x2: item.x + w,
        y2: item.y + h,
    }
}

/// True if the interiors of two boxes overlap.
/// Touching (shared edge or corner) is NOT counted as overlap.
pub fn aabbs_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.x1 < b.x2 && a.x2 > b.x1 && a.y1 < b.y2 && a.y2 > b.y1
}

/// Round `value` to the nearest multiple of `grid_size`, halves away
/// from zero.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Copy of `item` with a rack's rotation advanced by 90 degrees
/// (270 wraps to 0). Rotating a flat is a no-op, not an error.
pub fn rotate_item(item: &Item) -> Item {
    let mut rotated = item.clone();
    if let ItemKind::Rack(rack) = &mut rotated.kind {
        rack.rotation = (rack.rotation + 90) % 360;
    }
    rotated
}

/// Inclusive containment test; all four boundary edges count as inside.
pub fn point_in_aabb(x: f64, y: f64, aabb: &Aabb) -> bool {
    aabb.x1 <= x && x <= aabb.x2 && aabb.y1 <= y && y <= aabb.y2
}
