//! Placement rule checks for zone layouts.
//!
//! Each check is an independent predicate returning `Ok(())` or a
//! `ValidationError` naming the violated rule. The editor surfaces
//! every violation at once, so `item_errors` collects failures instead
//! of short-circuiting.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::geometry::{aabbs_overlap, item_aabb};
use crate::types::{GridConfig, Item, ItemKind, ItemReport, LayoutReport};

/// One uppercase letter, two digits, then up to two hyphen-separated
/// alphanumeric segments: `F03`, `F03-01`, `F03-01-A`.
static LOCATION_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][0-9]{2}(-[A-Za-z0-9]+){0,2}$").expect("valid location code regex")
});

/// A violated placement rule. Carries the offending value and, for
/// collisions, the id of the sibling in the way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid location code `{code}`")]
    LocationCode { code: String },
    #[error("item `{id}` extends outside the zone grid")]
    OutOfBounds { id: String },
    #[error("item `{id}` overlaps item `{other}`")]
    Collision { id: String, other: String },
    #[error("item `{id}` is off the cell grid at ({x}, {y})")]
    OffGrid { id: String, x: f64, y: f64 },
    #[error("item `{id}` has unsupported rotation {rotation}")]
    Rotation { id: String, rotation: i32 },
}

pub fn validate_location_code(code: &str) -> Result<(), ValidationError> {
    if LOCATION_CODE_RE.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::LocationCode { code: code.to_string() })
    }
}

/// The item's bounding box must lie within `[0, cols] x [0, rows]`.
pub fn validate_bounds(item: &Item, grid: &GridConfig) -> Result<(), ValidationError> {
    let aabb = item_aabb(item);
    if aabb.x1 < 0.0
        || aabb.y1 < 0.0
        || aabb.x2 > grid.cols as f64
        || aabb.y2 > grid.rows as f64
    {
        return Err(ValidationError::OutOfBounds { id: item.id.clone() });
    }
    Ok(())
}

/// Scan `siblings` for a bounding-box overlap, skipping `exclude_id`
/// (so an item being edited does not collide with its pre-edit copy).
/// Plain O(n) scan; zone collections stay in the tens of items.
pub fn validate_collision(
    item: &Item,
    siblings: &[Item],
    exclude_id: Option<&str>,
) -> Result<(), ValidationError> {
    let aabb = item_aabb(item);
    for other in siblings {
        if exclude_id == Some(other.id.as_str()) {
            continue;
        }
        if aabbs_overlap(&aabb, &item_aabb(other)) {
            return Err(ValidationError::Collision {
                id: item.id.clone(),
                other: other.id.clone(),
            });
        }
    }
    Ok(())
}

/// When the grid has snapping on, `x` and `y` must be whole cells.
pub fn validate_grid_snap(item: &Item, grid: &GridConfig) -> Result<(), ValidationError> {
    if grid.snap && (item.x.fract() != 0.0 || item.y.fract() != 0.0) {
        return Err(ValidationError::OffGrid {
            id: item.id.clone(),
            x: item.x,
            y: item.y,
        });
    }
    Ok(())
}

/// Racks may only sit at quarter turns. Flats always pass.
pub fn validate_rotation(item: &Item) -> Result<(), ValidationError> {
    if let ItemKind::Rack(rack) = &item.kind {
        if !matches!(rack.rotation, 0 | 90 | 180 | 270) {
            return Err(ValidationError::Rotation {
                id: item.id.clone(),
                rotation: rack.rotation,
            });
        }
    }
    Ok(())
}

/// Run every placement rule against one item, collecting all failures.
pub fn item_errors(
    item: &Item,
    grid: &GridConfig,
    siblings: &[Item],
    exclude_id: Option<&str>,
) -> Vec<ValidationError> {
    [
        validate_location_code(&item.location),
        validate_bounds(item, grid),
        validate_collision(item, siblings, exclude_id),
        validate_grid_snap(item, grid),
        validate_rotation(item),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// True iff all placement rules pass. The item's own id is excluded
/// from the collision scan so a stored layout can be re-checked in
/// place.
pub fn is_item_valid(item: &Item, grid: &GridConfig, siblings: &[Item]) -> bool {
    item_errors(item, grid, siblings, Some(item.id.as_str())).is_empty()
}

/// Per-item verdicts for a whole zone layout.
pub fn validate_layout(grid: &GridConfig, items: &[Item]) -> LayoutReport {
    let mut reports = Vec::with_capacity(items.len());
    let mut all_valid = true;
    for item in items {
        let errors = item_errors(item, grid, items, Some(item.id.as_str()));
        if !errors.is_empty() {
            all_valid = false;
            debug!("item `{}` failed {} placement rule(s)", item.id, errors.len());
        }
        reports.push(ItemReport {
            id: item.id.clone(),
            valid: errors.is_empty(),
            errors: errors.iter().map(|e| e.to_string()).collect(),
        });
    }
    LayoutReport { valid: all_valid, items: reports }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FlatSpec, RackSpec};

    fn grid(cols: u32, rows: u32, snap: bool) -> GridConfig {
        GridConfig { cell_px: 20, cols, rows, snap, show_grid: true }
    }

    fn rack(id: &str, x: f64, y: f64, w: f64, h: f64, rotation: i32) -> Item {
        Item {
            id: id.into(),
            zone: "A".into(),
            location: "F03".into(),
            x,
            y,
            w,
            h,
            kind: ItemKind::Rack(RackSpec {
                rotation,
                floors: 3,
                rows: 2,
                cols: 4,
                numbering: Default::default(),
                order: Default::default(),
                per_floor_locations: false,
                floor_capacities: None,
            }),
        }
    }

    fn flat(id: &str, x: f64, y: f64, w: f64, h: f64) -> Item {
        Item {
            id: id.into(),
            zone: "A".into(),
            location: "G01".into(),
            x,
            y,
            w,
            h,
            kind: ItemKind::Flat(FlatSpec { rows: 2, cols: 2, max_capacity: None }),
        }
    }

    #[test]
    fn location_codes() {
        for code in ["F03", "F03-01", "F03-01-A", "F03-B1", "Z99-12-34"] {
            assert!(validate_location_code(code).is_ok(), "{code} should pass");
        }
        for code in ["", "f03", "03", "F3", "F03-", "F03--01", "F03-01-02-03", "F03_01"] {
            assert!(validate_location_code(code).is_err(), "{code} should fail");
        }
    }

    #[test]
    fn location_error_names_the_code() {
        let err = validate_location_code("f03").unwrap_err();
        assert_eq!(err, ValidationError::LocationCode { code: "f03".into() });
        assert!(err.to_string().contains("f03"));
    }

    #[test]
    fn bounds_inside_and_on_edge() {
        let g = grid(30, 20, true);
        assert!(validate_bounds(&rack("r1", 0.0, 0.0, 6.0, 4.0, 0), &g).is_ok());
        // Touching the far edge is still inside.
        assert!(validate_bounds(&rack("r1", 24.0, 16.0, 6.0, 4.0, 0), &g).is_ok());
    }

    #[test]
    fn bounds_negative_or_past_edge() {
        let g = grid(30, 20, true);
        assert!(validate_bounds(&rack("r1", -1.0, 0.0, 6.0, 4.0, 0), &g).is_err());
        assert!(validate_bounds(&rack("r1", 25.0, 0.0, 6.0, 4.0, 0), &g).is_err());
        assert!(validate_bounds(&rack("r1", 0.0, 17.0, 6.0, 4.0, 0), &g).is_err());
    }

    #[test]
    fn bounds_use_rotated_footprint() {
        let g = grid(30, 20, true);
        // 6x4 at y=16 fits unrotated; rotated to 4x6 it runs past row 20.
        assert!(validate_bounds(&rack("r1", 0.0, 16.0, 6.0, 4.0, 0), &g).is_ok());
        assert!(validate_bounds(&rack("r1", 0.0, 16.0, 6.0, 4.0, 90), &g).is_err());
    }

    #[test]
    fn collision_overlap_and_clear() {
        let a = rack("a", 10.0, 0.0, 6.0, 4.0, 0);
        let b = rack("b", 12.0, 0.0, 6.0, 4.0, 0);
        let c = rack("c", 20.0, 0.0, 6.0, 4.0, 0);
        let err = validate_collision(&a, &[b.clone()], None).unwrap_err();
        assert_eq!(err, ValidationError::Collision { id: "a".into(), other: "b".into() });
        assert!(validate_collision(&a, &[c], None).is_ok());
        // Edge-touching neighbours are legal.
        let d = rack("d", 16.0, 0.0, 6.0, 4.0, 0);
        assert!(validate_collision(&a, &[d], None).is_ok());
    }

    #[test]
    fn collision_skips_excluded_id() {
        let a = rack("a", 10.0, 0.0, 6.0, 4.0, 0);
        let pre_edit = rack("a", 11.0, 0.0, 6.0, 4.0, 0);
        assert!(validate_collision(&a, &[pre_edit.clone()], Some("a")).is_ok());
        assert!(validate_collision(&a, &[pre_edit], None).is_err());
    }

    #[test]
    fn grid_snap_fractional() {
        let snapped = grid(30, 20, true);
        let free = grid(30, 20, false);
        let item = rack("r1", 10.5, 0.0, 6.0, 4.0, 0);
        let err = validate_grid_snap(&item, &snapped).unwrap_err();
        assert_eq!(err, ValidationError::OffGrid { id: "r1".into(), x: 10.5, y: 0.0 });
        assert!(validate_grid_snap(&item, &free).is_ok());
        assert!(validate_grid_snap(&rack("r1", 10.0, 3.0, 6.0, 4.0, 0), &snapped).is_ok());
    }

    #[test]
    fn rotation_set_membership() {
        for rot in [0, 90, 180, 270] {
            assert!(validate_rotation(&rack("r1", 0.0, 0.0, 2.0, 2.0, rot)).is_ok());
        }
        for rot in [45, -90, 360, 91] {
            assert!(validate_rotation(&rack("r1", 0.0, 0.0, 2.0, 2.0, rot)).is_err());
        }
        assert!(validate_rotation(&flat("f1", 0.0, 0.0, 2.0, 2.0)).is_ok());
    }

    #[test]
    fn item_errors_collects_every_violation() {
        let g = grid(30, 20, true);
        let mut bad = rack("r1", -2.5, 0.0, 6.0, 4.0, 45);
        bad.location = "f03".into();
        let errors = item_errors(&bad, &g, &[], None);
        // Bad location, out of bounds, off grid, bad rotation.
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn is_item_valid_aggregates() {
        let g = grid(30, 20, true);
        let a = rack("a", 10.0, 0.0, 6.0, 4.0, 0);
        let clear = rack("b", 20.0, 0.0, 6.0, 4.0, 0);
        assert!(is_item_valid(&a, &g, &[a.clone(), clear.clone()]));

        let mut bad = rack("c", -1.0, 0.0, 6.0, 4.0, 0);
        bad.location = "f03".into();
        assert!(!is_item_valid(&bad, &g, &[a, clear]));
    }

    #[test]
    fn layout_report_flags_colliding_pair() {
        let g = grid(30, 20, true);
        let items = vec![
            rack("a", 10.0, 0.0, 6.0, 4.0, 0),
            rack("b", 12.0, 0.0, 6.0, 4.0, 0),
            flat("f", 0.0, 10.0, 4.0, 4.0),
        ];
        let report = validate_layout(&g, &items);
        assert!(!report.valid);
        assert_eq!(report.items.len(), 3);
        assert!(!report.items[0].valid);
        assert!(!report.items[1].valid);
        assert!(report.items[2].valid);
        assert!(report.items[0].errors[0].contains("overlaps"));
    }

    #[test]
    fn layout_report_all_clear() {
        let g = grid(30, 20, true);
        let items = vec![
            rack("a", 0.0, 0.0, 6.0, 4.0, 0),
            rack("b", 6.0, 0.0, 6.0, 4.0, 0),
            flat("f", 0.0, 10.0, 4.0, 4.0),
        ];
        let report = validate_layout(&g, &items);
        assert!(report.valid);
        assert!(report.items.iter().all(|r| r.valid && r.errors.is_empty()));
    }
}
