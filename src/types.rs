//! Data types matching the zone-layout JSON schema.
//!
//! Every struct here derives Serialize + Deserialize so it can
//! round-trip through the JSON interchange format shared by the layout
//! editor frontend and the warehouse server.

use serde::{Deserialize, Serialize};

// -- Grid ----------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Pixel size of one cell. Rendering-only; the engine never reads it.
    #[serde(default = "default_cell_px")]
    pub cell_px: u32,
    /// Grid extent in cells.
    pub cols: u32,
    pub rows: u32,
    /// When set, item coordinates must land on integer cell boundaries.
    #[serde(default = "default_snap")]
    pub snap: bool,
    /// Rendering-only.
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
}

fn default_cell_px() -> u32 {
    20
}

fn default_snap() -> bool {
    true
}

fn default_show_grid() -> bool {
    true
}

// -- Items ---------------------------------------------------------

/// Walk order used when numbering a floor's storage cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Numbering {
    /// Left-to-right across each row, top row first.
    #[default]
    RowMajor,
    /// Top-to-bottom down each column, leftmost column first.
    ColMajor,
}

/// Direction cell numbers are assigned along the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDir {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RackSpec {
    /// Degrees. Only 0/90/180/270 are accepted by validation, but the
    /// field admits any value so bad input can be reported, not dropped.
    #[serde(default)]
    pub rotation: i32,
    /// Vertical storage levels.
    pub floors: u32,
    /// Storage cells per floor.
    pub rows: u32,
    pub cols: u32,
    #[serde(default)]
    pub numbering: Numbering,
    #[serde(default)]
    pub order: OrderDir,
    /// Whether each floor restarts its own cell-number sequence.
    #[serde(default)]
    pub per_floor_locations: bool,
    /// Explicit capacity per floor; overrides the computed cell count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_capacities: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatSpec {
    /// Grid subdivision of the storage area.
    pub rows: u32,
    pub cols: u32,
    /// Manual capacity override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
}

/// Variant-specific item fields, discriminated by the `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Rack(RackSpec),
    Flat(FlatSpec),
}

/// A placed rack or flat storage area on the zone grid.
///
/// `x`/`y` are the top-left corner in grid cells, `w`/`h` the footprint
/// in the item's natural (un-rotated) orientation. Coordinates are
/// floats so off-grid positions can be represented and rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub zone: String,
    /// Base location code, e.g. `F03`.
    pub location: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    /// Rotation in degrees for racks, `None` for flats.
    pub fn rotation(&self) -> Option<i32> {
        match &self.kind {
            ItemKind::Rack(rack) => Some(rack.rotation),
            ItemKind::Flat(_) => None,
        }
    }
}

// -- Geometry ------------------------------------------------------

/// Axis-aligned bounding box. `x1`/`y1` are the inclusive min corner,
/// `x2`/`y2` the exclusive max corner (`x1` + effective width).
/// Always derived from an item, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

// -- Engine I/O ----------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutParams {
    #[serde(default)]
    pub zone_code: String,
    pub grid: GridConfig,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemReport {
    pub id: String,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutReport {
    pub valid: bool,
    pub items: Vec<ItemReport>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub max_capacity: u32,
    pub item_count: u32,
}

// -- Tests ---------------------------------------------------------
