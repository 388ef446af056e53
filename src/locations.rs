//! Per-cell location code generation.
//!
//! A rack's base location fans out into one code per storage cell.
//! `numbering` fixes the walk order across a floor, `order` the
//! direction numbers are assigned along it, and `per_floor_locations`
//! whether each floor restarts its own two-digit sequence.

use crate::types::{Item, ItemKind, Numbering, OrderDir};

/// One storage cell and its generated location code.
/// `floor` is 1-based; `row`/`col` are 0-based within the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellCode {
    pub floor: u32,
    pub row: u32,
    pub col: u32,
    pub code: String,
}

/// Flat cell indices of one `rows x cols` floor in numbering order.
fn floor_walk(rows: u32, cols: u32, numbering: Numbering, order: OrderDir) -> Vec<u32> {
    let mut cells: Vec<u32> = match numbering {
        Numbering::RowMajor => (0..rows * cols).collect(),
        Numbering::ColMajor => (0..cols)
            .flat_map(|c| (0..rows).map(move |r| r * cols + c))
            .collect(),
    };
    if order == OrderDir::Desc {
        cells.reverse();
    }
    cells
}

/// Codes for every storage cell of a rack.
///
/// With `per_floor_locations` the codes are `BASE-FF-CC`; without, all
/// floors share one running sequence `BASE-CC`. Two-digit suffixes keep
/// generated codes within the location-code segment limit.
pub fn rack_cell_codes(item: &Item) -> Vec<CellCode> {
    let rack = match &item.kind {
        ItemKind::Rack(rack) => rack,
        ItemKind::Flat(_) => return Vec::new(),
    };
    let cells_per_floor = rack.rows * rack.cols;
    let mut out = Vec::with_capacity((rack.floors * cells_per_floor) as usize);
    for floor in 1..=rack.floors {
        let walk = floor_walk(rack.rows, rack.cols, rack.numbering, rack.order);
        for (slot, cell) in walk.into_iter().enumerate() {
            let number = if rack.per_floor_locations {
                slot as u32 + 1
            } else {
                (floor - 1) * cells_per_floor + slot as u32 + 1
            };
            let code = if rack.per_floor_locations {
                format!("{}-{:02}-{:02}", item.location, floor, number)
            } else {
                format!("{}-{:02}", item.location, number)
            };
            out.push(CellCode {
                floor,
                row: cell / rack.cols,
                col: cell % rack.cols,
                code,
            });
        }
    }
    out
}

/// Codes for a flat's cells: always `BASE-CC`, row-major ascending.
pub fn flat_cell_codes(item: &Item) -> Vec<CellCode> {
    let flat = match &item.kind {
        ItemKind::Flat(flat) => flat,
        ItemKind::Rack(_) => return Vec::new(),
    };
    let mut out = Vec::with_capacity((flat.rows * flat.cols) as usize);
    for cell in 0..flat.rows * flat.cols {
        out.push(CellCode {
            floor: 1,
            row: cell / flat.cols,
            col: cell % flat.cols,
            code: format!("{}-{:02}", item.location, cell + 1),
        });
    }
    out
}
