//! Storage capacity math for zone items.
//!
//! Explicit per-floor capacities win over the computed cell count, and
//! flats may carry a manual `max_capacity` override; the fallbacks are
//! `floors * rows * cols` and `rows * cols`.

use crate::types::{Item, ItemKind, ZoneSummary};

/// Number of storage slots an item provides.
pub fn item_capacity(item: &Item) -> u32 {
    match &item.kind {
        ItemKind::Rack(rack) => match &rack.floor_capacities {
            Some(caps) if !caps.is_empty() => caps.iter().sum(),
            _ => rack.floors * rack.rows * rack.cols,
        },
        ItemKind::Flat(flat) => match flat.max_capacity {
            Some(cap) if cap > 0 => cap,
            _ => flat.rows * flat.cols,
        },
    }
}

/// Total capacity and item count across a zone's items.
pub fn zone_summary(items: &[Item]) -> ZoneSummary {
    ZoneSummary {
        max_capacity: items.iter().map(item_capacity).sum(),
        item_count: items.len() as u32,
    }
}

/// Stock as a percentage of capacity. Zero-capacity zones report 0
/// rather than dividing by zero.
pub fn utilization(current_stock: u32, max_capacity: u32) -> f64 {
    if max_capacity == 0 {
        return 0.0;
    }
    current_stock as f64 / max_capacity as f64 * 100.0
}
