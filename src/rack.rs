//! Triangular start layout
//!
//! Balls are racked in rows of 1, 2, 3, ... with the apex pointing toward -x.
//! Neighbours are spaced slightly more than one diameter apart so no pair
//! starts in contact.

use glam::DVec2;

use crate::error::{Error, Result};
use crate::sim::Bounds;

/// Extra spacing between racked balls, as a fraction of the diameter
pub const RACK_GAP: f64 = 0.01;
/// Apex position as a fraction of the table width
pub const RACK_APEX_FRACTION: f64 = 0.7;

/// Number of rows needed to rack `count` balls
pub fn rows_for(count: usize) -> usize {
    let mut rows = 0;
    while rows * (rows + 1) / 2 < count {
        rows += 1;
    }
    rows
}

/// Start positions for `count` balls of `radius`, in rack order
pub fn triangle(count: usize, bounds: &Bounds, radius: f64) -> Result<Vec<DVec2>> {
    let does_not_fit = || Error::RackDoesNotFit {
        count,
        radius,
        width: bounds.width,
        height: bounds.height,
    };

    if count == 0 {
        return Ok(Vec::new());
    }
    if bounds.width < 2.0 * radius || bounds.height < 2.0 * radius {
        return Err(does_not_fit());
    }
    if count == 1 {
        return Ok(vec![bounds.center()]);
    }

    let rows = rows_for(count);
    let spacing = 2.0 * radius * (1.0 + RACK_GAP);
    let row_step = spacing * 3.0_f64.sqrt() / 2.0;
    let depth = (rows - 1) as f64 * row_step;
    let span = (rows - 1) as f64 * spacing;

    // Slide the rack toward -x if the back row would reach the far wall
    let apex_x = (bounds.width * RACK_APEX_FRACTION).min(bounds.width - spacing / 2.0 - depth);
    if apex_x < spacing / 2.0 || span + spacing > bounds.height {
        return Err(does_not_fit());
    }

    let center_y = bounds.height / 2.0;
    let mut positions = Vec::with_capacity(count);
    'rows: for row in 0..rows {
        let x = apex_x + row as f64 * row_step;
        for col in 0..=row {
            if positions.len() == count {
                break 'rows;
            }
            let y = center_y + (col as f64 - row as f64 / 2.0) * spacing;
            positions.push(DVec2::new(x, y));
        }
    }

    log::debug!(
        "racked {} balls in {} rows, apex at ({:.3}, {:.3})",
        count,
        rows,
        apex_x,
        center_y
    );
    Ok(positions)
}
