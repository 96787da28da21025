//! Palace geometry shared by the General and Guard rules.

use super::super::{Color, Position};
use std::ops::RangeInclusive;

/// Row and column bounds of `color`'s palace.
///
/// Red: rows 1-3, Black: rows 8-10; both span columns 4-6.
pub fn palace_bounds(color: Color) -> (RangeInclusive<u8>, RangeInclusive<u8>) {
    let rows = match color {
        Color::Red => 1..=3,
        Color::Black => 8..=10,
    };
    (rows, 4..=6)
}

/// Whether `pos` lies inside `color`'s palace.
pub fn in_palace(color: Color, pos: Position) -> bool {
    let (rows, cols) = palace_bounds(color);
    rows.contains(&pos.row) && cols.contains(&pos.col)
}
