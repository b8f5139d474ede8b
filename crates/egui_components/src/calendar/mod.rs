//! Calendar presentation: day cells and the grid header.
//!
//! Nothing in here does date arithmetic. The hosting calendar computes which
//! day goes where, whether it is selected and where it sits in its week row,
//! then hands each cell the result.

mod cell;
mod header;

pub use cell::{CalendarDayCell, CalendarPalette, CellVisuals, RowPosition, SelectionState};
pub use header::CalendarHeader;
