//! Design-system building blocks on top of [`egui`](https://github.com/emilk/egui).
//!
//! This crate provides the presentation pieces a calendar-heavy app keeps
//! reimplementing: a day cell that knows how to draw itself as part of a
//! continuous selection band ([`CalendarDayCell`]), a matching header
//! ([`CalendarHeader`]), shared font configuration with a three-tier override
//! chain ([`fonts`]), and validated dialog button descriptors
//! ([`DialogButtonAction`]).
//!
//! The hosting calendar owns all date logic and layout. It tells each cell its
//! [`SelectionState`] and [`RowPosition`]; the cell only turns those into
//! paint parameters. That mapping lives in [`CellVisuals::resolve`] and is a
//! pure function you can also call without any `Ui` at hand.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod calendar;
pub mod dialog;
pub mod fonts;

pub use crate::calendar::{
    CalendarDayCell, CalendarHeader, CalendarPalette, CellVisuals, RowPosition, SelectionState,
};
pub use crate::dialog::{DialogButtonAction, DialogButtonHandler, DialogButtonStyle, InvalidAction};
pub use crate::fonts::{ComponentKind, FontConfiguration, FontRegistry, TextRole};
