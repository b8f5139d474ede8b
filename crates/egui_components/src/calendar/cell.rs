use egui::{Align2, Color32, Rounding, Sense, Ui, Vec2, Visuals, Widget};

use crate::fonts::{self, ComponentKind, FontConfiguration, TextRole};

/// Corner radius used for the rounded ends of a selection band.
const CORNER_RADIUS: f32 = 14.0;

/// Default side length of a day cell.
const DEFAULT_CELL_SIZE: f32 = 28.0;

/// How a day cell takes part in the current selection.
///
/// Exactly one value applies per cell per render pass. The hosting calendar
/// derives it from "is this date selected, and is it the start, end or sole
/// day of the selection".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SelectionState {
    /// Not part of any selection.
    None,

    /// The only selected day.
    Single,

    /// First day of a multi-day range.
    RangeStart,

    /// Strictly between the first and last day of a multi-day range.
    RangeMiddle,

    /// Last day of a multi-day range.
    RangeEnd,

    /// A range whose start and end fall on the same day.
    ///
    /// Drawn fully rounded like [`Self::Single`], but with its own palette
    /// entry so themes can make a zero-length range visually distinct.
    SameDayRange,
}

impl SelectionState {
    /// All states, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Single,
        Self::RangeStart,
        Self::RangeMiddle,
        Self::RangeEnd,
        Self::SameDayRange,
    ];
}

/// Where a cell sits within its week row.
///
/// When a selection spans several week rows, the band has to break its
/// rounding at the row boundary and resume on the next row. The hosting
/// calendar precomputes this so the cell never needs to look at its
/// neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum RowPosition {
    /// Somewhere in the middle of the row.
    Middle,

    /// First cell of the row.
    RowStart,

    /// Last cell of the row.
    RowEnd,

    /// The row holds a single selected cell that is both its first and last.
    RowStartAndEnd,
}

impl RowPosition {
    /// All positions, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Middle,
        Self::RowStart,
        Self::RowEnd,
        Self::RowStartAndEnd,
    ];

    /// Is the cell the first of its row?
    #[inline]
    pub fn is_row_start(self) -> bool {
        matches!(self, Self::RowStart | Self::RowStartAndEnd)
    }

    /// Is the cell the last of its row?
    #[inline]
    pub fn is_row_end(self) -> bool {
        matches!(self, Self::RowEnd | Self::RowStartAndEnd)
    }
}

/// The colors a calendar reads when painting day cells.
///
/// Which concrete colors to use is a theming decision; the defaults here are
/// only there so the widgets work out of the box. [`Self::from_visuals`]
/// derives a palette from the current egui theme instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CalendarPalette {
    /// Day-number color of unselected cells.
    pub day_text: Color32,

    /// Day-number color of any selected cell.
    pub selected_day_text: Color32,

    /// Fill of a [`SelectionState::Single`] cell.
    pub single_fill: Color32,

    /// Fill of the band drawn across a multi-day range.
    pub range_fill: Color32,

    /// Fill of a [`SelectionState::SameDayRange`] cell. Should differ from
    /// [`Self::single_fill`] so a zero-length range reads differently.
    pub same_day_fill: Color32,
}

impl Default for CalendarPalette {
    fn default() -> Self {
        Self {
            day_text: Color32::from_gray(60),
            selected_day_text: Color32::WHITE,
            single_fill: Color32::from_rgb(0, 98, 227),
            range_fill: Color32::from_rgb(84, 154, 236),
            same_day_fill: Color32::from_rgb(0, 166, 152),
        }
    }
}

impl CalendarPalette {
    /// Derive a palette from the current theme.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            day_text: visuals.text_color(),
            selected_day_text: visuals.selection.stroke.color,
            single_fill: visuals.selection.bg_fill,
            range_fill: visuals.selection.bg_fill.linear_multiply(0.5),
            same_day_fill: visuals.hyperlink_color,
        }
    }
}

/// Resolved paint parameters for one day cell.
///
/// Produced by [`CellVisuals::resolve`]; consumed by [`CalendarDayCell`] or by
/// a custom host widget that does its own painting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CellVisuals {
    /// Background fill. [`Color32::TRANSPARENT`] means no background.
    pub fill: Color32,

    /// Per-corner rounding of the background.
    pub rounding: Rounding,

    /// Color of the day number.
    pub text_color: Color32,

    /// The background should run flush through the gap before this cell, so
    /// the band connects to the previous cell without a seam.
    pub extend_leading: bool,

    /// The background should run flush through the gap after this cell.
    pub extend_trailing: bool,
}

impl CellVisuals {
    /// Map a cell's selection role and row position to paint parameters.
    ///
    /// This is a pure function of the two enums: no side effects, no error
    /// paths, every combination defined. A range renders as one continuous
    /// band that is rounded where it starts and ends, breaks flat at a row
    /// boundary, and resumes flat on the next row. Adding a variant to either
    /// enum is a compile error here until the table is updated.
    pub fn resolve(
        selection: SelectionState,
        row_position: RowPosition,
        palette: &CalendarPalette,
    ) -> Self {
        match selection {
            SelectionState::None => Self {
                fill: Color32::TRANSPARENT,
                rounding: Rounding::same(0.0),
                text_color: palette.day_text,
                extend_leading: false,
                extend_trailing: false,
            },
            SelectionState::Single => Self {
                fill: palette.single_fill,
                rounding: Rounding::same(CORNER_RADIUS),
                text_color: palette.selected_day_text,
                extend_leading: false,
                extend_trailing: false,
            },
            SelectionState::SameDayRange => Self {
                fill: palette.same_day_fill,
                rounding: Rounding::same(CORNER_RADIUS),
                text_color: palette.selected_day_text,
                extend_leading: false,
                extend_trailing: false,
            },
            SelectionState::RangeStart => {
                // The band continues to the right unless the row ends here.
                let closes_here = row_position.is_row_end();
                Self {
                    fill: palette.range_fill,
                    rounding: if closes_here {
                        Rounding::same(CORNER_RADIUS)
                    } else {
                        leading_rounding()
                    },
                    text_color: palette.selected_day_text,
                    extend_leading: false,
                    extend_trailing: !closes_here,
                }
            }
            SelectionState::RangeMiddle => Self {
                fill: palette.range_fill,
                rounding: Rounding::same(0.0),
                text_color: palette.selected_day_text,
                extend_leading: !row_position.is_row_start(),
                extend_trailing: !row_position.is_row_end(),
            },
            SelectionState::RangeEnd => {
                // The band continues from the left unless the row starts here.
                let opens_here = row_position.is_row_start();
                Self {
                    fill: palette.range_fill,
                    rounding: if opens_here {
                        Rounding::same(CORNER_RADIUS)
                    } else {
                        trailing_rounding()
                    },
                    text_color: palette.selected_day_text,
                    extend_leading: !opens_here,
                    extend_trailing: false,
                }
            }
        }
    }
}

/// Rounding on the leading (left) edge only.
fn leading_rounding() -> Rounding {
    Rounding {
        nw: CORNER_RADIUS,
        sw: CORNER_RADIUS,
        ne: 0.0,
        se: 0.0,
    }
}

/// Rounding on the trailing (right) edge only.
fn trailing_rounding() -> Rounding {
    Rounding {
        nw: 0.0,
        sw: 0.0,
        ne: CORNER_RADIUS,
        se: CORNER_RADIUS,
    }
}

/// A single day cell of a calendar grid.
///
/// The hosting calendar decides the [`SelectionState`] and [`RowPosition`] of
/// every visible cell each layout pass; the cell itself only turns those into
/// pixels. It reports clicks through the returned [`egui::Response`].
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// use egui_components::{CalendarDayCell, RowPosition, SelectionState};
///
/// ui.add(
///     CalendarDayCell::new(17)
///         .selection(SelectionState::RangeStart)
///         .row_position(RowPosition::Middle),
/// );
/// # });
/// ```
#[must_use = "You should put this widget in an ui with `ui.add(widget);`"]
pub struct CalendarDayCell<'a> {
    day: u32,
    selection: SelectionState,
    row_position: RowPosition,
    palette: Option<CalendarPalette>,
    fonts: Option<&'a FontConfiguration>,
    size: Vec2,
}

impl<'a> CalendarDayCell<'a> {
    /// A cell showing the given day number, unselected, mid-row.
    pub fn new(day: u32) -> Self {
        Self {
            day,
            selection: SelectionState::None,
            row_position: RowPosition::Middle,
            palette: None,
            fonts: None,
            size: Vec2::splat(DEFAULT_CELL_SIZE),
        }
    }

    /// How this cell takes part in the current selection. (Default: `None`)
    #[inline]
    pub fn selection(mut self, selection: SelectionState) -> Self {
        self.selection = selection;
        self
    }

    /// Where this cell sits in its week row. (Default: `Middle`)
    #[inline]
    pub fn row_position(mut self, row_position: RowPosition) -> Self {
        self.row_position = row_position;
        self
    }

    /// Use explicit colors instead of deriving them from the theme.
    #[inline]
    pub fn palette(mut self, palette: CalendarPalette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Per-instance font override, checked before the component and process
    /// defaults (see [`crate::fonts`]).
    #[inline]
    pub fn fonts(mut self, fonts: &'a FontConfiguration) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Size of the cell. (Default: 28×28 points)
    #[inline]
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}

impl Widget for CalendarDayCell<'_> {
    fn ui(self, ui: &mut Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let palette = self
                .palette
                .unwrap_or_else(|| CalendarPalette::from_visuals(ui.visuals()));
            let visuals = CellVisuals::resolve(self.selection, self.row_position, &palette);

            if visuals.fill != Color32::TRANSPARENT {
                // Bleed through half the item spacing on connected edges so a
                // multi-day band has no seams between cells.
                let gap = ui.spacing().item_spacing.x / 2.0;
                let mut background = rect;
                if visuals.extend_leading {
                    background.min.x -= gap;
                }
                if visuals.extend_trailing {
                    background.max.x += gap;
                }
                ui.painter()
                    .rect_filled(background, visuals.rounding, visuals.fill);
            }

            let font = fonts::resolve(ComponentKind::CalendarCell, self.fonts, TextRole::DayNumber);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.day,
                font,
                visuals.text_color,
            );
        }

        response
    }
}

// ----------------------------------------------------------------------------
