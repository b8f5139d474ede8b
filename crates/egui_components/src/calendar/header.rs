use egui::{vec2, Align2, Sense, Ui, Widget};

use crate::fonts::{self, ComponentKind, FontConfiguration, TextRole};

/// Vertical space given to the title line and to the weekday line.
const LINE_HEIGHT: f32 = 24.0;

/// Header of a calendar grid: a month title and, optionally, a row of
/// weekday labels aligned with the seven day columns below it.
///
/// The hosting calendar formats the title ("August 2026", "Août 2026", …);
/// this widget has no notion of dates or locales. Beyond the title, its only
/// configuration is the font lookup described in [`crate::fonts`].
#[must_use = "You should put this widget in an ui with `ui.add(widget);`"]
pub struct CalendarHeader<'a> {
    title: String,
    weekday_labels: Option<[&'a str; 7]>,
    fonts: Option<&'a FontConfiguration>,
}

impl<'a> CalendarHeader<'a> {
    /// A header showing just the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            weekday_labels: None,
            fonts: None,
        }
    }

    /// Also show a row of weekday labels under the title.
    #[inline]
    pub fn weekday_labels(mut self, labels: [&'a str; 7]) -> Self {
        self.weekday_labels = Some(labels);
        self
    }

    /// Per-instance font override, checked before the component and process
    /// defaults (see [`crate::fonts`]).
    #[inline]
    pub fn fonts(mut self, fonts: &'a FontConfiguration) -> Self {
        self.fonts = Some(fonts);
        self
    }
}

impl Widget for CalendarHeader<'_> {
    fn ui(self, ui: &mut Ui) -> egui::Response {
        let lines = if self.weekday_labels.is_some() { 2.0 } else { 1.0 };
        let desired_size = vec2(ui.available_width(), lines * LINE_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let text_color = ui.visuals().strong_text_color();
            let title_font =
                fonts::resolve(ComponentKind::CalendarHeader, self.fonts, TextRole::HeaderTitle);
            ui.painter().text(
                rect.center_top() + vec2(0.0, LINE_HEIGHT / 2.0),
                Align2::CENTER_CENTER,
                self.title,
                title_font,
                text_color,
            );

            if let Some(labels) = self.weekday_labels {
                let label_color = ui.visuals().weak_text_color();
                let label_font = fonts::resolve(
                    ComponentKind::CalendarHeader,
                    self.fonts,
                    TextRole::WeekdayLabel,
                );
                let column_width = rect.width() / 7.0;
                let y = rect.top() + LINE_HEIGHT * 1.5;
                for (i, label) in labels.iter().enumerate() {
                    let x = rect.left() + (i as f32 + 0.5) * column_width;
                    ui.painter().text(
                        egui::pos2(x, y),
                        Align2::CENTER_CENTER,
                        label,
                        label_font.clone(),
                        label_color,
                    );
                }
            }
        }

        response
    }
}
