//! Value objects describing the buttons of a dialog.
//!
//! A dialog owns a list of [`DialogButtonAction`]s — one per button — and
//! invokes the stored handler when a button is pressed. The actions are plain
//! immutable values: the dialog container, modality and layout are the host's
//! business.

use std::fmt;
use std::sync::Arc;

use egui::{Button, Color32, RichText, Ui, Visuals};

use crate::fonts::{self, ComponentKind, FontConfiguration, TextRole};

/// Visual emphasis of a dialog button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DialogButtonStyle {
    /// The main action of the dialog.
    Primary,

    /// A less prominent alternative.
    Secondary,

    /// An action that deletes or discards something.
    Destructive,

    /// Drawn like a hyperlink, without a button background.
    Link,
}

impl DialogButtonStyle {
    /// All styles, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Primary,
        Self::Secondary,
        Self::Destructive,
        Self::Link,
    ];

    fn fill(self, visuals: &Visuals) -> Color32 {
        match self {
            Self::Primary => visuals.selection.bg_fill,
            Self::Secondary => visuals.widgets.inactive.weak_bg_fill,
            Self::Destructive => visuals.error_fg_color,
            Self::Link => Color32::TRANSPARENT,
        }
    }

    fn text_color(self, visuals: &Visuals) -> Color32 {
        match self {
            Self::Primary => visuals.selection.stroke.color,
            Self::Secondary => visuals.widgets.inactive.fg_stroke.color,
            Self::Destructive => Color32::WHITE,
            Self::Link => visuals.hyperlink_color,
        }
    }
}

/// Error returned when a [`DialogButtonAction`] fails validation.
#[derive(Debug, thiserror::Error)]
pub enum InvalidAction {
    /// The title was empty or all whitespace.
    #[error("a dialog button action requires a non-empty title")]
    EmptyTitle,
}

/// Handler invoked when a dialog button is pressed.
///
/// It receives the action that fired, so one handler can be shared between
/// several buttons and still tell them apart.
pub type DialogButtonHandler = Arc<dyn Fn(&DialogButtonAction) + Send + Sync>;

/// An immutable description of one dialog button: what it says, how it looks,
/// and what happens when it is pressed.
///
/// There is deliberately no `Default` and no public field construction — an
/// action without a title, style and handler is a bug, so the only way to get
/// one is the validated [`DialogButtonAction::new`].
///
/// ```
/// use egui_components::{DialogButtonAction, DialogButtonStyle};
///
/// let confirm = DialogButtonAction::new("Confirm", DialogButtonStyle::Primary, |action| {
///     println!("{} pressed", action.title());
/// })
/// .unwrap();
/// assert_eq!(confirm.title(), "Confirm");
/// ```
#[derive(Clone)]
pub struct DialogButtonAction {
    title: String,
    style: DialogButtonStyle,
    handler: DialogButtonHandler,
}

impl DialogButtonAction {
    /// Create a validated action.
    ///
    /// # Errors
    /// [`InvalidAction::EmptyTitle`] if `title` is empty or all whitespace.
    pub fn new(
        title: impl Into<String>,
        style: DialogButtonStyle,
        handler: impl Fn(&DialogButtonAction) + Send + Sync + 'static,
    ) -> Result<Self, InvalidAction> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(InvalidAction::EmptyTitle);
        }
        Ok(Self {
            title,
            style,
            handler: Arc::new(handler),
        })
    }

    /// The button title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The button style.
    pub fn style(&self) -> DialogButtonStyle {
        self.style
    }

    /// Invoke the stored handler, passing the action itself.
    pub fn invoke(&self) {
        (self.handler)(self);
    }

    /// Show the action as a button and invoke the handler when it is pressed.
    pub fn show(&self, ui: &mut Ui) -> egui::Response {
        self.show_with_fonts(ui, None)
    }

    /// Like [`Self::show`], with a per-instance font override (see
    /// [`crate::fonts`]).
    pub fn show_with_fonts(
        &self,
        ui: &mut Ui,
        instance_fonts: Option<&FontConfiguration>,
    ) -> egui::Response {
        let font = fonts::resolve(ComponentKind::DialogButton, instance_fonts, TextRole::ButtonLabel);
        let visuals = ui.visuals();
        let fill = self.style.fill(visuals);
        let text = RichText::new(&self.title)
            .font(font)
            .color(self.style.text_color(visuals));
        let response = ui.add(Button::new(text).fill(fill));
        if response.clicked() {
            self.invoke();
        }
        response
    }
}

impl fmt::Debug for DialogButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogButtonAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn factory_round_trips_title_and_style() {
        let action =
            DialogButtonAction::new("Confirm", DialogButtonStyle::Primary, |_| {}).unwrap();
        assert_eq!(action.title(), "Confirm");
        assert_eq!(action.style(), DialogButtonStyle::Primary);
    }

    #[test]
    fn invoke_passes_the_firing_action_to_the_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let action = DialogButtonAction::new("Delete", DialogButtonStyle::Destructive, move |a| {
            assert_eq!(a.title(), "Delete");
            assert_eq!(a.style(), DialogButtonStyle::Destructive);
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        action.invoke();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn one_handler_can_serve_several_actions() {
        let last_pressed = Arc::new(egui::mutex::Mutex::new(String::new()));
        let handler = {
            let last_pressed = Arc::clone(&last_pressed);
            move |action: &DialogButtonAction| {
                *last_pressed.lock() = action.title().to_owned();
            }
        };

        let cancel =
            DialogButtonAction::new("Cancel", DialogButtonStyle::Secondary, handler.clone())
                .unwrap();
        let save = DialogButtonAction::new("Save", DialogButtonStyle::Primary, handler).unwrap();

        cancel.invoke();
        assert_eq!(*last_pressed.lock(), "Cancel");
        save.invoke();
        assert_eq!(*last_pressed.lock(), "Save");
    }

    #[test]
    fn blank_titles_are_rejected() {
        for title in ["", "   ", "\n"] {
            assert!(matches!(
                DialogButtonAction::new(title, DialogButtonStyle::Primary, |_| {}),
                Err(InvalidAction::EmptyTitle)
            ));
        }
    }

    #[test]
    fn debug_does_not_require_a_debug_handler() {
        let action = DialogButtonAction::new("Ok", DialogButtonStyle::Link, |_| {}).unwrap();
        let debug = format!("{action:?}");
        assert!(debug.contains("Ok"));
    }
}
