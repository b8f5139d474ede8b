//! Shared font configuration for the widgets in this crate.
//!
//! Apps theme fonts at three levels, checked in order on every lookup:
//!
//! 1. an instance override handed to a single widget (e.g.
//!    [`CalendarDayCell::fonts`](crate::CalendarDayCell::fonts)),
//! 2. a default for a whole component kind ([`set_component_default`]),
//! 3. the process-wide default ([`set_process_default`]).
//!
//! A role missing at every level falls back to a built-in [`FontId`], so a
//! lookup always succeeds. Configure the process-wide tiers once during
//! theming setup, before the first frame; they are only read after that.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use egui::{mutex::RwLock, FontId};

/// The text roles drawn by the widgets in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum TextRole {
    /// The number inside a calendar day cell.
    DayNumber,

    /// The month title of a calendar header.
    HeaderTitle,

    /// The weekday labels of a calendar header.
    WeekdayLabel,

    /// The title of a dialog button.
    ButtonLabel,
}

impl TextRole {
    /// All roles, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::DayNumber,
        Self::HeaderTitle,
        Self::WeekdayLabel,
        Self::ButtonLabel,
    ];

    /// Built-in font used when no configuration tier mentions this role.
    fn fallback(self) -> FontId {
        match self {
            Self::DayNumber => FontId::proportional(14.0),
            Self::HeaderTitle => FontId::proportional(18.0),
            Self::WeekdayLabel => FontId::proportional(12.0),
            Self::ButtonLabel => FontId::proportional(14.0),
        }
    }
}

/// The component kinds that can carry their own font defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ComponentKind {
    /// [`crate::CalendarDayCell`]
    CalendarCell,

    /// [`crate::CalendarHeader`]
    CalendarHeader,

    /// [`crate::DialogButtonAction`] when shown as a button.
    DialogButton,
}

/// A partial mapping from [`TextRole`] to [`FontId`].
///
/// Roles that are absent fall through to the next tier, so a configuration
/// only needs to name the roles it actually wants to change.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FontConfiguration {
    fonts: BTreeMap<TextRole, FontId>,
}

impl FontConfiguration {
    /// An empty configuration; every lookup falls through.
    pub const fn new() -> Self {
        Self {
            fonts: BTreeMap::new(),
        }
    }

    /// Set the font for one role.
    #[inline]
    pub fn with(mut self, role: TextRole, font: FontId) -> Self {
        self.fonts.insert(role, font);
        self
    }

    /// The font this configuration assigns to `role`, if any.
    pub fn font_for(&self, role: TextRole) -> Option<FontId> {
        self.fonts.get(&role).cloned()
    }

    /// Does this configuration assign no fonts at all?
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Font defaults for the whole process: one configuration per component kind
/// plus a catch-all.
///
/// Most apps use the global instance through [`set_process_default`] and
/// [`set_component_default`]; a standalone registry is mainly useful in tests
/// or when two independent themes coexist.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FontRegistry {
    process_default: FontConfiguration,
    per_component: BTreeMap<ComponentKind, FontConfiguration>,
}

impl FontRegistry {
    /// An empty registry; every lookup resolves to the built-in fallbacks.
    pub const fn new() -> Self {
        Self {
            process_default: FontConfiguration::new(),
            per_component: BTreeMap::new(),
        }
    }

    /// Replace the catch-all configuration.
    pub fn set_process_default(&mut self, config: FontConfiguration) {
        self.process_default = config;
    }

    /// Replace the configuration for one component kind.
    pub fn set_component_default(&mut self, kind: ComponentKind, config: FontConfiguration) {
        self.per_component.insert(kind, config);
    }

    /// The configuration registered for `kind`, if any.
    pub fn component_default(&self, kind: ComponentKind) -> Option<&FontConfiguration> {
        self.per_component.get(&kind)
    }

    /// Resolve the font for `role`, trying the instance override first, then
    /// the component default, then the process default, then the built-in
    /// fallback. Always yields a font.
    pub fn resolve(
        &self,
        kind: ComponentKind,
        instance: Option<&FontConfiguration>,
        role: TextRole,
    ) -> FontId {
        instance
            .and_then(|config| config.font_for(role))
            .or_else(|| {
                self.per_component
                    .get(&kind)
                    .and_then(|config| config.font_for(role))
            })
            .or_else(|| self.process_default.font_for(role))
            .unwrap_or_else(|| role.fallback())
    }
}

fn global() -> &'static RwLock<FontRegistry> {
    static REGISTRY: OnceLock<RwLock<FontRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(FontRegistry::new()))
}

/// Replace the process-wide catch-all font configuration.
///
/// Call during theming setup, before the first frame is drawn.
pub fn set_process_default(config: FontConfiguration) {
    log::debug!("installing process-wide font defaults");
    global().write().set_process_default(config);
}

/// Replace the process-wide font configuration for one component kind.
///
/// Call during theming setup, before the first frame is drawn.
pub fn set_component_default(kind: ComponentKind, config: FontConfiguration) {
    log::debug!("installing font defaults for {kind:?}");
    global().write().set_component_default(kind, config);
}

/// A snapshot of the process-wide registry.
pub fn registry() -> FontRegistry {
    global().read().clone()
}

/// Resolve against the process-wide registry.
pub(crate) fn resolve(
    kind: ComponentKind,
    instance: Option<&FontConfiguration>,
    role: TextRole,
) -> FontId {
    global().read().resolve(kind, instance, role)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use egui::FontFamily;

    #[test]
    fn empty_registry_resolves_to_fallbacks() {
        let registry = FontRegistry::new();
        for role in TextRole::ALL {
            assert_eq!(
                registry.resolve(ComponentKind::CalendarCell, None, role),
                role.fallback()
            );
        }
    }

    #[test]
    fn instance_beats_component_beats_process_default() {
        let process = FontId::proportional(10.0);
        let component = FontId::proportional(20.0);
        let instance_font = FontId::new(30.0, FontFamily::Monospace);

        let mut registry = FontRegistry::new();
        registry.set_process_default(
            FontConfiguration::new().with(TextRole::DayNumber, process.clone()),
        );

        // Only the process tier knows the role:
        assert_eq!(
            registry.resolve(ComponentKind::CalendarCell, None, TextRole::DayNumber),
            process
        );

        registry.set_component_default(
            ComponentKind::CalendarCell,
            FontConfiguration::new().with(TextRole::DayNumber, component.clone()),
        );
        assert_eq!(
            registry.resolve(ComponentKind::CalendarCell, None, TextRole::DayNumber),
            component
        );
        // Other component kinds are unaffected:
        assert_eq!(
            registry.resolve(ComponentKind::DialogButton, None, TextRole::DayNumber),
            process
        );

        let instance = FontConfiguration::new().with(TextRole::DayNumber, instance_font.clone());
        assert_eq!(
            registry.resolve(ComponentKind::CalendarCell, Some(&instance), TextRole::DayNumber),
            instance_font
        );
    }

    #[test]
    fn absent_roles_fall_through_each_tier() {
        let title = FontId::proportional(22.0);
        let mut registry = FontRegistry::new();
        registry.set_component_default(
            ComponentKind::CalendarHeader,
            FontConfiguration::new().with(TextRole::HeaderTitle, title.clone()),
        );

        // An instance override that says nothing about the role:
        let instance = FontConfiguration::new().with(TextRole::WeekdayLabel, FontId::monospace(9.0));
        assert_eq!(
            registry.resolve(
                ComponentKind::CalendarHeader,
                Some(&instance),
                TextRole::HeaderTitle
            ),
            title
        );
        // And a role nobody configured:
        assert_eq!(
            registry.resolve(
                ComponentKind::CalendarHeader,
                Some(&instance),
                TextRole::ButtonLabel
            ),
            TextRole::ButtonLabel.fallback()
        );
    }

    #[test]
    fn global_registry_round_trips() {
        set_component_default(
            ComponentKind::DialogButton,
            FontConfiguration::new().with(TextRole::ButtonLabel, FontId::proportional(16.0)),
        );
        assert_eq!(
            registry()
                .component_default(ComponentKind::DialogButton)
                .and_then(|config| config.font_for(TextRole::ButtonLabel)),
            Some(FontId::proportional(16.0))
        );
    }
}
