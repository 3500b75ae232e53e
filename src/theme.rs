//! Named Style Presets
//!
//! The dialog only talks to a narrow [`ThemeRegistry`] seam, so the rest of
//! the crate stays agnostic of how styles are discovered and applied.
//! Unknown names are ignored rather than surfaced: the caller asked for a
//! look, not a failure.

use eframe::egui::{self, Color32};
use tracing::debug;

/// Registry of named style presets.
pub trait ThemeRegistry {
    /// Names accepted by [`ThemeRegistry::apply`].
    fn names(&self) -> Vec<&str>;

    /// Apply `name` onto `style`. Returns `false` — with `style` untouched —
    /// when the name is not in the registry.
    fn apply(&self, style: &mut egui::Style, name: &str) -> bool;
}

/// One preset's colors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub bg: Color32,
    pub widget_bg: Color32,
    pub fg: Color32,
    pub accent: Color32,
    pub danger: Color32,
    pub dark: bool,
}

impl Palette {
    /// VS Code Dark+ inspired.
    fn dark() -> Self {
        Self {
            bg: Color32::from_rgb(30, 30, 30),        // #1e1e1e
            widget_bg: Color32::from_rgb(60, 60, 60), // #3c3c3c
            fg: Color32::from_rgb(204, 204, 204),     // #cccccc
            accent: Color32::from_rgb(0, 120, 212),   // #0078d4
            danger: Color32::from_rgb(239, 68, 68),   // red-500
            dark: true,
        }
    }

    fn light() -> Self {
        Self {
            bg: Color32::from_rgb(243, 243, 243),        // #f3f3f3
            widget_bg: Color32::from_rgb(255, 255, 255), // #ffffff
            fg: Color32::from_rgb(51, 51, 51),           // #333333
            accent: Color32::from_rgb(0, 120, 212),      // #0078d4
            danger: Color32::from_rgb(136, 0, 0),        // #880000
            dark: false,
        }
    }

    /// Zinc-and-blue dark palette.
    fn zinc() -> Self {
        Self {
            bg: Color32::from_rgb(24, 24, 27),        // zinc-900
            widget_bg: Color32::from_rgb(39, 39, 42), // zinc-800
            fg: Color32::from_rgb(250, 250, 250),     // zinc-50
            accent: Color32::from_rgb(59, 130, 246),  // blue-500
            danger: Color32::from_rgb(239, 68, 68),   // red-500
            dark: true,
        }
    }

    pub(crate) fn apply_to(&self, style: &mut egui::Style) {
        style.visuals = if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style.visuals.override_text_color = Some(self.fg);
        style.visuals.panel_fill = self.bg;
        style.visuals.window_fill = self.bg;
        style.visuals.extreme_bg_color = self.widget_bg;
        style.visuals.widgets.noninteractive.bg_fill = self.widget_bg;
        style.visuals.widgets.inactive.bg_fill = self.widget_bg;
        style.visuals.widgets.hovered.bg_fill = self.accent;
        style.visuals.widgets.active.bg_fill = self.accent;
        style.visuals.selection.bg_fill = self.accent.linear_multiply(0.5);
    }
}

/// The built-in presets.
pub struct BuiltinThemes;

impl BuiltinThemes {
    pub(crate) fn palette(name: &str) -> Option<Palette> {
        match name {
            "dark" => Some(Palette::dark()),
            "light" => Some(Palette::light()),
            "zinc" => Some(Palette::zinc()),
            _ => None,
        }
    }

    /// Danger color used for the error banner when no preset is active.
    pub(crate) fn default_danger() -> Color32 {
        Palette::dark().danger
    }
}

impl ThemeRegistry for BuiltinThemes {
    fn names(&self) -> Vec<&str> {
        vec!["dark", "light", "zinc"]
    }

    fn apply(&self, style: &mut egui::Style, name: &str) -> bool {
        match Self::palette(name) {
            Some(palette) => {
                palette.apply_to(style);
                true
            }
            None => {
                debug!("theme '{}' not in registry, keeping current style", name);
                false
            }
        }
    }
}
