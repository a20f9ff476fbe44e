//! Desktop / mobile presentation switch.

/// Presentation mode derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsiveMode {
    /// Snap-scroll: gestures drive the section state machine.
    #[default]
    Desktop,
    /// Native scroll: gestures scroll the stacked document directly.
    Mobile,
}

impl ResponsiveMode {
    /// The one capability the input layer consults before turning raw
    /// wheel/touch/dot input into state-machine commands.
    #[must_use]
    pub const fn intercepts_gestures(self) -> bool {
        matches!(self, Self::Desktop)
    }

    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Width breakpoint between mobile and desktop.
///
/// Terminal columns are converted to pixels with `cell_width_px`, so the
/// familiar 768 px breakpoint maps to 96 columns at 8 px per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub width_px: u32,
    pub cell_width_px: u32,
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self {
            width_px: 768,
            cell_width_px: 8,
        }
    }
}

impl Breakpoint {
    #[must_use]
    pub fn detect(self, columns: u16) -> ResponsiveMode {
        let width_px = u32::from(columns).saturating_mul(self.cell_width_px.max(1));
        if width_px < self.width_px {
            ResponsiveMode::Mobile
        } else {
            ResponsiveMode::Desktop
        }
    }
}
