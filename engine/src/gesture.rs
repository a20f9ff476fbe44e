//! Raw input to navigation commands.
//!
//! The normalizer is the only adapter between pointer/keyboard input and the
//! [`Navigator`](crate::navigator::Navigator). It asks one question of the
//! presentation mode, [`ResponsiveMode::intercepts_gestures`]: when it is
//! false the input is handed to native scrolling instead of becoming a
//! command. External navigate requests are the exception and always pass.

use folio_types::{Command, Direction, JumpSource, ResponsiveMode};

use crate::config::NavigationSettings;

/// Pixel delta reported for one terminal wheel notch.
pub const WHEEL_NOTCH_PX: f32 = 48.0;

/// Pointer and keyboard input in device-independent terms.
///
/// Vertical coordinates are in pixels, so thresholds match the browser
/// values they were tuned against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Positive `delta_y` scrolls down.
    Wheel { delta_y: f32 },
    TouchStart { y: f32 },
    TouchMove { y: f32 },
    TouchEnd,
    /// One arrow/`j`/`k` style step.
    KeyStep(Direction),
    /// PageUp/PageDown.
    KeyPage(Direction),
    DotClick { section: usize },
    /// Site-wide "navigate to section" request.
    Navigate { section: usize },
}

impl RawInput {
    /// Wheel and drag input. An open contact form closes on these.
    #[must_use]
    pub const fn is_scroll_gesture(self) -> bool {
        matches!(self, Self::Wheel { .. } | Self::TouchMove { .. })
    }
}

/// Native scroll request produced when gestures are not intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeScrollDelta {
    Rows(i32),
    Pages(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Command(Command),
    NativeScroll(NativeScrollDelta),
    None,
}

#[derive(Debug, Clone)]
pub struct GestureNormalizer {
    wheel_threshold: f32,
    touch_threshold: f32,
    cell_height_px: f32,
    touch_start_y: Option<f32>,
    touch_last_y: Option<f32>,
}

impl GestureNormalizer {
    #[must_use]
    pub fn new(settings: &NavigationSettings) -> Self {
        Self {
            wheel_threshold: settings.wheel_threshold,
            touch_threshold: settings.touch_threshold,
            cell_height_px: settings.cell_height_px.max(1) as f32,
            touch_start_y: None,
            touch_last_y: None,
        }
    }

    pub fn normalize(&mut self, input: RawInput, mode: ResponsiveMode) -> Gesture {
        let intercept = mode.intercepts_gestures();
        match input {
            RawInput::Navigate { section } => {
                Gesture::Command(Command::jump(section, JumpSource::External))
            }
            RawInput::DotClick { section } if intercept => {
                Gesture::Command(Command::jump(section, JumpSource::DotRail))
            }
            RawInput::DotClick { .. } => Gesture::None,
            RawInput::Wheel { delta_y } => {
                if intercept {
                    step_past(delta_y, self.wheel_threshold)
                } else {
                    self.rows(delta_y)
                }
            }
            RawInput::TouchStart { y } => {
                self.touch_start_y = Some(y);
                self.touch_last_y = Some(y);
                Gesture::None
            }
            RawInput::TouchMove { y } => {
                if intercept {
                    // The start point is kept for the whole drag; the lock
                    // absorbs repeated steps from one long swipe.
                    match self.touch_start_y {
                        Some(start) => step_past(start - y, self.touch_threshold),
                        None => Gesture::None,
                    }
                } else {
                    let Some(last) = self.touch_last_y else {
                        return Gesture::None;
                    };
                    let gesture = self.rows(last - y);
                    if gesture != Gesture::None {
                        self.touch_last_y = Some(y);
                    }
                    gesture
                }
            }
            RawInput::TouchEnd => {
                self.touch_start_y = None;
                self.touch_last_y = None;
                Gesture::None
            }
            RawInput::KeyStep(direction) | RawInput::KeyPage(direction) if intercept => {
                Gesture::Command(Command::Step(direction))
            }
            RawInput::KeyStep(direction) => {
                Gesture::NativeScroll(NativeScrollDelta::Rows(signed(direction)))
            }
            RawInput::KeyPage(direction) => {
                Gesture::NativeScroll(NativeScrollDelta::Pages(signed(direction)))
            }
        }
    }

    fn rows(&self, delta_px: f32) -> Gesture {
        let rows = (delta_px / self.cell_height_px).trunc() as i32;
        if rows == 0 {
            Gesture::None
        } else {
            Gesture::NativeScroll(NativeScrollDelta::Rows(rows))
        }
    }
}

fn step_past(delta: f32, threshold: f32) -> Gesture {
    if delta.abs() > threshold {
        Gesture::Command(Command::Step(Direction::from_delta(delta)))
    } else {
        Gesture::None
    }
}

const fn signed(direction: Direction) -> i32 {
    match direction {
        Direction::Forward => 1,
        Direction::Backward => -1,
    }
}
