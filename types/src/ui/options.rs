/// Accessibility switches read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Transitions complete instantly instead of animating.
    pub reduced_motion: bool,
}
