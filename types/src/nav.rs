//! Navigation commands and positions.

/// Direction of a step gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Down the deck / right in a horizontal group.
    Forward,
    /// Up the deck / left in a horizontal group.
    Backward,
}

impl Direction {
    /// Positive deltas move forward, like a wheel scrolled down.
    #[must_use]
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Where a jump request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpSource {
    /// A click on the dot-indicator rail. Debounced while a transition settles.
    DotRail,
    /// A site-wide navigate request (e.g. a navbar link). Always honoured.
    External,
}

impl JumpSource {
    #[must_use]
    pub const fn is_gated(self) -> bool {
        matches!(self, Self::DotRail)
    }
}

/// A normalized navigation request fed to the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Step(Direction),
    JumpTo { section: usize, source: JumpSource },
}

impl Command {
    #[must_use]
    pub const fn jump(section: usize, source: JumpSource) -> Self {
        Self::JumpTo { section, source }
    }

    /// Whether the debounce lock can drop this command.
    #[must_use]
    pub const fn is_gated(self) -> bool {
        match self {
            Self::Step(_) => true,
            Self::JumpTo { source, .. } => source.is_gated(),
        }
    }
}

/// Addressable position in a deck.
///
/// `horizontal` only means something while `section` is a horizontal group;
/// on a vertical slide it holds whatever value it had last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub section: usize,
    pub horizontal: usize,
}

impl Position {
    #[must_use]
    pub const fn new(section: usize, horizontal: usize) -> Self {
        Self {
            section,
            horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Direction, JumpSource};

    #[test]
    fn only_external_jumps_bypass_the_gate() {
        assert!(Command::Step(Direction::Forward).is_gated());
        assert!(Command::jump(2, JumpSource::DotRail).is_gated());
        assert!(!Command::jump(2, JumpSource::External).is_gated());
    }

    #[test]
    fn delta_sign_picks_direction() {
        assert_eq!(Direction::from_delta(42.0), Direction::Forward);
        assert_eq!(Direction::from_delta(-42.0), Direction::Backward);
        assert_eq!(Direction::Forward.reverse(), Direction::Backward);
    }
}
