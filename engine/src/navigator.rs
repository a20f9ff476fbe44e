//! Section navigation state machine.
//!
//! [`Navigator::apply`] is the single transition function of the deck. Every
//! input adapter funnels into it, and it is the only place `Position` changes
//! apart from [`Navigator::reset`].
//!
//! Moves arm a [`TransitionLock`] that debounces further gated commands until
//! the matching [`TransitionTicket`] is handed back through
//! [`Navigator::settle`], normally by the slide animation finishing.

use folio_types::{Command, Deck, Direction, JumpSource, Position, Slide};

/// Proof of one armed transition. Only the newest ticket can release the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionLock {
    #[default]
    Idle,
    Settling {
        ticket: TransitionTicket,
    },
}

impl TransitionLock {
    #[must_use]
    pub const fn is_settling(self) -> bool {
        matches!(self, Self::Settling { .. })
    }
}

/// Outcome of [`Navigator::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The position changed and the lock is armed with `ticket`.
    Moved {
        from: Position,
        to: Position,
        ticket: TransitionTicket,
    },
    /// A boundary no-op. The lock was not touched.
    Unchanged,
    /// A gated command arrived while the lock was held and was dropped.
    Debounced,
}

impl Transition {
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    #[must_use]
    pub const fn ticket(self) -> Option<TransitionTicket> {
        match self {
            Self::Moved { ticket, .. } => Some(ticket),
            Self::Unchanged | Self::Debounced => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    position: Position,
    lock: TransitionLock,
    next_ticket: u64,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn active_section(&self) -> usize {
        self.position.section
    }

    /// Raw horizontal index. Only meaningful on a horizontal slide.
    #[must_use]
    pub fn horizontal_index(&self) -> usize {
        self.position.horizontal
    }

    #[must_use]
    pub fn lock(&self) -> TransitionLock {
        self.lock
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.lock.is_settling()
    }

    /// Apply one command against `deck`.
    pub fn apply(&mut self, deck: &Deck, command: Command) -> Transition {
        if command.is_gated() && self.lock.is_settling() {
            tracing::debug!(?command, "Dropped command while transition settles");
            return Transition::Debounced;
        }

        let from = self.position;
        let to = match command {
            Command::Step(Direction::Forward) => step_forward(deck, from),
            Command::Step(Direction::Backward) => step_backward(deck, from),
            Command::JumpTo { section, source } => jump_to(deck, from, section, source),
        };

        if to == from {
            return Transition::Unchanged;
        }

        self.position = to;
        let ticket = self.arm();
        if to.section != from.section {
            tracing::info!(from = from.section, to = to.section, "Section changed");
        } else {
            tracing::debug!(
                section = to.section,
                from = from.horizontal,
                to = to.horizontal,
                "Horizontal item changed"
            );
        }
        Transition::Moved { from, to, ticket }
    }

    /// Release the lock if `ticket` is the one currently holding it.
    ///
    /// Returns `false` for stale tickets, which happen when an external jump
    /// re-armed the lock mid-animation.
    pub fn settle(&mut self, ticket: TransitionTicket) -> bool {
        match self.lock {
            TransitionLock::Settling { ticket: held } if held == ticket => {
                self.lock = TransitionLock::Idle;
                true
            }
            _ => {
                tracing::debug!(?ticket, "Ignored stale transition ticket");
                false
            }
        }
    }

    /// Drop any pending lock without a ticket. Used when no animation will run.
    pub fn release(&mut self) {
        self.lock = TransitionLock::Idle;
    }

    /// Move to `position` without animating. The section is clamped to `deck`.
    pub fn reset(&mut self, deck: &Deck, position: Position) {
        let section = position.section.min(deck.last_section());
        let horizontal = deck
            .horizontal_len(section)
            .map_or(position.horizontal, |len| position.horizontal.min(len - 1));
        self.position = Position::new(section, horizontal);
        self.lock = TransitionLock::Idle;
    }

    fn arm(&mut self) -> TransitionTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = TransitionTicket(self.next_ticket);
        self.lock = TransitionLock::Settling { ticket };
        ticket
    }
}

fn step_forward(deck: &Deck, from: Position) -> Position {
    let last = deck.last_section();
    match deck.slide(from.section) {
        Slide::Horizontal(group) if from.horizontal < group.last_index() => {
            Position::new(from.section, from.horizontal + 1)
        }
        _ if from.section < last => {
            let section = from.section + 1;
            let horizontal = if deck.slide(section).is_horizontal() {
                0
            } else {
                from.horizontal
            };
            Position::new(section, horizontal)
        }
        _ => from,
    }
}

fn step_backward(deck: &Deck, from: Position) -> Position {
    match deck.slide(from.section) {
        Slide::Horizontal(_) if from.horizontal > 0 => {
            Position::new(from.section, from.horizontal - 1)
        }
        _ if from.section > 0 => {
            let section = from.section - 1;
            let horizontal = deck
                .horizontal_len(section)
                .map_or(from.horizontal, |len| len - 1);
            Position::new(section, horizontal)
        }
        _ => from,
    }
}

fn jump_to(deck: &Deck, from: Position, section: usize, source: JumpSource) -> Position {
    let last = deck.last_section();
    let section = if section > last {
        tracing::warn!(
            requested = section,
            clamped = last,
            ?source,
            "Jump target out of range"
        );
        last
    } else {
        section
    };

    let horizontal = if deck.slide(section).is_horizontal() {
        0
    } else {
        from.horizontal
    };
    Position::new(section, horizontal)
}
