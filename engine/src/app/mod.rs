//! The [`App`]: single owner of deck, navigation, presentation mode and form.
//!
//! The TUI layer (`folio_tui`) reads state from `App` and forwards input back
//! to it. No rendering logic lives here.
//!
//! # Control flow
//!
//! ```text
//! RawInput -> GestureNormalizer -> Command -> Navigator::apply -> Transition
//!                      \-> NativeScroll (mobile)          \-> SlideEffect
//! ```
//!
//! When the running [`SlideEffect`] finishes, [`App::advance`] hands its ticket
//! back to the navigator, which releases the debounce lock.

use std::time::{Duration, Instant};

use folio_store::{StoreClient, StoreError};
use folio_types::ui::{SlideEffect, UiOptions};
use folio_types::{Command, Deck, Position, ResponsiveMode};

use crate::config::{FolioConfig, NavigationSettings};
use crate::contact::ContactForm;
use crate::content::{self, NavLink};
use crate::gesture::{Gesture, GestureNormalizer, RawInput};
use crate::native_scroll::NativeScroll;
use crate::navigator::{Navigator, Transition, TransitionTicket};


/// Slide animation tied to the transition it presents.
#[derive(Debug, Clone)]
struct ActiveEffect {
    effect: SlideEffect,
    ticket: TransitionTicket,
}

#[derive(Debug)]
pub struct App {
    deck: Deck,
    navigator: Navigator,
    gestures: GestureNormalizer,
    settings: NavigationSettings,
    ui_options: UiOptions,
    mode: ResponsiveMode,
    viewport: (u16, u16),
    native: NativeScroll,
    effect: Option<ActiveEffect>,
    contact: ContactForm,
    store: Option<StoreClient>,
    should_quit: bool,
    last_tick: Instant,
    running_for: Duration,
}

impl App {
    /// Build the deck and initial state for a `width` x `height` viewport.
    #[must_use]
    pub fn new(config: &FolioConfig, width: u16, height: u16) -> Self {
        let settings = config.navigation_settings();
        let deck = content::build_deck();
        let mode = settings.breakpoint.detect(width);
        let native = NativeScroll::new(deck.page_count(), height);

        let store = match config.store_config().and_then(StoreClient::new) {
            Ok(client) => {
                tracing::info!(endpoint = %client.endpoint(), "Contact store configured");
                Some(client)
            }
            Err(StoreError::NotConfigured) => {
                tracing::info!("Contact store not configured; submissions disabled");
                None
            }
            Err(err) => {
                tracing::warn!(%err, "Contact store unavailable");
                None
            }
        };

        tracing::info!(sections = deck.len(), ?mode, width, height, "Deck ready");

        Self {
            gestures: GestureNormalizer::new(&settings),
            navigator: Navigator::new(),
            ui_options: config.ui_options(),
            settings,
            deck,
            mode,
            viewport: (width, height),
            native,
            effect: None,
            contact: ContactForm::new(),
            store,
            should_quit: false,
            last_tick: Instant::now(),
            running_for: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.navigator.position()
    }

    #[must_use]
    pub fn active_section(&self) -> usize {
        self.navigator.active_section()
    }

    #[must_use]
    pub fn horizontal_index(&self) -> usize {
        self.navigator.horizontal_index()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    #[must_use]
    pub fn responsive_mode(&self) -> ResponsiveMode {
        self.mode
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    #[must_use]
    pub fn transition_effect(&self) -> Option<&SlideEffect> {
        self.effect.as_ref().map(|active| &active.effect)
    }

    #[must_use]
    pub fn native_scroll(&self) -> &NativeScroll {
        &self.native
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    #[must_use]
    pub fn store_configured(&self) -> bool {
        self.store.is_some()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Spinner cadence (~10Hz), independent of render FPS.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        (self.running_for.as_millis() / 100) as usize
    }

    /// Convert a terminal row to the pixel space gestures are measured in.
    #[must_use]
    pub fn row_to_px(&self, row: u16) -> f32 {
        f32::from(row) * self.settings.cell_height_px as f32
    }

    /// The navbar is hidden while a horizontal carousel fills the screen.
    #[must_use]
    pub fn navbar_visible(&self) -> bool {
        self.mode.is_mobile() || !self.deck.slide(self.active_section()).is_horizontal()
    }

    /// Only the brand shows on mobile.
    #[must_use]
    pub fn nav_links_visible(&self) -> bool {
        self.navbar_visible() && !self.mode.is_mobile()
    }

    #[must_use]
    pub fn nav_links(&self) -> [NavLink; 3] {
        content::nav_links(&self.deck)
    }

    /// Section whose panel is at the top of the viewport on mobile, or the
    /// active section on desktop.
    #[must_use]
    pub fn visible_section(&self) -> usize {
        if !self.mode.is_mobile() {
            return self.active_section();
        }
        let page = self.native.current_page();
        (0..self.deck.len())
            .rev()
            .find(|section| self.deck.anchor_page(*section) <= page)
            .unwrap_or(0)
    }

    /// Feed one raw input through the gesture adapter.
    pub fn handle_input(&mut self, input: RawInput) -> Option<Transition> {
        if input.is_scroll_gesture() && self.contact.is_open() && !self.contact.is_submitting()
        {
            self.contact.close();
        }

        let transition = match self.gestures.normalize(input, self.mode) {
            Gesture::Command(command) => self.dispatch(command),
            Gesture::NativeScroll(delta) => {
                self.native.scroll(delta);
                None
            }
            Gesture::None => None,
        };

        // The form is drawn only over the contact section.
        if self.contact.is_open() && self.visible_section() != self.deck.last_section() {
            self.contact.close();
        }
        transition
    }

    /// Ungated, site-wide navigate request (navbar links and the like).
    pub fn navigate_to_section(&mut self, section: usize) -> Option<Transition> {
        self.handle_input(RawInput::Navigate { section })
    }

    fn dispatch(&mut self, command: Command) -> Option<Transition> {
        if !self.mode.intercepts_gestures() {
            if let Command::JumpTo { section, .. } = command {
                let last = self.deck.last_section();
                if section > last {
                    tracing::warn!(requested = section, clamped = last, "Jump target out of range");
                }
                self.native
                    .scroll_to_page(self.deck.anchor_page(section.min(last)));
            }
            return None;
        }

        let transition = self.navigator.apply(&self.deck, command);
        if let Transition::Moved { from, to, ticket } = transition {
            let duration = if self.ui_options.reduced_motion {
                Duration::ZERO
            } else {
                self.settings.transition
            };
            let effect = if from.section == to.section {
                SlideEffect::horizontal(from.horizontal, to.horizontal, duration)
            } else {
                SlideEffect::vertical(from.section, to.section, duration)
            };
            self.effect = Some(ActiveEffect { effect, ticket });
        }
        Some(transition)
    }

    /// Whether Enter should open the contact form right now.
    #[must_use]
    pub fn can_open_contact(&self) -> bool {
        self.visible_section() == self.deck.last_section() && !self.contact.is_open()
    }

    pub fn open_contact(&mut self) {
        if self.can_open_contact() {
            self.contact.open();
        }
    }

    pub fn submit_contact(&mut self) {
        self.contact.submit(self.store.as_ref());
    }

    /// Recompute the responsive mode for a new viewport size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.native.set_page_rows(height);

        let mode = self.settings.breakpoint.detect(width);
        if mode == self.mode {
            return;
        }
        tracing::info!(from = ?self.mode, to = ?mode, width, "Responsive mode changed");
        self.mode = mode;

        match mode {
            ResponsiveMode::Mobile => {
                self.navigator.release();
                self.effect = None;
                let position = self.navigator.position();
                let mut page = self.deck.anchor_page(position.section);
                if self.deck.slide(position.section).is_horizontal() {
                    page += position.horizontal;
                }
                self.native.scroll_to_page(page);
            }
            ResponsiveMode::Desktop => {
                self.navigator.reset(&self.deck, self.navigator.position());
            }
        }
    }

    /// Advance animations and poll background work by wall-clock time.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(elapsed);
    }

    /// Advance animations and poll background work by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        self.running_for = self.running_for.saturating_add(elapsed);
        if let Some(active) = self.effect.as_mut() {
            active.effect.advance(elapsed);
            if active.effect.is_finished() {
                let ticket = active.ticket;
                self.effect = None;
                self.navigator.settle(ticket);
            }
        }
        self.contact.tick(elapsed);
    }
}
