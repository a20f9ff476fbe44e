//! Core engine for Folio - navigation state machine and orchestration.
//!
//! This crate contains the `App` without TUI dependencies, providing:
//!
//! - **Deck**: the fixed slide list built from static content providers
//! - **Navigation**: the [`Navigator`] transition function and its debounce lock
//! - **Gestures**: wheel/touch/keyboard normalization into [`Command`]s
//! - **Responsive mode**: snap-scroll on desktop, native scroll on mobile
//! - **Contact form**: draft editing and a best-effort write to the record store
//!
//! # Architecture
//!
//! `App` is owned by the CLI frame loop and mutated only there. Background
//! work (the contact write) runs on a tokio task and is polled from
//! [`App::tick`].

mod app;
mod config;
mod contact;
pub mod content;
mod gesture;
mod native_scroll;
mod navigator;

pub use app::App;
pub use config::{
    AppConfig, ConfigError, DEFAULT_CELL_HEIGHT_PX, DEFAULT_TOUCH_THRESHOLD,
    DEFAULT_TRANSITION_MS, DEFAULT_WHEEL_THRESHOLD, FolioConfig, NavigationConfig,
    NavigationSettings, StoreSection, config_path, expand_env_vars,
};
pub use contact::{ContactForm, FormStatus, SUCCESS_CLOSE_DELAY};
pub use content::NavLink;
pub use gesture::{Gesture, GestureNormalizer, NativeScrollDelta, RawInput, WHEEL_NOTCH_PX};
pub use native_scroll::NativeScroll;
pub use navigator::{Navigator, Transition, TransitionLock, TransitionTicket};

pub use folio_store::{self, StoreClient, StoreConfig, StoreError};
pub use folio_types::{
    Accent, Breakpoint, Command, ContactDraft, ContactField, ContactSubmission,
    ContactValidationError, Deck, Direction, HorizontalGroup, JumpSource, Position,
    ResponsiveMode, Slide, SlideContent,
    ui::{AnimPhase, SlideAxis, SlideEffect, UiOptions},
};
