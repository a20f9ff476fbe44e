//! Contact form state and submission lifecycle.

use std::time::Duration;

use tokio::sync::oneshot;
use unicode_segmentation::UnicodeSegmentation;

use folio_store::{StoreClient, StoreError};
use folio_types::{ContactDraft, ContactField};

/// How long the confirmation stays up before the form closes itself.
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_secs(2);

const MAX_FIELD_CHARS: usize = 200;

#[derive(Debug)]
enum FormPhase {
    Closed,
    Editing { error: Option<String> },
    Submitting { result: oneshot::Receiver<Result<(), StoreError>> },
    Sent { closes_in: Duration },
}

/// What the renderer needs to know about the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus<'a> {
    Closed,
    Editing { error: Option<&'a str> },
    Submitting,
    Sent,
}

#[derive(Debug)]
pub struct ContactForm {
    draft: ContactDraft,
    focus: ContactField,
    phase: FormPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            focus: ContactField::Name,
            phase: FormPhase::Closed,
        }
    }

    #[must_use]
    pub fn status(&self) -> FormStatus<'_> {
        match &self.phase {
            FormPhase::Closed => FormStatus::Closed,
            FormPhase::Editing { error } => FormStatus::Editing {
                error: error.as_deref(),
            },
            FormPhase::Submitting { .. } => FormStatus::Submitting,
            FormPhase::Sent { .. } => FormStatus::Sent,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, FormPhase::Closed)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    #[must_use]
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn open(&mut self) {
        if !self.is_open() {
            self.focus = ContactField::Name;
            self.phase = FormPhase::Editing { error: None };
        }
    }

    /// Close the form, keeping whatever was typed. A running submission
    /// keeps the form open.
    pub fn close(&mut self) {
        if !self.is_submitting() {
            self.phase = FormPhase::Closed;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.is_editing() || c.is_control() {
            return;
        }
        let value = self.draft.value_mut(self.focus);
        if value.chars().count() < MAX_FIELD_CHARS {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_editing() {
            return;
        }
        let value = self.draft.value_mut(self.focus);
        if let Some((idx, _)) = value.grapheme_indices(true).next_back() {
            value.truncate(idx);
        }
    }

    /// Validate and start one best-effort write.
    ///
    /// Validation problems and a missing store are reported inline without a
    /// request. Must be called inside a tokio runtime.
    pub fn submit(&mut self, store: Option<&StoreClient>) {
        if !self.is_editing() {
            return;
        }

        let submission = match self.draft.validate() {
            Ok(submission) => submission,
            Err(err) => {
                self.phase = FormPhase::Editing {
                    error: Some(err.to_string()),
                };
                return;
            }
        };

        let Some(store) = store else {
            self.phase = FormPhase::Editing {
                error: Some(StoreError::NotConfigured.to_string()),
            };
            return;
        };

        let client = store.clone();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = client.insert_contact(&submission).await;
            let _ = tx.send(result);
        });
        self.phase = FormPhase::Submitting { result: rx };
    }

    /// Poll a running submission and run the post-success close timer.
    pub fn tick(&mut self, elapsed: Duration) {
        match &mut self.phase {
            FormPhase::Submitting { result } => match result.try_recv() {
                Ok(Ok(())) => {
                    tracing::info!("Contact request sent");
                    self.draft.clear();
                    self.focus = ContactField::Name;
                    self.phase = FormPhase::Sent {
                        closes_in: SUCCESS_CLOSE_DELAY,
                    };
                }
                Ok(Err(err)) => {
                    tracing::warn!(%err, "Contact request failed");
                    self.phase = FormPhase::Editing {
                        error: Some(err.to_string()),
                    };
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    tracing::warn!("Contact submission task ended without a result");
                    self.phase = FormPhase::Editing {
                        error: Some("submission was interrupted".to_string()),
                    };
                }
            },
            FormPhase::Sent { closes_in } => {
                *closes_in = closes_in.saturating_sub(elapsed);
                if closes_in.is_zero() {
                    self.phase = FormPhase::Closed;
                }
            }
            FormPhase::Closed | FormPhase::Editing { .. } => {}
        }
    }

    fn is_editing(&self) -> bool {
        matches!(self.phase, FormPhase::Editing { .. })
    }
}
