// Create-agent form state machine
// Editing -> Submitting -> Succeeded, falling back to Editing on failure

use super::draft::{AgentListingDraft, ListingField, ValidationError};
use crate::api::{ApiError, CreateAgentRequest, ListingApi};
use crate::navigation::routes;
use crate::notice::NoticeQueue;
use crate::router::Router;
use tracing::{info, warn};

/// Description used when the API gives no message of its own
pub const CREATE_FAILED_FALLBACK: &str = "Failed to create agent";

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting edits
    Editing,
    /// Request in flight; submit is disabled
    Submitting,
    /// Listing created; the form is about to be discarded
    Succeeded,
}

/// What a submit attempt ended with
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Draft failed validation; nothing was sent
    Invalid(ValidationError),
    /// A request is already in flight; nothing was sent
    AlreadySubmitting,
    /// Listing created
    Created,
    /// Request failed; the message shown to the user
    Failed(String),
}

/// State of the create-agent page
#[derive(Debug, Clone)]
pub struct CreateAgentForm {
    draft: AgentListingDraft,
    phase: FormPhase,
}

impl Default for CreateAgentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateAgentForm {
    /// Create a form with an empty draft
    pub fn new() -> Self {
        Self {
            draft: AgentListingDraft::new(),
            phase: FormPhase::Editing,
        }
    }

    /// Current draft
    pub fn draft(&self) -> &AgentListingDraft {
        &self.draft
    }

    /// Current phase
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Replace the text of `field`
    pub fn set_field(&mut self, field: ListingField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Mutable text of `field`, for binding to an input widget
    pub fn field_mut(&mut self, field: ListingField) -> &mut String {
        self.draft.get_mut(field)
    }

    /// Validate the draft and, if it passes, enter `Submitting`
    ///
    /// Returns the payload to send, or `None` when the draft is invalid
    /// (a validation notice is raised) or a request is already in flight.
    pub fn begin_submit(&mut self, notices: &mut NoticeQueue) -> Option<CreateAgentRequest> {
        self.try_begin(notices).ok()
    }

    fn try_begin(&mut self, notices: &mut NoticeQueue) -> Result<CreateAgentRequest, SubmitOutcome> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        match self.draft.to_request() {
            Ok(request) => {
                self.phase = FormPhase::Submitting;
                Ok(request)
            }
            Err(e) => {
                notices.destructive("Validation Error", e.to_string());
                Err(SubmitOutcome::Invalid(e))
            }
        }
    }

    /// Apply the result of the create request
    ///
    /// On success a confirmation notice is raised and the router moves to
    /// the listings overview. On failure an error notice is raised and the
    /// draft is left untouched for a retry. Loading is cleared either way.
    pub fn finish_submit(
        &mut self,
        result: Result<(), ApiError>,
        notices: &mut NoticeQueue,
        router: &mut Router,
    ) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.phase = FormPhase::Succeeded;
                info!(name = %self.draft.name, "Agent listing created");
                notices.success("Success", "Agent created successfully");
                router.push(routes::MY_AGENTS);
                SubmitOutcome::Created
            }
            Err(e) => {
                self.phase = FormPhase::Editing;
                warn!(error = %e, "Failed to create agent listing");
                let message = e
                    .user_message()
                    .unwrap_or(CREATE_FAILED_FALLBACK)
                    .to_string();
                notices.destructive("Error", message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Validate, send and apply the result in one step
    pub async fn submit<A>(
        &mut self,
        api: &A,
        token: Option<&str>,
        notices: &mut NoticeQueue,
        router: &mut Router,
    ) -> SubmitOutcome
    where
        A: ListingApi + ?Sized,
    {
        let request = match self.try_begin(notices) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = api.create_agent(token, &request).await;
        self.finish_submit(result, notices, router)
    }

    /// Abandon the draft and return to the listings overview
    pub fn cancel(&mut self, router: &mut Router) {
        router.push(routes::MY_AGENTS);
    }
}
