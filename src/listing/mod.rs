// Agent listing module
// Draft editing, validation and the create-agent form state machine

pub mod draft;
pub mod form;

pub use draft::{AgentListingDraft, ListingField, ValidationError};
pub use form::{CreateAgentForm, FormPhase, SubmitOutcome, CREATE_FAILED_FALLBACK};
