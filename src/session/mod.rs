// Session management module
// Handles the signed-in user, bearer token, persistence and sign-in

pub mod persist;
pub mod sign_in;
pub mod store;

pub use sign_in::{SignInForm, SIGN_IN_FAILED_FALLBACK};
pub use store::{RehydrateOutcome, Session, SessionStore, User, SNAPSHOT_KEY, TOKEN_KEY};
