// Sign-in form
// Collects credentials and feeds a successful login into the session store

use super::store::SessionStore;
use crate::api::{ApiError, AuthApi, LoginRequest, LoginResponse};
use crate::notice::NoticeQueue;
use tracing::warn;

/// Description used when the API gives no message of its own
pub const SIGN_IN_FAILED_FALLBACK: &str = "Failed to sign in";

/// Credentials being entered on the sign-in page
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl SignInForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate credentials and mark the session as loading
    ///
    /// Returns `None` if a field is empty (a validation notice is raised)
    /// or a sign-in is already in progress.
    pub fn begin(&mut self, session: &SessionStore, notices: &mut NoticeQueue) -> Option<LoginRequest> {
        if session.snapshot().is_loading {
            return None;
        }

        if self.email.trim().is_empty() || self.password.is_empty() {
            notices.destructive("Validation Error", "Please enter your email and password");
            return None;
        }

        session.set_is_loading(true);
        Some(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    /// Apply the login result to the session
    ///
    /// Returns whether the user is now signed in.
    pub fn finish(
        &mut self,
        result: Result<LoginResponse, ApiError>,
        session: &SessionStore,
        notices: &mut NoticeQueue,
    ) -> bool {
        let signed_in = match result {
            Ok(LoginResponse { user, token }) => {
                notices.success("Welcome back", format!("Signed in as {}", user.name));
                session.login(user, token);
                self.password.clear();
                true
            }
            Err(e) => {
                warn!(error = %e, "Sign-in failed");
                let message = e.user_message().unwrap_or(SIGN_IN_FAILED_FALLBACK);
                notices.destructive("Sign-in failed", message);
                false
            }
        };

        session.set_is_loading(false);
        signed_in
    }

    /// Validate, call the API and apply the result in one step
    pub async fn submit<A>(
        &mut self,
        api: &A,
        session: &SessionStore,
        notices: &mut NoticeQueue,
    ) -> bool
    where
        A: AuthApi + ?Sized,
    {
        let Some(request) = self.begin(session, notices) else {
            return false;
        };

        let result = api.login(&request).await;
        self.finish(result, session, notices)
    }
}
