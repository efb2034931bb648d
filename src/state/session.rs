//! Session State
//!
//! Who is logged in, whether the login form is open, and what has been typed
//! into it. The API client lives here too since its token follows the session.

use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, Session};
use crate::services::ApiClient;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    LoggedOut { form_visible: bool },
    LoggedIn(Session),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    auth: AuthState,
    form: Credentials,
    client: ApiClient,
}

impl SessionState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthState::LoggedOut { form_visible: false },
            form: Credentials::default(),
            client,
        }
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn user(&self) -> Option<&Session> {
        match &self.auth {
            AuthState::LoggedIn(session) => Some(session),
            AuthState::LoggedOut { .. } => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user().is_some()
    }

    pub fn login_form_visible(&self) -> bool {
        matches!(self.auth, AuthState::LoggedOut { form_visible: true })
    }

    /// Client to use for the next request
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn form(&self) -> &Credentials {
        &self.form
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.form.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
    }

    pub fn show_login_form(&mut self) {
        if let AuthState::LoggedOut { form_visible } = &mut self.auth {
            *form_visible = true;
        }
    }

    /// Cancel: typed credentials are kept
    pub fn hide_login_form(&mut self) {
        if let AuthState::LoggedOut { form_visible } = &mut self.auth {
            *form_visible = false;
        }
    }

    /// Credentials to submit, provided the login form is open
    pub fn begin_login(&self) -> ApiResult<Credentials> {
        match self.auth {
            AuthState::LoggedIn(_) => Err(ApiError::InvalidTransition("already logged in")),
            AuthState::LoggedOut { form_visible: false } => {
                Err(ApiError::InvalidTransition("login form is not open"))
            }
            AuthState::LoggedOut { form_visible: true } => Ok(self.form.clone()),
        }
    }

    /// Enter `LoggedIn`: install the token and wipe the typed credentials
    pub fn log_in(&mut self, session: Session) {
        self.client.set_token(session.token.clone());
        self.form = Credentials::default();
        self.auth = AuthState::LoggedIn(session);
    }

    pub fn log_out(&mut self) {
        self.client.clear_token();
        self.form = Credentials::default();
        self.auth = AuthState::LoggedOut { form_visible: false };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session { name: "Superuser".into(), token: "t0k".into(), username: Some("root".into()) }
    }

    fn state() -> SessionState {
        SessionState::new(ApiClient::new("http://localhost:3001/api"))
    }

    #[test]
    fn test_starts_logged_out_with_hidden_form() {
        let s = state();
        assert_eq!(s.auth(), &AuthState::LoggedOut { form_visible: false });
        assert!(s.client().token().is_none());
    }

    #[test]
    fn test_show_hide_keeps_credentials() {
        let mut s = state();
        s.show_login_form();
        s.set_username("root");
        s.set_password("salainen");
        s.hide_login_form();

        assert!(!s.login_form_visible());
        assert_eq!(s.form().username, "root");
        assert_eq!(s.form().password, "salainen");
    }

    #[test]
    fn test_begin_login_requires_open_form() {
        let mut s = state();
        assert!(matches!(s.begin_login(), Err(ApiError::InvalidTransition(_))));

        s.show_login_form();
        s.set_username("root");
        assert_eq!(s.begin_login().unwrap().username, "root");
    }

    #[test]
    fn test_log_in_installs_token_and_clears_form() {
        let mut s = state();
        s.show_login_form();
        s.set_username("root");
        s.set_password("salainen");
        s.log_in(session());

        assert!(s.is_logged_in());
        assert_eq!(s.client().token(), Some("t0k"));
        assert_eq!(s.form(), &Credentials::default());
        assert!(matches!(s.begin_login(), Err(ApiError::InvalidTransition("already logged in"))));

        // form toggles are ignored while logged in
        s.show_login_form();
        assert!(s.is_logged_in());
    }

    #[test]
    fn test_log_out_drops_token() {
        let mut s = state();
        s.log_in(session());
        s.log_out();

        assert_eq!(s.user(), None);
        assert_eq!(s.client().token(), None);
    }
}
