//! Login and registration controllers
//!
//! Success writes credential and identity to the session store as one unit
//! and only then reports a navigation effect, so the session is persisted
//! before the auth view is left.

use std::sync::Arc;

use validator::Validate;

use crate::api::{Backend, LoginRequest, RegisterRequest};
use crate::models::Session;
use crate::session::SessionStore;

use super::{Nav, validation_summary};

/// Login form controller
pub struct LoginController {
    api: Arc<dyn Backend>,
    session: SessionStore,
    pub form: LoginRequest,
    error: Option<String>,
}

impl LoginController {
    pub fn new(api: Arc<dyn Backend>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            form: LoginRequest {
                username: String::new(),
                password: String::new(),
            },
            error: None,
        }
    }

    /// Inline error to display, if the last submit failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form. Returns the navigation effect on success; on failure
    /// the error is kept for inline display and `None` is returned.
    pub async fn submit(&mut self) -> Option<Nav> {
        self.error = None;

        if let Err(errors) = self.form.validate() {
            self.error = Some(validation_summary(&errors));
            return None;
        }

        match self.api.login(&self.form).await {
            Ok(auth) => {
                self.session.set(&Session {
                    user: auth.user,
                    token: auth.token,
                });
                Some(Nav::Home)
            }
            Err(err) => {
                self.error = Some(err.display_message());
                None
            }
        }
    }
}

/// Registration form controller
pub struct RegisterController {
    api: Arc<dyn Backend>,
    session: SessionStore,
    pub form: RegisterRequest,
    error: Option<String>,
}

impl RegisterController {
    pub fn new(api: Arc<dyn Backend>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            form: RegisterRequest {
                email: String::new(),
                password: String::new(),
                name: String::new(),
            },
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self) -> Option<Nav> {
        self.error = None;

        if let Err(errors) = self.form.validate() {
            self.error = Some(validation_summary(&errors));
            return None;
        }

        match self.api.register(&self.form).await {
            Ok(auth) => {
                self.session.set(&Session {
                    user: auth.user,
                    token: auth.token,
                });
                Some(Nav::Home)
            }
            Err(err) => {
                self.error = Some(err.display_message());
                None
            }
        }
    }
}

/// Log out: clear the persisted session and send the user to the login view
pub fn logout(session: &SessionStore) -> Nav {
    session.clear();
    Nav::Login
}
