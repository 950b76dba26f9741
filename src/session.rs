// src/session.rs
// Ambient session state (current user, theme) as an explicit context value.
// Callers pass it to whatever needs it; there is no global.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Auth-state transitions the context reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(UserProfile),
    SignedOut,
}

#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<UserProfile>,
    theme: Theme,
}

impl SessionContext {
    /// App-start lifecycle step: no user yet, caller-chosen theme.
    pub fn initialize(theme: Theme) -> Self {
        Self { user: None, theme }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Refresh on auth-state change; sign-out doubles as teardown.
    pub fn apply_auth_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(user) => self.user = Some(user),
            AuthEvent::SignedOut => self.teardown(),
        }
    }

    pub fn teardown(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            email: "someone@example.com".to_string(),
        }
    }

    #[test]
    fn sign_in_then_sign_out() {
        let mut ctx = SessionContext::initialize(Theme::Dark);
        assert!(!ctx.is_signed_in());

        ctx.apply_auth_event(AuthEvent::SignedIn(user()));
        assert_eq!(ctx.user().map(|u| u.id.as_str()), Some("u-1"));
        assert_eq!(ctx.theme(), Theme::Dark);

        ctx.apply_auth_event(AuthEvent::SignedOut);
        assert!(!ctx.is_signed_in());
    }

    #[test]
    fn teardown_keeps_theme() {
        let mut ctx = SessionContext::initialize(Theme::Light);
        ctx.apply_auth_event(AuthEvent::SignedIn(user()));
        ctx.set_theme(Theme::Dark);
        ctx.teardown();
        assert_eq!(ctx.theme(), Theme::Dark);
        assert!(ctx.user().is_none());
    }
}
