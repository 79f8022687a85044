use leptos::prelude::*;

/// Signed-in user as shown in the header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl UserInfo {
    /// Canned user returned by the auth stub
    pub fn demo() -> Self {
        Self {
            id: "mock-user-id".to_string(),
            email: "user@example.com".to_string(),
            name: "Demo User".to_string(),
        }
    }
}

/// Auth stub: always signed in as the demo user; no backend.
#[derive(Clone, Copy)]
pub struct AuthContext {
    current_user: RwSignal<Option<UserInfo>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            current_user: RwSignal::new(Some(UserInfo::demo())),
        }
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.current_user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.with(|u| u.is_some())
    }

    /// Sign-out is a no-op: the stub user stays signed in.
    pub fn sign_out(&self) {
        log::info!("sign out requested (auth stub, session unchanged)");
    }

    /// Sign-in/sign-up forms end up here after local validation.
    pub fn sign_in(&self, email: &str) {
        log::info!("sign in as {email} (auth stub)");
        self.current_user.set(Some(UserInfo::demo()));
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new());
    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_stub_user_is_signed_in() {
        Owner::new().with(|| {
            let auth = AuthContext::new();
            assert!(auth.is_authenticated());
            assert_eq!(auth.current_user(), Some(UserInfo::demo()));
        });
    }

    #[test]
    fn test_sign_out_keeps_user() {
        Owner::new().with(|| {
            let auth = AuthContext::new();
            auth.sign_out();
            let user = auth.current_user().unwrap();
            assert_eq!(user.id, "mock-user-id");
            assert_eq!(user.email, "user@example.com");
            assert_eq!(user.name, "Demo User");
        });
    }
}
