/// A signed-in user as the survey system sees one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Opaque id from the identity provider.
    pub id: String,

    /// Human-readable name, when the provider has one.
    pub display_name: Option<String>,
}

impl User {
    /// Create a user without a display name.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }

    /// Create a user with a display name.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: Some(name.into()),
        }
    }

    /// The name to show for this user, falling back to `"Unknown"`.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Unknown")
    }
}

/// Trait for the authentication seam.
///
/// The rest of the system only ever asks one question: who, if anyone, is
/// signed in right now. Login, logout, and session handling all live
/// behind the implementing provider.
pub trait Identity {
    /// The currently signed-in user, or `None`.
    fn current_user(&self) -> Option<User>;
}

/// An [`Identity`] with a fixed answer, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<User>,
}

impl StaticIdentity {
    /// Always signed in as the given user.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Never signed in.
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl Identity for StaticIdentity {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
