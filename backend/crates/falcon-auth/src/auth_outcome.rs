/// What a successful facade operation did. Carries no notification text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials accepted; the session arrives through the change stream
    SignedIn,
    /// Account created
    SignedUp { confirmation_required: bool },
    SignedOut,
    ProfileUpdated,
}
