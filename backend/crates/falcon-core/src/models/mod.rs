pub mod auth_event;
pub mod auth_state_change;
pub mod identity;
pub mod new_profile;
pub mod profile;
pub mod profile_patch;
pub mod profile_upsert;
pub mod session;
pub mod user_metadata;
