mod auth_event;
mod identity;
mod new_profile;
mod profile;
mod profile_patch;
mod session;
