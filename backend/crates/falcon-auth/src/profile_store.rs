use crate::ProviderResult;

use async_trait::async_trait;
use falcon_core::{NewProfile, Profile, ProfileUpsert};

/// Boundary to the hosted `profiles` table.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Exactly one row for `user_id`; zero rows is an error with code `PGRST116`
    async fn select_by_user(&self, user_id: &str) -> ProviderResult<Profile>;

    async fn insert(&self, profile: NewProfile) -> ProviderResult<()>;

    /// Insert or merge on the `user_id` key
    async fn upsert(&self, upsert: ProfileUpsert) -> ProviderResult<()>;
}
