use crate::{RestClient, SessionSlot};

use async_trait::async_trait;
use falcon_auth::{ProfileStore, ProviderResult};
use falcon_core::{NewProfile, Profile, ProfileUpsert};
use reqwest::Method;

const PROFILES_PATH: &str = "/rest/v1/profiles";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// `profiles` table over the REST API, authorised as the signed-in user.
pub struct RestProfileStore {
    client: RestClient,
    session: SessionSlot,
}

impl RestProfileStore {
    pub fn new(client: RestClient, session: SessionSlot) -> Self {
        Self { client, session }
    }

    async fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|session| session.access_token.clone())
    }
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    async fn select_by_user(&self, user_id: &str) -> ProviderResult<Profile> {
        let filter = format!("eq.{user_id}");
        let token = self.access_token().await;
        let req = self
            .client
            .request(
                Method::GET,
                PROFILES_PATH,
                &[("user_id", filter.as_str()), ("select", "*")],
                token.as_deref(),
            )?
            .header("Accept", SINGLE_OBJECT);

        Ok(self.client.execute_json(req).await?)
    }

    async fn insert(&self, profile: NewProfile) -> ProviderResult<()> {
        let token = self.access_token().await;
        let req = self
            .client
            .request(Method::POST, PROFILES_PATH, &[], token.as_deref())?
            .header("Prefer", "return=minimal")
            .json(&profile);

        Ok(self.client.execute_empty(req).await?)
    }

    async fn upsert(&self, upsert: ProfileUpsert) -> ProviderResult<()> {
        let token = self.access_token().await;
        let req = self
            .client
            .request(
                Method::POST,
                PROFILES_PATH,
                &[("on_conflict", "user_id")],
                token.as_deref(),
            )?
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&upsert);

        Ok(self.client.execute_empty(req).await?)
    }
}
