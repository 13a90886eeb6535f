use crate::{ClientResult, HttpAuthProvider, RestClient, RestProfileStore, SessionFile};

use std::sync::Arc;

use chrono::Duration;
use falcon_auth::{AuthProvider, ProfileStore};
use falcon_config::Config;

/// Both halves of the hosted backend, sharing one HTTP client and session
pub struct Backend {
    pub auth: Arc<dyn AuthProvider>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl Backend {
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let client = RestClient::from_config(&config.backend)?;

        let session_file = if config.auth.persist_session {
            // The config dir only fails to resolve without a cwd; skip persistence then.
            config.session_path().ok().map(SessionFile::new)
        } else {
            None
        };
        let refresh_margin = Duration::seconds(config.auth.refresh_margin_secs as i64);

        let auth = HttpAuthProvider::new(client.clone(), session_file, refresh_margin);
        let profiles = RestProfileStore::new(client, auth.session_slot());

        Ok(Self {
            auth: Arc::new(auth),
            profiles: Arc::new(profiles),
        })
    }
}
