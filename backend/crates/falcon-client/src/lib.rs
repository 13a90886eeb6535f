//! falcon-client
//!
//! reqwest adapter for the hosted backend: the auth API behind
//! [`HttpAuthProvider`] and the `profiles` table behind [`RestProfileStore`].

pub mod backend;
pub mod error;
pub mod http_auth_provider;
pub mod rest_client;
pub mod rest_profile_store;
pub mod session_file;
pub(crate) mod token_response;


pub use backend::Backend;
pub use error::{ClientError, Result as ClientResult};
pub use http_auth_provider::{HttpAuthProvider, SessionSlot};
pub use rest_client::RestClient;
pub use rest_profile_store::RestProfileStore;
pub use session_file::SessionFile;
