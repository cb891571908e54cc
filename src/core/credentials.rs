//! Per-environment credential cache.
//!
//! A warm Lambda environment serves many invocations; the bot token and bot
//! user id are fetched on the first one and reused until the environment is
//! recycled. There is no invalidation.

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use super::models::Credentials;
use super::secrets::SecretSource;
use crate::errors::SlackError;

/// Process-wide cache used by the processor binary.
pub static CREDENTIALS: CredentialCache = CredentialCache::new();

/// Write-once holder for [`Credentials`].
///
/// Concurrent cold fetches may both hit the secret store; the first value
/// stored wins and later ones are dropped.
pub struct CredentialCache {
    cell: OnceCell<Credentials>,
}

impl CredentialCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn cached(&self) -> Option<&Credentials> {
        self.cell.get()
    }

    /// Return the cached credentials, fetching them from `source` first if
    /// this environment has none yet.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error; nothing is cached on failure.
    pub async fn get_or_fetch(
        &self,
        source: &dyn SecretSource,
        secret_id: &str,
    ) -> Result<&Credentials, SlackError> {
        if let Some(credentials) = self.cell.get() {
            debug!("Using cached Slack credentials");
            return Ok(credentials);
        }

        let fetched = source.fetch_credentials(secret_id).await?;
        info!(bot_user_id = %fetched.bot_user_id.0, "Cached Slack credentials for this environment");

        Ok(self.cell.get_or_init(|| fetched))
    }
}

impl Default for CredentialCache {
    fn default() -> Self {
        Self::new()
    }
}
