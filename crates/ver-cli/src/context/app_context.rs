use anyhow::Context;
use ver_config::VerConfig;
use ver_llm::GeminiClient;
use ver_store::EngagementStore;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: VerConfig,
    pub store: EngagementStore,
    pub llm: GeminiClient,
}

impl AppContext {
    /// Open the engagement file, select the working engagement, and build the
    /// model client.
    ///
    /// The engagement comes from `--engagement`, then `general.engagement`,
    /// then the first one in the file. An unknown id fails here, before any
    /// remote call.
    pub fn init(config: VerConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let store_path = flags
            .store
            .clone()
            .unwrap_or_else(|| config.store.resolved_path());
        tracing::debug!(path = %store_path.display(), "opening engagement store");

        let mut store = EngagementStore::open(&store_path).with_context(|| {
            format!("failed to open engagement store at {}", store_path.display())
        })?;

        let selected = flags
            .engagement
            .as_deref()
            .or_else(|| Some(config.general.engagement.as_str()).filter(|id| !id.is_empty()));
        if let Some(id) = selected {
            store
                .set_active(id)
                .with_context(|| format!("cannot select engagement '{id}'"))?;
        }

        Self::from_parts(config, store)
    }

    /// Assemble a context from an already-opened store.
    pub fn from_parts(config: VerConfig, store: EngagementStore) -> anyhow::Result<Self> {
        let llm = GeminiClient::new(config.gemini.clone())
            .context("failed to build Gemini client")?;
        Ok(Self { config, store, llm })
    }

    /// Id of the engagement new analyses are recorded in.
    pub fn active_engagement_id(&self) -> anyhow::Result<String> {
        self.store
            .active()
            .map(|engagement| engagement.id.clone())
            .context("no active engagement")
    }
}
