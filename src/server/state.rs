use std::sync::Arc;

use crate::assets::{AssetStore, CloudinaryClient};
use crate::auth::BearerAuth;
use crate::config::Settings;
use crate::content::ContentLibrary;
use crate::error::Result;
use crate::fcm::FcmClient;
use crate::notification::{DispatchGateway, MessagingProvider};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub auth: Arc<BearerAuth>,
    pub content: Arc<ContentLibrary>,
    pub gateway: Arc<DispatchGateway>,
    pub asset_store: Arc<dyn AssetStore>,
}

impl AppState {
    /// Assemble state from already-built collaborators.
    pub fn new(
        settings: Settings,
        content: ContentLibrary,
        provider: Arc<dyn MessagingProvider>,
        asset_store: Arc<dyn AssetStore>,
    ) -> Self {
        let auth = Arc::new(BearerAuth::new(&settings.auth));
        let gateway = Arc::new(DispatchGateway::new(provider, settings.dispatch.timeout()));

        Self {
            settings: Arc::new(settings),
            auth,
            content: Arc::new(content),
            gateway,
            asset_store,
        }
    }

    /// Build the production collaborators (FCM, Cloudinary, built-in texts).
    pub fn from_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let content = ContentLibrary::builtin()?;
        let provider: Arc<dyn MessagingProvider> = Arc::new(FcmClient::new(&settings.firebase)?);
        let asset_store: Arc<dyn AssetStore> = Arc::new(CloudinaryClient::new(&settings.cloudinary));

        Ok(Self::new(settings, content, provider, asset_store))
    }
}
