mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, DEFAULT_TEMPLATE_ID};
pub use repos::{
    IDepartmentRepo, IEmployeeRepo, IIdentityRepo, IReminderListRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct BirthdayContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
    pub renderer: Arc<dyn ITemplateRenderer>,
}

impl BirthdayContext {
    fn create(config: Config) -> Self {
        let notifier: Arc<dyn INotifier> = match &config.webhook_url {
            Some(url) => {
                info!("Birthday reminders will be posted to the webhook: {}", url);
                Arc::new(WebhookNotifier::new(
                    url.clone(),
                    config.webhook_key.clone(),
                ))
            }
            None => {
                info!("No REMINDER_WEBHOOK_URL set, birthday reminders will only be logged");
                Arc::new(LogNotifier {})
            }
        };

        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            notifier,
            renderer: Arc::new(DefaultTemplateRenderer {}),
        }
    }

    /// Context with inmemory collaborators where the `InMemoryNotifier`
    /// can be inspected afterwards
    pub fn create_inmemory(sys: Arc<dyn ISys>, notifier: Arc<InMemoryNotifier>) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys,
            notifier,
            renderer: Arc::new(DefaultTemplateRenderer {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> BirthdayContext {
    BirthdayContext::create(Config::new())
}
