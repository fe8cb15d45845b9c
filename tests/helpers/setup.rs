use birthday_reminder_api::Application;
use birthday_reminder_infra::{BirthdayContext, InMemoryNotifier, StaticTimeSys};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub notifier: Arc<InMemoryNotifier>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }
}

// Launch the application as a background task with the clock frozen at `today`
pub async fn spawn_app(today: NaiveDate) -> TestApp {
    let notifier = Arc::new(InMemoryNotifier::new());
    let mut ctx =
        BirthdayContext::create_inmemory(Arc::new(StaticTimeSys::at_date(today)), notifier.clone());
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        address,
        notifier,
        client: reqwest::Client::new(),
    }
}
