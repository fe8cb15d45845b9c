use birthday_reminder_domain::{ReminderMessage, ID};
use std::sync::Mutex;
use tracing::info;

/// Delivers a rendered `ReminderMessage` to its recipients
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()>;
}

/// Posts the reminders as json to a webhook which takes care of the delivery
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    key: String,
}

impl WebhookNotifier {
    pub fn new(url: String, key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            key,
        }
    }
}

#[async_trait::async_trait]
impl INotifier for WebhookNotifier {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        self.client
            .post(&self.url)
            .header("birthday-reminder-webhook-key", &self.key)
            .json(message)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Used when no webhook is configured
pub struct LogNotifier {}

#[async_trait::async_trait]
impl INotifier for LogNotifier {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        let recipients = message
            .recipients
            .iter()
            .map(|r| r.email.clone().unwrap_or_else(|| r.name.clone()))
            .collect::<Vec<_>>();
        info!(
            "Reminder `{}` from {} to {:?}",
            message.subject,
            message.sender.formatted(),
            recipients
        );
        Ok(())
    }
}

/// Keeps the sent messages around, useful for testing
pub struct InMemoryNotifier {
    sent: Mutex<Vec<ReminderMessage>>,
    failing_employees: Mutex<Vec<ID>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_employees: Mutex::new(Vec::new()),
        }
    }

    /// Makes every message about the given `Employee` fail
    pub fn fail_for(&self, employee_id: &ID) {
        self.failing_employees
            .lock()
            .unwrap()
            .push(employee_id.clone());
    }

    pub fn sent(&self) -> Vec<ReminderMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        if self
            .failing_employees
            .lock()
            .unwrap()
            .contains(&message.employee_id)
        {
            return Err(anyhow::anyhow!(
                "Unable to deliver reminder for employee: {}",
                message.employee_id
            ));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
