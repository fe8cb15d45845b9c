use tracing::warn;

pub const DEFAULT_TEMPLATE_ID: &str = "birthday_reminder_email";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Hour of the day (UTC) at which the daily reminders are sent
    pub send_hour: u32,
    /// Name of the identity the reminders are sent on behalf of
    pub sender_name: String,
    /// Email address of the identity the reminders are sent on behalf of
    pub sender_email: String,
    /// When set, reminders are posted to this url instead of being logged
    pub webhook_url: Option<String>,
    /// Sent in the `birthday-reminder-webhook-key` header so that the
    /// receiver can verify that the request came from this service
    pub webhook_key: String,
    /// The template used for rendering the body of the reminders
    pub template_id: String,
}

impl Config {
    pub fn new() -> Self {
        let default_port = 5000;
        let port = parse_env("PORT", default_port, |_| true);
        let send_hour = parse_env("REMINDER_SEND_HOUR", 7, |hour: &u32| *hour < 24);

        let sender_name = std::env::var("REMINDER_SENDER_NAME").unwrap_or_else(|_| "HR".into());
        let sender_email =
            std::env::var("REMINDER_SENDER_EMAIL").unwrap_or_else(|_| "hr@localhost".into());
        let webhook_url = std::env::var("REMINDER_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let webhook_key = std::env::var("REMINDER_WEBHOOK_KEY").unwrap_or_default();
        let template_id =
            std::env::var("REMINDER_TEMPLATE_ID").unwrap_or_else(|_| DEFAULT_TEMPLATE_ID.into());

        Self {
            port,
            send_hour,
            sender_name,
            sender_email,
            webhook_url,
            webhook_key,
            template_id,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env<T, F>(key: &str, default: T, is_valid: F) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    F: Fn(&T) -> bool,
{
    let value = match std::env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) if is_valid(&parsed) => parsed,
        _ => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                key, value, default
            );
            default
        }
    }
}
