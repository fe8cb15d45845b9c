mod notifier;
mod template;

pub use notifier::{INotifier, InMemoryNotifier, LogNotifier, WebhookNotifier};
pub use template::{DefaultTemplateRenderer, ITemplateRenderer};
