use crate::config::DEFAULT_TEMPLATE_ID;
use birthday_reminder_domain::{format_date, Employee};
use chrono::NaiveDate;

pub trait ITemplateRenderer: Send + Sync {
    /// Renders the body of a reminder about the birthday of `employee`
    fn render(&self, template_id: &str, employee: &Employee, today: &NaiveDate)
        -> anyhow::Result<String>;
}

/// Renders the built in `birthday_reminder_email` template
pub struct DefaultTemplateRenderer {}

impl ITemplateRenderer for DefaultTemplateRenderer {
    fn render(
        &self,
        template_id: &str,
        employee: &Employee,
        today: &NaiveDate,
    ) -> anyhow::Result<String> {
        if template_id != DEFAULT_TEMPLATE_ID {
            return Err(anyhow::anyhow!("Unknown template: {}", template_id));
        }
        let birthday = employee
            .next_occurrence_date(today)
            .ok_or_else(|| anyhow::anyhow!("Employee {} has no birthdate", employee.id))?;

        Ok(format!(
            "<div>\
             <p>Hello,</p>\
             <p>This is a reminder that <strong>{name}</strong> has a birthday on {day}.</p>\
             <p>Don't forget to congratulate {name}!</p>\
             </div>",
            name = escape_html(&employee.name),
            day = format_date(&birthday),
        ))
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str) -> Employee {
        let mut employee = Employee::new(name.into());
        employee.birthdate = NaiveDate::from_ymd_opt(1990, 10, 28);
        employee
    }

    #[test]
    fn renders_birthday_reminder() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let body = DefaultTemplateRenderer {}
            .render(DEFAULT_TEMPLATE_ID, &employee("John <Snow>"), &today)
            .unwrap();
        assert!(body.contains("<strong>John &lt;Snow&gt;</strong>"));
        assert!(body.contains("2026-10-28"));
    }

    #[test]
    fn rejects_unknown_template_and_missing_birthdate() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let renderer = DefaultTemplateRenderer {};
        assert!(renderer
            .render("unknown", &employee("John Snow"), &today)
            .is_err());
        assert!(renderer
            .render(DEFAULT_TEMPLATE_ID, &Employee::new("John Snow".into()), &today)
            .is_err());
    }
}
