use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::run_birthday_reminders::*;
use birthday_reminder_domain::{
    birthday_subject, resolve_recipients, CompareOperator, DerivedDateField, DerivedDateQuery,
    DispatchReport, Employee, ReminderMessage, Sender,
};
use birthday_reminder_infra::BirthdayContext;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{error, info};

pub async fn run_birthday_reminders_controller(
    body: Option<web::Json<RequestBody>>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let date = body
        .and_then(|body| body.0.date)
        .unwrap_or_else(|| ctx.sys.today());
    let usecase = SendBirthdayRemindersUseCase { date };

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(APIResponse::new(report)))
        .map_err(|e| match e {})
}

/// Sends a reminder about every reminder enabled `Employee` whose
/// remind date is `date` to the recipients of all the `ReminderList`s
/// the `Employee`'s `Identity` is a member of.
///
/// Nothing is stored about what has been sent, so running this twice
/// for the same date sends the reminders twice.
#[derive(Debug)]
pub struct SendBirthdayRemindersUseCase {
    pub date: NaiveDate,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for SendBirthdayRemindersUseCase {
    type Response = DispatchReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendBirthdayReminders";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let query = DerivedDateQuery::new(
            DerivedDateField::RemindTrigger,
            CompareOperator::Eq,
            self.date,
        );
        let employees = ctx
            .repos
            .find_employees_by_derived_date(&query, &self.date)
            .await;

        let sender = Sender {
            name: ctx.config.sender_name.clone(),
            email: ctx.config.sender_email.clone(),
        };
        let mut report = DispatchReport::new(self.date);
        let mut processed = HashSet::new();

        for employee in employees {
            if !processed.insert(employee.id.clone()) {
                continue;
            }
            report.employees_processed += 1;
            self.remind_about(&employee, &sender, &mut report, ctx).await;
        }

        info!(
            "Birthday reminders for {}: {} employees, {} sent, {} skipped, {} failed",
            self.date,
            report.employees_processed,
            report.notifications_sent,
            report.skipped_no_recipients,
            report.failures.len()
        );
        Ok(report)
    }
}

impl SendBirthdayRemindersUseCase {
    async fn remind_about(
        &self,
        employee: &Employee,
        sender: &Sender,
        report: &mut DispatchReport,
        ctx: &BirthdayContext,
    ) {
        // Every list the employee is a member of, not only the one deciding the remind date
        let lists = ctx.repos.employee_memberships(employee).await;
        let recipient_ids = resolve_recipients(employee, &lists);
        let recipients = if recipient_ids.is_empty() {
            Vec::new()
        } else {
            ctx.repos.identities.find_many(&recipient_ids).await
        };
        if recipients.is_empty() {
            report.skipped_no_recipients += 1;
            return;
        }

        let body = match ctx
            .renderer
            .render(&ctx.config.template_id, employee, &self.date)
        {
            Ok(body) => body,
            Err(e) => {
                error!(
                    "Unable to render birthday reminder for employee {}. Err: {:?}",
                    employee.id, e
                );
                report.record_failure(&employee.id, e.to_string());
                return;
            }
        };

        let message = ReminderMessage {
            employee_id: employee.id.clone(),
            subject: birthday_subject(&employee.name),
            body,
            sender: sender.clone(),
            recipients,
        };
        match ctx.notifier.send(&message).await {
            Ok(()) => report.notifications_sent += 1,
            Err(e) => {
                error!(
                    "Unable to send birthday reminder for employee {}. Err: {:?}",
                    employee.id, e
                );
                report.record_failure(&employee.id, e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use birthday_reminder_domain::{Identity, ReminderList};
    use birthday_reminder_infra::{InMemoryNotifier, StaticTimeSys};
    use chrono::Duration;
    use std::sync::Arc;

    struct TestContext {
        ctx: BirthdayContext,
        notifier: Arc<InMemoryNotifier>,
        celebrant: Employee,
        celebrant_identity: Identity,
        recipient: Identity,
        list: ReminderList,
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    async fn create_identity(ctx: &BirthdayContext, name: &str) -> Identity {
        let identity = Identity::new(name.into(), Some(format!("{}@test.com", name)));
        ctx.repos.identities.insert(&identity).await.unwrap();
        identity
    }

    async fn create_celebrant(
        ctx: &BirthdayContext,
        name: &str,
        birthday: NaiveDate,
    ) -> (Employee, Identity) {
        let identity = create_identity(ctx, name).await;
        let mut employee = Employee::new(name.into());
        employee.birthdate = Some(birthday);
        employee.remind_enabled = true;
        employee.identity_id = Some(identity.id.clone());
        ctx.repos.employees.insert(&employee).await.unwrap();
        (employee, identity)
    }

    // Samwell is reminded 5 days before the birthday of John, who is
    // also a member of the same list
    async fn setup() -> TestContext {
        let notifier = Arc::new(InMemoryNotifier::new());
        let ctx = BirthdayContext::create_inmemory(
            Arc::new(StaticTimeSys::at_date(today())),
            notifier.clone(),
        );
        let recipient = create_identity(&ctx, "sam").await;
        let (celebrant, celebrant_identity) =
            create_celebrant(&ctx, "john", today() + Duration::days(10)).await;

        let mut list = ReminderList::new("Night's Watch".into());
        list.lead_days = 5;
        list.set_recipients(vec![recipient.id.clone(), celebrant_identity.id.clone()]);
        ctx.repos.reminder_lists.insert(&list).await.unwrap();

        TestContext {
            ctx,
            notifier,
            celebrant,
            celebrant_identity,
            recipient,
            list,
        }
    }

    async fn run(ctx: &BirthdayContext, date: NaiveDate) -> DispatchReport {
        let mut usecase = SendBirthdayRemindersUseCase { date };
        usecase.execute(ctx).await.unwrap()
    }

    #[actix_web::main]
    #[test]
    async fn sends_reminder_on_remind_date() {
        let TestContext {
            ctx,
            notifier,
            celebrant,
            celebrant_identity,
            recipient,
            list: _,
        } = setup().await;

        let memberships = ctx.repos.employee_memberships(&celebrant).await;
        assert_eq!(
            celebrant.next_occurrence_date(&today()),
            Some(today() + Duration::days(10))
        );
        assert_eq!(
            celebrant.remind_trigger_date(&today(), &memberships),
            Some(today() + Duration::days(5))
        );

        let report = run(&ctx, today() + Duration::days(5)).await;
        assert_eq!(report.employees_processed, 1);
        assert_eq!(report.notifications_sent, 1);
        assert!(report.failures.is_empty());

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Birthday Reminder for john");
        assert_eq!(sent[0].employee_id, celebrant.id);
        let recipient_ids = sent[0]
            .recipients
            .iter()
            .map(|r| r.id.clone())
            .collect::<Vec<_>>();
        assert_eq!(recipient_ids, vec![recipient.id]);
        assert!(!recipient_ids.contains(&celebrant_identity.id));
        assert_eq!(sent[0].sender.name, ctx.config.sender_name);
    }

    #[actix_web::main]
    #[test]
    async fn nothing_is_sent_on_other_days() {
        let TestContext { ctx, notifier, .. } = setup().await;

        for days in [0, 4, 6, 10] {
            let report = run(&ctx, today() + Duration::days(days)).await;
            assert_eq!(report.employees_processed, 0);
        }
        assert!(notifier.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn running_twice_sends_twice() {
        let TestContext { ctx, notifier, .. } = setup().await;

        run(&ctx, today() + Duration::days(5)).await;
        run(&ctx, today() + Duration::days(5)).await;
        assert_eq!(notifier.sent().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn skips_disabled_employees() {
        let TestContext {
            ctx,
            notifier,
            mut celebrant,
            ..
        } = setup().await;
        celebrant.remind_enabled = false;
        ctx.repos.employees.save(&celebrant).await.unwrap();

        let report = run(&ctx, today() + Duration::days(5)).await;
        assert_eq!(report.employees_processed, 0);
        assert!(notifier.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn skips_when_celebrant_is_the_only_recipient() {
        let TestContext {
            ctx,
            notifier,
            recipient,
            mut list,
            ..
        } = setup().await;
        list.remove_recipient(&recipient.id);
        ctx.repos.reminder_lists.save(&list).await.unwrap();

        let report = run(&ctx, today() + Duration::days(5)).await;
        assert_eq!(report.employees_processed, 1);
        assert_eq!(report.skipped_no_recipients, 1);
        assert_eq!(report.notifications_sent, 0);
        assert!(notifier.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn notifies_recipients_of_every_membership() {
        let TestContext {
            ctx,
            notifier,
            celebrant_identity,
            recipient,
            ..
        } = setup().await;
        // A list with fewer lead days does not decide the remind date,
        // but its recipients are still notified
        let gilly = create_identity(&ctx, "gilly").await;
        let mut other = ReminderList::new("Castle Black".into());
        other.lead_days = 1;
        other.set_recipients(vec![celebrant_identity.id.clone(), gilly.id.clone()]);
        ctx.repos.reminder_lists.insert(&other).await.unwrap();

        let report = run(&ctx, today() + Duration::days(5)).await;
        assert_eq!(report.notifications_sent, 1);
        let recipient_ids = notifier.sent()[0]
            .recipients
            .iter()
            .map(|r| r.id.clone())
            .collect::<Vec<_>>();
        assert_eq!(recipient_ids.len(), 2);
        assert!(recipient_ids.contains(&recipient.id));
        assert!(recipient_ids.contains(&gilly.id));

        let report = run(&ctx, today() + Duration::days(9)).await;
        assert_eq!(report.employees_processed, 0);
    }

    #[actix_web::main]
    #[test]
    async fn failure_does_not_abort_the_run() {
        let TestContext {
            ctx,
            notifier,
            celebrant,
            mut list,
            ..
        } = setup().await;
        let (other, other_identity) =
            create_celebrant(&ctx, "arya", today() + Duration::days(10)).await;
        list.add_recipient(other_identity.id.clone());
        ctx.repos.reminder_lists.save(&list).await.unwrap();
        notifier.fail_for(&celebrant.id);

        let report = run(&ctx, today() + Duration::days(5)).await;
        assert_eq!(report.employees_processed, 2);
        assert_eq!(report.notifications_sent, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].employee_id, celebrant.id);

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].employee_id, other.id);
        // Celebrants are never reminded about their own birthday
        assert!(sent[0].recipients.iter().all(|r| r.id != other_identity.id));
    }

    #[actix_web::main]
    #[test]
    async fn render_failure_is_recorded_per_employee() {
        let TestContext {
            mut ctx,
            notifier,
            celebrant,
            mut list,
            ..
        } = setup().await;
        let (other, other_identity) =
            create_celebrant(&ctx, "arya", today() + Duration::days(10)).await;
        list.add_recipient(other_identity.id.clone());
        ctx.repos.reminder_lists.save(&list).await.unwrap();
        ctx.config.template_id = "unknown_template".into();

        let report = run(&ctx, today() + Duration::days(5)).await;
        assert_eq!(report.employees_processed, 2);
        assert_eq!(report.notifications_sent, 0);
        assert_eq!(report.failures.len(), 2);
        let failed = report
            .failures
            .iter()
            .map(|f| f.employee_id.clone())
            .collect::<Vec<_>>();
        assert!(failed.contains(&celebrant.id));
        assert!(failed.contains(&other.id));
        assert!(notifier.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn employee_without_identity_is_never_reminded() {
        let TestContext { ctx, notifier, .. } = setup().await;
        let mut loner = Employee::new("ghost".into());
        loner.birthdate = Some(today() + Duration::days(10));
        loner.remind_enabled = true;
        ctx.repos.employees.insert(&loner).await.unwrap();

        let report = run(&ctx, today() + Duration::days(5)).await;
        assert_eq!(report.employees_processed, 1);
        assert_eq!(notifier.sent().len(), 1);
        assert_ne!(notifier.sent()[0].employee_id, loner.id);
    }
}
