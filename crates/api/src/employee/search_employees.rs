use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::{dtos::EmployeeDTO, search_employees::*};
use birthday_reminder_domain::{DerivedDateQuery, Employee, ReminderList, SearchError};
use birthday_reminder_infra::BirthdayContext;

pub async fn search_employees_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let query = query.into_inner();
    let usecase = SearchEmployeesUseCase {
        field: query.field,
        operator: query.operator,
        value: query.value,
    };

    let today = ctx.sys.today();
    execute(usecase, &ctx)
        .await
        .map(|employees| {
            let employees = employees
                .into_iter()
                .map(|(employee, memberships)| EmployeeDTO::new(employee, &memberships, &today))
                .collect();
            HttpResponse::Ok().json(APIResponse::new(employees))
        })
        .map_err(|e| match e {
            UseCaseError::InvalidQuery(e) => BirthdayReminderError::BadClientData(e.to_string()),
        })
}

/// Finds the reminder enabled `Employee`s by comparing one of their derived dates
#[derive(Debug)]
pub struct SearchEmployeesUseCase {
    pub field: String,
    pub operator: String,
    pub value: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidQuery(SearchError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SearchEmployeesUseCase {
    type Response = Vec<(Employee, Vec<ReminderList>)>;

    type Error = UseCaseError;

    const NAME: &'static str = "SearchEmployees";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let query = DerivedDateQuery::parse(&self.field, &self.operator, self.value.as_str())
            .map_err(UseCaseError::InvalidQuery)?;

        let today = ctx.sys.today();
        let employees = ctx
            .repos
            .find_employees_by_derived_date(&query, &today)
            .await;

        let mut res = Vec::with_capacity(employees.len());
        for employee in employees {
            let memberships = ctx.repos.employee_memberships(&employee).await;
            res.push((employee, memberships));
        }
        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use birthday_reminder_domain::{Identity, ID};
    use birthday_reminder_infra::{InMemoryNotifier, StaticTimeSys};
    use chrono::{Duration, NaiveDate};
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    async fn setup() -> (BirthdayContext, ID) {
        let ctx = BirthdayContext::create_inmemory(
            Arc::new(StaticTimeSys::at_date(today())),
            Arc::new(InMemoryNotifier::new()),
        );
        let identity = Identity::new("John Snow".into(), None);
        ctx.repos.identities.insert(&identity).await.unwrap();
        let mut employee = Employee::new("John Snow".into());
        employee.birthdate = Some(today() + Duration::days(10));
        employee.remind_enabled = true;
        employee.identity_id = Some(identity.id.clone());
        ctx.repos.employees.insert(&employee).await.unwrap();
        let mut list = ReminderList::new("Night's Watch".into());
        list.lead_days = 5;
        list.add_recipient(identity.id);
        ctx.repos.reminder_lists.insert(&list).await.unwrap();
        (ctx, employee.id)
    }

    fn usecase(field: &str, operator: &str, value: &str) -> SearchEmployeesUseCase {
        SearchEmployeesUseCase {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    #[actix_web::main]
    #[test]
    async fn searches_next_birthday_date() {
        let (ctx, employee_id) = setup().await;
        let res = usecase("next_occurrence", "=", "2026-10-28")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].0.id, employee_id);

        let res = usecase("next_occurrence", "=", "2026-10-29")
            .execute(&ctx)
            .await
            .unwrap();
        assert!(res.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn searches_remind_date() {
        let (ctx, employee_id) = setup().await;
        let res = usecase("remind_trigger", ">", "2026-10-18")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].0.id, employee_id);
        assert_eq!(res[0].1.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unsupported_operator() {
        let (ctx, _) = setup().await;
        let res = usecase("remind_trigger", "contains", "2026-10-18")
            .execute(&ctx)
            .await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::InvalidQuery(SearchError::UnsupportedOperator("contains".into()))
        );
    }
}
