use super::{find_missing_reference, MissingReference};
use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::create_employee::*;
use birthday_reminder_domain::{Employee, ReminderList, ID};
use birthday_reminder_infra::BirthdayContext;
use chrono::NaiveDate;

pub async fn create_employee_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let body = body.0;
    let usecase = CreateEmployeeUseCase {
        name: body.name,
        birthdate: body.birthdate,
        remind_enabled: body.remind_enabled,
        identity_id: body.identity_id,
        department_id: body.department_id,
        work_email: body.work_email,
    };

    let today = ctx.sys.today();
    execute(usecase, &ctx)
        .await
        .map(|(employee, memberships)| {
            HttpResponse::Created().json(APIResponse::new(employee, &memberships, &today))
        })
        .map_err(BirthdayReminderError::from)
}

#[derive(Debug)]
pub struct CreateEmployeeUseCase {
    pub name: String,
    pub birthdate: Option<NaiveDate>,
    pub remind_enabled: bool,
    pub identity_id: Option<ID>,
    pub department_id: Option<ID>,
    pub work_email: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    InvalidReference(MissingReference),
    Storage,
}

impl From<UseCaseError> for BirthdayReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => Self::BadClientData("An employee needs a name".into()),
            UseCaseError::InvalidReference(MissingReference::Identity(id)) => {
                Self::BadClientData(format!("The identity with id: {}, was not found.", id))
            }
            UseCaseError::InvalidReference(MissingReference::Department(id)) => {
                Self::BadClientData(format!("The department with id: {}, was not found.", id))
            }
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEmployeeUseCase {
    type Response = (Employee, Vec<ReminderList>);

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEmployee";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        if let Some(missing) =
            find_missing_reference(self.identity_id.as_ref(), self.department_id.as_ref(), ctx)
                .await
        {
            return Err(UseCaseError::InvalidReference(missing));
        }

        let mut employee = Employee::new(self.name.trim().to_string());
        employee.birthdate = self.birthdate;
        employee.remind_enabled = self.remind_enabled;
        employee.identity_id = self.identity_id.clone();
        employee.department_id = self.department_id.clone();
        employee.work_email = self.work_email.clone();

        ctx.repos
            .employees
            .insert(&employee)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        let memberships = ctx.repos.employee_memberships(&employee).await;
        Ok((employee, memberships))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use birthday_reminder_infra::{InMemoryNotifier, RealSys};
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn creates_employee() {
        let ctx = BirthdayContext::create_inmemory(
            Arc::new(RealSys {}),
            Arc::new(InMemoryNotifier::new()),
        );
        let mut usecase = CreateEmployeeUseCase {
            name: "John Snow".into(),
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 3),
            remind_enabled: true,
            identity_id: None,
            department_id: None,
            work_email: None,
        };
        let (employee, memberships) = usecase.execute(&ctx).await.unwrap();
        assert!(memberships.is_empty());
        assert!(ctx.repos.employees.find(&employee.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_identity() {
        let ctx = BirthdayContext::create_inmemory(
            Arc::new(RealSys {}),
            Arc::new(InMemoryNotifier::new()),
        );
        let identity_id = ID::default();
        let mut usecase = CreateEmployeeUseCase {
            name: "John Snow".into(),
            birthdate: None,
            remind_enabled: true,
            identity_id: Some(identity_id.clone()),
            department_id: None,
            work_email: None,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidReference(MissingReference::Identity(identity_id))
        );
    }
}
