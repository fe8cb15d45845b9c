use super::{find_missing_reference, MissingReference};
use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::update_employee::*;
use birthday_reminder_domain::{Employee, ReminderList, ID};
use birthday_reminder_infra::BirthdayContext;
use chrono::NaiveDate;

pub async fn update_employee_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let body = body.0;
    let usecase = UpdateEmployeeUseCase {
        employee_id: path.employee_id.clone(),
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
            HttpResponse::Ok().json(APIResponse::new(employee, &memberships, &today))
        })
        .map_err(BirthdayReminderError::from)
}

/// Only the given fields are changed, `Some(None)` clears an optional field
#[derive(Debug)]
pub struct UpdateEmployeeUseCase {
    pub employee_id: ID,
    pub name: Option<String>,
    pub birthdate: Option<Option<NaiveDate>>,
    pub remind_enabled: Option<bool>,
    pub identity_id: Option<Option<ID>>,
    pub department_id: Option<Option<ID>>,
    pub work_email: Option<Option<String>>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyName,
    InvalidReference(MissingReference),
    Storage,
}

impl From<UseCaseError> for BirthdayReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The employee with id: {}, was not found.", id))
            }
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
impl UseCase for UpdateEmployeeUseCase {
    type Response = (Employee, Vec<ReminderList>);

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEmployee";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let mut employee = ctx
            .repos
            .employees
            .find(&self.employee_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.employee_id.clone()))?;

        let identity_id = self.identity_id.clone().flatten();
        let department_id = self.department_id.clone().flatten();
        if let Some(missing) =
            find_missing_reference(identity_id.as_ref(), department_id.as_ref(), ctx).await
        {
            return Err(UseCaseError::InvalidReference(missing));
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(UseCaseError::EmptyName);
            }
            employee.name = name.trim().to_string();
        }
        if let Some(birthdate) = self.birthdate {
            employee.birthdate = birthdate;
        }
        if let Some(remind_enabled) = self.remind_enabled {
            employee.remind_enabled = remind_enabled;
        }
        if self.identity_id.is_some() {
            employee.identity_id = identity_id;
        }
        if self.department_id.is_some() {
            employee.department_id = department_id;
        }
        if let Some(work_email) = &self.work_email {
            employee.work_email = work_email.clone();
        }

        ctx.repos
            .employees
            .save(&employee)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        let memberships = ctx.repos.employee_memberships(&employee).await;
        Ok((employee, memberships))
    }
}
