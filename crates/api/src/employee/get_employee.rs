use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::get_employee::*;
use birthday_reminder_domain::{Employee, ReminderList, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn get_employee_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let usecase = GetEmployeeUseCase {
        employee_id: path.employee_id.clone(),
    };

    let today = ctx.sys.today();
    execute(usecase, &ctx)
        .await
        .map(|(employee, memberships)| {
            HttpResponse::Ok().json(APIResponse::new(employee, &memberships, &today))
        })
        .map_err(|e| match e {
            UseCaseError::NotFound(employee_id) => BirthdayReminderError::NotFound(format!(
                "The employee with id: {}, was not found.",
                employee_id
            )),
        })
}

/// The `Employee` together with its reminder memberships, needed for the derived dates
#[derive(Debug)]
struct GetEmployeeUseCase {
    pub employee_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEmployeeUseCase {
    type Response = (Employee, Vec<ReminderList>);

    type Error = UseCaseError;

    const NAME: &'static str = "GetEmployee";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let employee = ctx
            .repos
            .employees
            .find(&self.employee_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.employee_id.clone()))?;
        let memberships = ctx.repos.employee_memberships(&employee).await;
        Ok((employee, memberships))
    }
}
