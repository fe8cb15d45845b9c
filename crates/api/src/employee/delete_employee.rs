use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::delete_employee::*;
use birthday_reminder_domain::{Employee, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn delete_employee_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let usecase = DeleteEmployeeUseCase {
        employee_id: path.employee_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|employee| {
            HttpResponse::Ok().json(APIResponse {
                employee_id: employee.id,
            })
        })
        .map_err(|e| match e {
            UseCaseError::NotFound(employee_id) => BirthdayReminderError::NotFound(format!(
                "The employee with id: {}, was not found.",
                employee_id
            )),
        })
}

#[derive(Debug)]
struct DeleteEmployeeUseCase {
    pub employee_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEmployeeUseCase {
    type Response = Employee;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEmployee";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .employees
            .delete(&self.employee_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.employee_id.clone()))
    }
}
