use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::delete_department::*;
use birthday_reminder_domain::{Department, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn delete_department_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let usecase = DeleteDepartmentUseCase {
        department_id: path.department_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|department| HttpResponse::Ok().json(APIResponse::new(department)))
        .map_err(|e| match e {
            UseCaseError::NotFound(department_id) => BirthdayReminderError::NotFound(format!(
                "The department with id: {}, was not found.",
                department_id
            )),
            UseCaseError::Storage => BirthdayReminderError::InternalError,
        })
}

/// Deletes the `Department`, its `ReminderList`s are kept but no longer belong to any department
#[derive(Debug)]
struct DeleteDepartmentUseCase {
    pub department_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    Storage,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteDepartmentUseCase {
    type Response = Department;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteDepartment";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let department = ctx
            .repos
            .departments
            .delete(&self.department_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.department_id.clone()))?;
        ctx.repos
            .reminder_lists
            .clear_department(&department.id)
            .await
            .map_err(|_| UseCaseError::Storage)?;
        Ok(department)
    }
}
