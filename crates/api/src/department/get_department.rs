use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::get_department::*;
use birthday_reminder_domain::{Department, ReminderList, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn get_department_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let usecase = GetDepartmentUseCase {
        department_id: path.department_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|(department, lists)| HttpResponse::Ok().json(APIResponse::new(department, lists)))
        .map_err(|e| match e {
            UseCaseError::NotFound(department_id) => BirthdayReminderError::NotFound(format!(
                "The department with id: {}, was not found.",
                department_id
            )),
        })
}

/// A `Department` together with the `ReminderList`s that belong to it
#[derive(Debug)]
struct GetDepartmentUseCase {
    pub department_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDepartmentUseCase {
    type Response = (Department, Vec<ReminderList>);

    type Error = UseCaseError;

    const NAME: &'static str = "GetDepartment";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let department = ctx
            .repos
            .departments
            .find(&self.department_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.department_id.clone()))?;
        let lists = ctx
            .repos
            .reminder_lists
            .find_by_department(&department.id)
            .await;
        Ok((department, lists))
    }
}
