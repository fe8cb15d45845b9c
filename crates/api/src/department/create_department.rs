use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::create_department::*;
use birthday_reminder_domain::Department;
use birthday_reminder_infra::BirthdayContext;

pub async fn create_department_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let usecase = CreateDepartmentUseCase {
        name: body.0.name,
    };

    execute(usecase, &ctx)
        .await
        .map(|department| HttpResponse::Created().json(APIResponse::new(department)))
        .map_err(BirthdayReminderError::from)
}

#[derive(Debug)]
struct CreateDepartmentUseCase {
    pub name: String,
}

#[derive(Debug)]
enum UseCaseError {
    EmptyName,
    Storage,
}

impl From<UseCaseError> for BirthdayReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => Self::BadClientData("A department needs a name".into()),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateDepartmentUseCase {
    type Response = Department;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateDepartment";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        let department = Department::new(self.name.trim().to_string());
        ctx.repos
            .departments
            .insert(&department)
            .await
            .map_err(|_| UseCaseError::Storage)?;
        Ok(department)
    }
}
