use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::delete_reminder_list::*;
use birthday_reminder_domain::{ReminderList, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn delete_reminder_list_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let usecase = DeleteReminderListUseCase {
        reminder_list_id: path.reminder_list_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|list| HttpResponse::Ok().json(APIResponse::new(list)))
        .map_err(|e| match e {
            UseCaseError::NotFound(id) => BirthdayReminderError::NotFound(format!(
                "The reminder list with id: {}, was not found.",
                id
            )),
        })
}

#[derive(Debug)]
struct DeleteReminderListUseCase {
    pub reminder_list_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderListUseCase {
    type Response = ReminderList;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminderList";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminder_lists
            .delete(&self.reminder_list_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_list_id.clone()))
    }
}
