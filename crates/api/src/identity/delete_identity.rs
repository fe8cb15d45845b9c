use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::delete_identity::*;
use birthday_reminder_domain::{Identity, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn delete_identity_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let usecase = DeleteIdentityUseCase {
        identity_id: path.identity_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|identity| HttpResponse::Ok().json(APIResponse::new(identity)))
        .map_err(|e| match e {
            UseCaseError::NotFound(identity_id) => BirthdayReminderError::NotFound(format!(
                "The identity with id: {}, was not found.",
                identity_id
            )),
            UseCaseError::Storage => BirthdayReminderError::InternalError,
        })
}

/// Deletes the `Identity` and removes every reference to it
#[derive(Debug)]
struct DeleteIdentityUseCase {
    pub identity_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    Storage,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteIdentityUseCase {
    type Response = Identity;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteIdentity";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let identity = ctx
            .repos
            .identities
            .delete(&self.identity_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.identity_id.clone()))?;

        ctx.repos
            .reminder_lists
            .remove_recipient(&identity.id)
            .await
            .map_err(|_| UseCaseError::Storage)?;
        ctx.repos
            .employees
            .unlink_identity(&identity.id)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(identity)
    }
}
