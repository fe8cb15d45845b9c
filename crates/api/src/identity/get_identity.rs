use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::get_identity::*;
use birthday_reminder_domain::{Identity, ReminderList, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn get_identity_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let usecase = GetIdentityUseCase {
        identity_id: path.identity_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|(identity, memberships)| {
            HttpResponse::Ok().json(APIResponse::new(identity, memberships))
        })
        .map_err(|e| match e {
            UseCaseError::NotFound(identity_id) => BirthdayReminderError::NotFound(format!(
                "The identity with id: {}, was not found.",
                identity_id
            )),
        })
}

/// An `Identity` together with the `ReminderList`s it is a recipient of
#[derive(Debug)]
struct GetIdentityUseCase {
    pub identity_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetIdentityUseCase {
    type Response = (Identity, Vec<ReminderList>);

    type Error = UseCaseError;

    const NAME: &'static str = "GetIdentity";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let identity = ctx
            .repos
            .identities
            .find(&self.identity_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.identity_id.clone()))?;
        let memberships = ctx.repos.reminder_lists.find_by_recipient(&identity.id).await;
        Ok((identity, memberships))
    }
}
