use super::{find_missing_reference, MissingReference};
use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::create_reminder_list::*;
use birthday_reminder_domain::{ReminderList, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn create_reminder_list_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let body = body.0;
    let usecase = CreateReminderListUseCase {
        name: body.name,
        lead_days: body.lead_days,
        department_id: body.department_id,
        recipients: body.recipients,
    };

    execute(usecase, &ctx)
        .await
        .map(|list| HttpResponse::Created().json(APIResponse::new(list)))
        .map_err(BirthdayReminderError::from)
}

#[derive(Debug)]
pub struct CreateReminderListUseCase {
    pub name: String,
    /// Defaults to `DEFAULT_LEAD_DAYS`
    pub lead_days: Option<u32>,
    pub department_id: Option<ID>,
    pub recipients: Vec<ID>,
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
            UseCaseError::EmptyName => Self::BadClientData("A reminder list needs a name".into()),
            UseCaseError::InvalidReference(MissingReference::Identity(id)) => {
                Self::BadClientData(format!("The recipient with id: {}, was not found.", id))
            }
            UseCaseError::InvalidReference(MissingReference::Department(id)) => {
                Self::BadClientData(format!("The department with id: {}, was not found.", id))
            }
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderListUseCase {
    type Response = ReminderList;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminderList";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        if let Some(missing) =
            find_missing_reference(&self.recipients, self.department_id.as_ref(), ctx).await
        {
            return Err(UseCaseError::InvalidReference(missing));
        }

        let mut list = ReminderList::new(self.name.trim().to_string());
        if let Some(lead_days) = self.lead_days {
            list.lead_days = lead_days;
        }
        list.department_id = self.department_id.clone();
        list.set_recipients(self.recipients.clone());

        ctx.repos
            .reminder_lists
            .insert(&list)
            .await
            .map_err(|_| UseCaseError::Storage)?;
        Ok(list)
    }
}
