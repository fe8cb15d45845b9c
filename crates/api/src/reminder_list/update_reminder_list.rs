use super::{find_missing_reference, MissingReference};
use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::update_reminder_list::*;
use birthday_reminder_domain::{ReminderList, ID};
use birthday_reminder_infra::BirthdayContext;

pub async fn update_reminder_list_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let body = body.0;
    let usecase = UpdateReminderListUseCase {
        reminder_list_id: path.reminder_list_id.clone(),
        name: body.name,
        lead_days: body.lead_days,
        department_id: body.department_id,
        recipients: body.recipients,
    };

    execute(usecase, &ctx)
        .await
        .map(|list| HttpResponse::Ok().json(APIResponse::new(list)))
        .map_err(BirthdayReminderError::from)
}

#[derive(Debug)]
pub struct UpdateReminderListUseCase {
    pub reminder_list_id: ID,
    pub name: Option<String>,
    pub lead_days: Option<u32>,
    /// `Some(None)` detaches the list from its department
    pub department_id: Option<Option<ID>>,
    /// Replaces all the recipients when set
    pub recipients: Option<Vec<ID>>,
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
            UseCaseError::NotFound(id) => Self::NotFound(format!(
                "The reminder list with id: {}, was not found.",
                id
            )),
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
impl UseCase for UpdateReminderListUseCase {
    type Response = ReminderList;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminderList";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        let mut list = ctx
            .repos
            .reminder_lists
            .find(&self.reminder_list_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_list_id.clone()))?;

        let recipients = self.recipients.clone().unwrap_or_default();
        let department_id = self.department_id.clone().flatten();
        if let Some(missing) =
            find_missing_reference(&recipients, department_id.as_ref(), ctx).await
        {
            return Err(UseCaseError::InvalidReference(missing));
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(UseCaseError::EmptyName);
            }
            list.name = name.trim().to_string();
        }
        if let Some(lead_days) = self.lead_days {
            list.lead_days = lead_days;
        }
        if self.department_id.is_some() {
            list.department_id = department_id;
        }
        if self.recipients.is_some() {
            list.set_recipients(recipients);
        }

        ctx.repos
            .reminder_lists
            .save(&list)
            .await
            .map_err(|_| UseCaseError::Storage)?;
        Ok(list)
    }
}
