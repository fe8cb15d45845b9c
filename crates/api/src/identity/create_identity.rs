use crate::{
    error::BirthdayReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthday_reminder_api_structs::create_identity::*;
use birthday_reminder_domain::Identity;
use birthday_reminder_infra::BirthdayContext;

pub async fn create_identity_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdayContext>,
) -> Result<HttpResponse, BirthdayReminderError> {
    let body = body.0;
    let usecase = CreateIdentityUseCase {
        name: body.name,
        email: body.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|identity| HttpResponse::Created().json(APIResponse::new(identity)))
        .map_err(BirthdayReminderError::from)
}

#[derive(Debug)]
pub struct CreateIdentityUseCase {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    InvalidEmail(String),
    Storage,
}

impl From<UseCaseError> for BirthdayReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => Self::BadClientData("An identity needs a name".into()),
            UseCaseError::InvalidEmail(email) => {
                Self::BadClientData(format!("The email: {}, is not valid.", email))
            }
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateIdentityUseCase {
    type Response = Identity;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateIdentity";

    async fn execute(&mut self, ctx: &BirthdayContext) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        let email = self
            .email
            .as_ref()
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());
        if let Some(email) = &email {
            if !is_valid_email(email) {
                return Err(UseCaseError::InvalidEmail(email.clone()));
            }
        }

        let identity = Identity::new(self.name.trim().to_string(), email);
        ctx.repos
            .identities
            .insert(&identity)
            .await
            .map_err(|_| UseCaseError::Storage)?;
        Ok(identity)
    }
}
