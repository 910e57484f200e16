//! Builders wiring validators, use cases and controllers together.
//!
//! Each endpoint controller comes out wrapped in [`LogControllerDecorator`].

use std::sync::Arc;

use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::HashComparer;
use crate::domain::account::ports::Hasher;
use crate::domain::account::ports::TokenIssuer;
use crate::domain::account::service::AddAccountService;
use crate::domain::account::service::AuthenticationService;
use crate::domain::log::ports::LogErrorRepository;
use crate::inbound::http::controllers::LogControllerDecorator;
use crate::inbound::http::controllers::LoginController;
use crate::inbound::http::controllers::SignUpController;
use crate::inbound::http::validation::CompareFieldsValidation;
use crate::inbound::http::validation::EmailValidation;
use crate::inbound::http::validation::EmailValidator;
use crate::inbound::http::validation::RequiredFieldValidation;
use crate::inbound::http::validation::Validation;
use crate::inbound::http::validation::ValidationComposite;

pub type SignUp<H, AR, L> =
    LogControllerDecorator<SignUpController<AddAccountService<H, AR>, ValidationComposite>, L>;

pub type Login<AR, HC, TI, L> = LogControllerDecorator<
    LoginController<AuthenticationService<AR, HC, TI>, ValidationComposite>,
    L,
>;

pub fn make_signup_validation<E: EmailValidator>(email_validator: Arc<E>) -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = ["name", "email", "password", "passwordConfirmation"]
        .into_iter()
        .map(|field| Box::new(RequiredFieldValidation::new(field)) as Box<dyn Validation>)
        .collect();

    validations.push(Box::new(CompareFieldsValidation::new(
        "password",
        "passwordConfirmation",
    )));
    validations.push(Box::new(EmailValidation::new("email", email_validator)));

    ValidationComposite::new(validations)
}

pub fn make_login_validation<E: EmailValidator>(email_validator: Arc<E>) -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = ["email", "password"]
        .into_iter()
        .map(|field| Box::new(RequiredFieldValidation::new(field)) as Box<dyn Validation>)
        .collect();

    validations.push(Box::new(EmailValidation::new("email", email_validator)));

    ValidationComposite::new(validations)
}

pub fn make_signup_controller<H, AR, E, L>(
    hasher: Arc<H>,
    account_repository: Arc<AR>,
    email_validator: Arc<E>,
    log_error_repository: Arc<L>,
) -> SignUp<H, AR, L>
where
    H: Hasher,
    AR: AccountRepository,
    E: EmailValidator,
    L: LogErrorRepository,
{
    let add_account = Arc::new(AddAccountService::new(hasher, account_repository));
    let controller = SignUpController::new(add_account, make_signup_validation(email_validator));

    LogControllerDecorator::new(controller, log_error_repository)
}

pub fn make_login_controller<AR, HC, TI, E, L>(
    account_repository: Arc<AR>,
    hash_comparer: Arc<HC>,
    token_issuer: Arc<TI>,
    email_validator: Arc<E>,
    log_error_repository: Arc<L>,
) -> Login<AR, HC, TI, L>
where
    AR: AccountRepository,
    HC: HashComparer,
    TI: TokenIssuer,
    E: EmailValidator,
    L: LogErrorRepository,
{
    let authentication = Arc::new(AuthenticationService::new(
        account_repository,
        hash_comparer,
        token_issuer,
    ));
    let controller = LoginController::new(authentication, make_login_validation(email_validator));

    LogControllerDecorator::new(controller, log_error_repository)
}
