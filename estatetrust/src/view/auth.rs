//! Sign-in, sign-up and sign-out.

use super::entity::SubmitError;
use super::form::{self, FieldError, ValidationErrors};
use super::ui::{Route, Toast, Ui};
use crate::{
    lifecycle::Rejected, storage::Storage, store::Store, AccountType, AuthSession, Client,
    Gender, LoginData, RegisterData,
};
use std::time::{Duration, Instant};

/// How long an error banner stays up before the error is cleared.
pub const ERROR_CLEAR_DELAY: Duration = Duration::from_secs(10);

/// A one-shot timer that clears a container error some time after it appeared.
///
/// The timer is armed once when an error appears, cancelled when the error goes away or the view
/// is torn down, and fires at most once. Time is passed in by the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    armed: Option<Armed>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Armed {
    message: String,
    deadline: Instant,
}

impl ErrorBanner {
    /// Follows the current error. Arms the timer if a new error appeared, cancels it if the
    /// error went away. Observing the same error again leaves the deadline untouched.
    pub fn observe(&mut self, error: Option<&str>, now: Instant) {
        match (error, &self.armed) {
            (None, Some(_)) => self.cancel(),
            (Some(message), None) => self.arm(message, now),
            (Some(message), Some(armed)) if armed.message != message => self.arm(message, now),
            _ => {}
        }
    }

    fn arm(&mut self, message: &str, now: Instant) {
        tracing::debug!(error = %message, "error banner armed");
        self.armed = Some(Armed {
            message: message.to_owned(),
            deadline: now + ERROR_CLEAR_DELAY,
        });
    }

    /// Disarms the timer without firing it.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Returns `true` exactly once, when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.armed {
            Some(armed) if now >= armed.deadline => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.as_ref().map(|v| v.deadline)
    }
}

/// The sign-in screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub username: String,
    pub password: String,
    /// `grantor` or `trustee`. Blank signs in a grantor.
    pub account_type: String,
    pub error_banner: ErrorBanner,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<LoginData, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let username = errors.check(form::required("username", &self.username));
        let password = errors.check(form::password("password", &self.password));
        let account_type = errors
            .check(form::optional_choice::<AccountType>(
                "account_type",
                &self.account_type,
            ))
            .map(|v| v.unwrap_or(AccountType::Grantor));
        match (username, password, account_type) {
            (Some(username), Some(password), Some(account_type)) => {
                Ok(LoginData::new(username, password, account_type))
            }
            _ => Err(errors),
        }
    }

    /// Signs in and opens the dashboard.
    ///
    /// On failure the error is kept in the auth container and shown by the banner until it is
    /// cleared by [`tick`](Self::tick).
    pub async fn submit<TStorage: Storage>(
        &mut self,
        ui: &mut Ui,
        store: &mut Store,
        client: &mut Client<TStorage>,
        now: Instant,
    ) -> Result<AuthSession, SubmitError> {
        if store.auth.is_loading() {
            return Err(SubmitError::Pending);
        }
        let data = self.validate()?;
        self.error_banner.cancel();
        let result = store.auth.login(client, &data).await.cloned();
        self.error_banner.observe(store.auth.error(), now);
        let session = result?;
        self.password.clear();
        ui.navigate(Route::Dashboard);
        Ok(session)
    }

    /// The text of the error banner.
    pub fn banner<'a>(&self, store: &'a Store) -> Option<&'a str> {
        store.auth.error()
    }

    /// Advances the banner timer; clears the error once the delay has passed.
    pub fn tick(&mut self, store: &mut Store, now: Instant) {
        self.error_banner.observe(store.auth.error(), now);
        if self.error_banner.poll(now) {
            store.auth.clear_error();
        }
    }

    /// Tears the view down, cancelling a pending clear.
    pub fn teardown(&mut self) {
        self.error_banner.cancel();
    }
}

/// The sign-up screen for grantors.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegisterView {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    /// Formatted as `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub gender: String,
    pub password: String,
    pub error_banner: ErrorBanner,
}

impl RegisterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<RegisterData, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let first_name = errors.check(form::required("first_name", &self.first_name));
        let username = errors.check(form::required("username", &self.username));
        let email = errors.check(form::email("email", &self.email));
        let phone_number = errors.check(form::required("phone_number", &self.phone_number));
        let date_of_birth = errors
            .check(form::optional_date("date_of_birth", &self.date_of_birth))
            .and_then(|v| match v {
                Some(v) => Some(v),
                None => {
                    errors.push(FieldError::Required {
                        field: "date_of_birth",
                    });
                    None
                }
            });
        let gender = errors.check(form::choice::<Gender>("gender", &self.gender));
        let password = errors.check(form::password("password", &self.password));
        match (
            first_name,
            username,
            email,
            phone_number,
            date_of_birth,
            gender,
            password,
        ) {
            (
                Some(first_name),
                Some(username),
                Some(email),
                Some(phone_number),
                Some(date_of_birth),
                Some(gender),
                Some(password),
            ) => Ok(RegisterData::new(username, password, email, first_name)
                .with_middle_name(self.middle_name.trim())
                .with_last_name(self.last_name.trim())
                .with_phone_number(phone_number)
                .with_date_of_birth(date_of_birth)
                .with_gender(gender)),
            _ => Err(errors),
        }
    }

    /// Registers the grantor and opens the sign-in screen.
    pub async fn submit<TStorage: Storage>(
        &mut self,
        ui: &mut Ui,
        store: &mut Store,
        client: &mut Client<TStorage>,
        now: Instant,
    ) -> Result<(), SubmitError> {
        if store.registration.is_loading() {
            return Err(SubmitError::Pending);
        }
        let data = self.validate()?;
        self.error_banner.cancel();
        let result = store.registration.register(client, &data).await;
        self.error_banner.observe(store.registration.error(), now);
        result?;
        *self = Self::default();
        ui.toast(Toast::success(
            "Registration Successful",
            "You have successfully registered.",
        ));
        ui.navigate(Route::Login);
        Ok(())
    }

    pub fn banner<'a>(&self, store: &'a Store) -> Option<&'a str> {
        store.registration.error()
    }

    pub fn tick(&mut self, store: &mut Store, now: Instant) {
        self.error_banner.observe(store.registration.error(), now);
        if self.error_banner.poll(now) {
            store.registration.clear_error();
        }
    }

    pub fn teardown(&mut self) {
        self.error_banner.cancel();
    }
}

/// Signs out and returns to the login page.
pub async fn logout<TStorage: Storage>(
    ui: &mut Ui,
    store: &mut Store,
    client: &mut Client<TStorage>,
) -> Result<(), Rejected> {
    store.auth.logout(client).await?;
    store.profile = Default::default();
    ui.navigate(Route::Login);
    Ok(())
}
