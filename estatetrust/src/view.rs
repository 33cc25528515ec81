//! Headless views: the state and handlers of every screen, without any rendering.
//!
//! A front end owns a [`Ui`], a [`Store`](crate::store::Store) and a [`Client`](crate::Client)
//! and passes them to the handlers of the screen that is shown.

mod auth;
mod dashboard;
mod entity;
mod form;
mod ui;

pub use auth::{logout, ErrorBanner, LoginView, RegisterView, ERROR_CLEAR_DELAY};
pub use dashboard::{
    AssetRow, BeneficiaryRow, Dashboard, DeleteError, MonetaryRow, RowKind, TrusteeRow,
};
pub use entity::{
    submit, AssetForm, BeneficiaryForm, CreateForm, MonetaryForm, SubmitError, TrusteeForm,
};
pub use form::{FieldError, ValidationErrors, MIN_PASSWORD_LEN};
pub use ui::{Route, Toast, ToastKind, Ui};
