//! Rust bindings and client-side state for the EstateTrust estate-planning API.
//!
//! A grantor records physical and monetary assets, designates beneficiaries and appoints
//! trustees. The crate is layered the same way the web client is:
//!
//! * [`Client`] wraps the HTTP verbs and attaches the persisted access token.
//! * Typed requests live in the resource modules ([`asset`], [`monetary`], [`beneficiary`],
//!   [`trustee`], [`grantor`]) and are sent with [`Client::send`].
//! * [`store`] holds one lifecycle container per resource.
//! * [`view`] holds the headless forms and the dashboard.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

use async_trait::async_trait;
use derive_setters::Setters;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use std::result::Result as StdResult;
use thiserror::Error as ThisError;
use url::Url;

pub use client::Client;
pub use error::{Error, RequestResponseError, FALLBACK_MESSAGE};
pub use response::CreateResponse;

#[macro_use]
mod util;

mod client;
mod error;

pub mod asset;
pub mod beneficiary;
pub mod directory;
pub mod grantor;
pub mod lifecycle;
pub mod monetary;
pub mod response;
pub mod storage;
pub mod store;
pub mod transport;
pub mod trustee;
pub mod view;

/// Type alias for `Result<T, Error<TStorageError>>`.
pub type Result<T, TStorageError> = StdResult<T, Error<TStorageError>>;

/// Struct for specifying the URL of the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Urls {
    /// The versioned API root, e.g. `https://estatetrust.example/api/v1`.
    pub base: Url,
}

impl Urls {
    /// Creates a new [`Urls`] type from the versioned API root.
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Creates a new [`Urls`] type from the address of a server.
    ///
    /// | Field    | URL                   |
    /// |----------|-----------------------|
    /// | [`base`] | *\<url\>*/api/v1      |
    ///
    /// [`base`]: Self::base
    pub fn from_server(url: Url) -> StdResult<Self, url::ParseError> {
        let mut url = url;
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Ok(Self {
            base: url.join("api/v1")?,
        })
    }
}

// Returned when a string is not one of the accepted choices.
#[derive(Debug, Clone, PartialEq, Eq, Display, ThisError)]
/// unknown value `{value}`, expected one of: {expected}
pub struct ParseChoiceError {
    pub value: String,
    pub expected: String,
}

string_enum! {
    /// The type of an account.
    ///
    /// Trustees may view a grantor's estate but not change it.
    pub enum AccountType {
        Grantor => "grantor",
        Trustee => "trustee",
    }
}

impl AccountType {
    /// Returns whether this account may add or delete estate records.
    pub fn can_modify(&self) -> bool {
        matches!(self, Self::Grantor)
    }
}

string_enum! {
    /// Gender of a grantor.
    pub enum Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

/// Data used for performing logins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LoginData {
    pub username: String,
    pub password: String,
    pub account_type: AccountType,
}

impl LoginData {
    /// Creates a new [`LoginData`].
    pub fn new<U, P>(username: U, password: P, account_type: AccountType) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            username: username.into(),
            password: password.into(),
            account_type,
        }
    }
}

/// Response of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub id: String,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct AuthSession {
    pub access_token: String,
    /// Id of the signed-in grantor or trustee.
    pub id: String,
    pub account_type: AccountType,
}

/// Data used for registering a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Setters, Serialize)]
#[setters(strip_option, prefix = "with_")]
pub struct RegisterData {
    #[setters(skip)]
    pub username: String,
    #[setters(skip)]
    pub password: String,
    #[setters(skip)]
    pub email: String,
    #[setters(skip)]
    pub first_name: String,
    #[setters(into)]
    pub middle_name: String,
    #[setters(into)]
    pub last_name: String,
    #[setters(into)]
    pub phone_number: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub gender: Option<Gender>,
}

impl RegisterData {
    /// Creates a new [`RegisterData`].
    pub fn new<U, P, E, F>(username: U, password: P, email: E, first_name: F) -> Self
    where
        U: Into<String>,
        P: Into<String>,
        E: Into<String>,
        F: Into<String>,
    {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            first_name: first_name.into(),
            middle_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            date_of_birth: None,
            gender: None,
        }
    }
}

/// Trait for typed API requests.
///
/// Requests are plain values; [`Client::send`] turns them into futures.
pub trait Request<'request, 'client, TStorage> {
    type Output;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output;
}

/// Trait for the estate records a grantor keeps: assets, monetary assets, beneficiaries and
/// trustees.
///
/// Every record is owned by a grantor, so each operation is scoped by the grantor's id.
#[async_trait]
pub trait Resource: Clone + Send + Sync + Sized {
    /// Payload used to create the record.
    type Draft: Send + Sync;
    /// Payload used to partially update the record.
    type Patch: Send + Sync;

    /// Lowercase name used in log events and user-facing messages.
    const NAME: &'static str;

    /// Returns the server-assigned id.
    fn id(&self) -> &str;

    async fn get_all<TStorage: storage::Storage>(
        client: &mut Client<TStorage>,
        grantor_id: &str,
    ) -> Result<Vec<Self>, TStorage::Error>;

    async fn create<TStorage: storage::Storage>(
        client: &mut Client<TStorage>,
        grantor_id: &str,
        draft: &Self::Draft,
    ) -> Result<CreateResponse, TStorage::Error>;

    async fn modify<TStorage: storage::Storage>(
        client: &mut Client<TStorage>,
        grantor_id: &str,
        id: &str,
        patch: &Self::Patch,
    ) -> Result<Self, TStorage::Error>;

    async fn delete<TStorage: storage::Storage>(
        client: &mut Client<TStorage>,
        grantor_id: &str,
        id: &str,
    ) -> Result<(), TStorage::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_from_server() {
        let urls = Urls::from_server(Url::parse("https://estatetrust.example").unwrap()).unwrap();
        assert_eq!(urls.base.as_str(), "https://estatetrust.example/api/v1");
    }

    #[test]
    fn account_type_round_trips_through_strings() {
        assert_eq!("Trustee".parse::<AccountType>().unwrap(), AccountType::Trustee);
        assert_eq!(AccountType::Grantor.to_string(), "grantor");
        let error = "admin".parse::<AccountType>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown value `admin`, expected one of: grantor, trustee"
        );
    }

    #[test]
    fn only_grantors_modify() {
        assert!(AccountType::Grantor.can_modify());
        assert!(!AccountType::Trustee.can_modify());
    }
}
