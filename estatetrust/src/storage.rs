//! Module for persisted client storage.
//!
//! The storage holds the access token that is attached to every request, the account type that
//! gates what the user may change and the id of the signed-in account.

use crate::AccountType;
use async_trait::async_trait;
use std::error::Error;

mod json_file;
mod memory;

pub use json_file::{JsonFileStorage, JsonFileStorageData};
pub use memory::MemoryStorage;

/// Key under which the access token is stored.
pub const TOKEN_KEY: &str = "authToken";
/// Key under which the account type is stored.
pub const ACCOUNT_TYPE_KEY: &str = "account_type";
/// Key under which the id of the signed-in account is stored.
pub const SESSION_ID_KEY: &str = "session_id";

/// A trait for persisting the session on the client.
#[async_trait]
pub trait Storage: Send + Sync {
    type Error: Error + Send + Sync + 'static;

    async fn token(&self) -> Result<Option<String>, Self::Error>;
    async fn save_token(&mut self, value: &str) -> Result<(), Self::Error>;

    async fn account_type(&self) -> Result<Option<AccountType>, Self::Error>;
    async fn save_account_type(&mut self, value: AccountType) -> Result<(), Self::Error>;

    async fn session_id(&self) -> Result<Option<String>, Self::Error>;
    async fn save_session_id(&mut self, value: &str) -> Result<(), Self::Error>;

    async fn clear(&mut self) -> Result<(), Self::Error>;
}
