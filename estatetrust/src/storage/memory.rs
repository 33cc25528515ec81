use crate::{storage::Storage, AccountType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// A storage that keeps the session in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryStorage {
    pub token: Option<String>,
    pub account_type: Option<AccountType>,
    pub session_id: Option<String>,
}

impl MemoryStorage {
    /// Creates a [`MemoryStorage`] that already holds a token.
    pub fn with_token<S: Into<String>>(token: S) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    type Error = Infallible;

    async fn token(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.token.clone())
    }

    async fn save_token(&mut self, value: &str) -> Result<(), Self::Error> {
        self.token = Some(value.to_owned());
        Ok(())
    }

    async fn account_type(&self) -> Result<Option<AccountType>, Self::Error> {
        Ok(self.account_type)
    }

    async fn save_account_type(&mut self, value: AccountType) -> Result<(), Self::Error> {
        self.account_type = Some(value);
        Ok(())
    }

    async fn session_id(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.session_id.clone())
    }

    async fn save_session_id(&mut self, value: &str) -> Result<(), Self::Error> {
        self.session_id = Some(value.to_owned());
        Ok(())
    }

    async fn clear(&mut self) -> Result<(), Self::Error> {
        self.token = None;
        self.account_type = None;
        self.session_id = None;
        Ok(())
    }
}
