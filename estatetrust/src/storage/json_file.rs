use crate::{storage::Storage, AccountType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;
use tokio::{fs, io};

/// The data of a [`JsonFileStorage`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JsonFileStorageData {
    #[serde(rename = "authToken")]
    pub token: Option<String>,
    pub account_type: Option<AccountType>,
    pub session_id: Option<String>,
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to serialize/deserialize storage")]
    Serde(#[from] serde_json::Error),
    #[error("IO error while reading or writing storage")]
    Io(#[from] io::Error),
}

/// A storage that writes the session to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a new [`JsonFileStorage`].
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored data. A missing file reads as empty data.
    pub async fn read_data(&self) -> Result<JsonFileStorageData, Error> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(JsonFileStorageData::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn write_data(&self, data: &JsonFileStorageData) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let value = serde_json::to_vec_pretty(data)?;
        fs::write(&self.path, &value).await?;
        Ok(())
    }

    async fn modify_data<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut JsonFileStorageData) + Send,
    {
        let mut data = self.read_data().await?;
        f(&mut data);
        self.write_data(&data).await
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    type Error = Error;

    async fn token(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.read_data().await?.token)
    }

    async fn save_token(&mut self, value: &str) -> Result<(), Self::Error> {
        self.modify_data(|data| data.token = Some(value.to_owned()))
            .await
    }

    async fn account_type(&self) -> Result<Option<AccountType>, Self::Error> {
        Ok(self.read_data().await?.account_type)
    }

    async fn save_account_type(&mut self, value: AccountType) -> Result<(), Self::Error> {
        self.modify_data(|data| data.account_type = Some(value))
            .await
    }

    async fn session_id(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.read_data().await?.session_id)
    }

    async fn save_session_id(&mut self, value: &str) -> Result<(), Self::Error> {
        self.modify_data(|data| data.session_id = Some(value.to_owned()))
            .await
    }

    async fn clear(&mut self) -> Result<(), Self::Error> {
        self.write_data(&JsonFileStorageData::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("session.json"));
        assert_eq!(storage.token().await.unwrap(), None);
        assert_eq!(storage.account_type().await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let mut storage = JsonFileStorage::new(&path);
        storage.save_token("t1").await.unwrap();
        storage.save_account_type(AccountType::Trustee).await.unwrap();
        storage.save_session_id("tr-9").await.unwrap();

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(reopened.token().await.unwrap(), Some("t1".to_owned()));
        assert_eq!(
            reopened.account_type().await.unwrap(),
            Some(AccountType::Trustee)
        );
        assert_eq!(reopened.session_id().await.unwrap(), Some("tr-9".to_owned()));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"authToken\""));
        assert!(raw.contains("\"trustee\""));
    }

    #[tokio::test]
    async fn clear_wipes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("session.json"));
        storage.save_token("t1").await.unwrap();
        storage.clear().await.unwrap();
        assert_eq!(storage.read_data().await.unwrap(), JsonFileStorageData::default());
    }
}
