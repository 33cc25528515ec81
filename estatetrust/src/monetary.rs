//! Module for monetary asset resources: bank accounts and the amount held in them.

use crate::{storage::Storage, util, Client, CreateResponse, Resource};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

pub use request::*;

mod request;

/// A monetary asset, willed to a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Monetary {
    pub uuid_pk: String,
    pub acc_name: String,
    pub acc_number: String,
    /// The amount as entered by the grantor. The API does not interpret it.
    pub amount: String,
    pub bank_name: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub owner_id: String,
    pub will_to: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub note: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Data used for creating a monetary asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonetaryDraft {
    pub acc_name: String,
    pub acc_number: String,
    pub amount: String,
    pub bank_name: String,
    pub will_to: String,
    pub note: String,
}

/// Data used for partially updating a monetary asset.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Setters, Serialize)]
#[setters(strip_option, into, prefix = "with_")]
pub struct MonetaryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[async_trait]
impl Resource for Monetary {
    type Draft = MonetaryDraft;
    type Patch = MonetaryPatch;

    const NAME: &'static str = "monetary asset";

    fn id(&self) -> &str {
        &self.uuid_pk
    }

    async fn get_all<TStorage: Storage>(
        client: &mut Client<TStorage>,
        grantor_id: &str,
    ) -> crate::Result<Vec<Self>, TStorage::Error> {
        let request = GetAll::builder().grantor_id(grantor_id).build();
        client.send(&request).await
    }

    async fn create<TStorage: Storage>(
        client: &mut Client<TStorage>,
        grantor_id: &str,
        draft: &Self::Draft,
    ) -> crate::Result<CreateResponse, TStorage::Error> {
        let request = Create::builder()
            .grantor_id(grantor_id)
            .draft(draft.clone())
            .build();
        client.send(&request).await
    }

    async fn modify<TStorage: Storage>(
        client: &mut Client<TStorage>,
        grantor_id: &str,
        id: &str,
        patch: &Self::Patch,
    ) -> crate::Result<Self, TStorage::Error> {
        let request = Modify::builder()
            .grantor_id(grantor_id)
            .monetary_id(id)
            .patch(patch.clone())
            .build();
        client.send(&request).await
    }

    async fn delete<TStorage: Storage>(
        client: &mut Client<TStorage>,
        grantor_id: &str,
        id: &str,
    ) -> crate::Result<(), TStorage::Error> {
        let request = Delete::builder()
            .grantor_id(grantor_id)
            .monetary_id(id)
            .build();
        client.send(&request).await
    }
}
