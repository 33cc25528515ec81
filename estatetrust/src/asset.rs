//! Module for physical asset resources.

use crate::{storage::Storage, util, Client, CreateResponse, Resource};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

pub use request::*;

mod request;

/// A physical asset, willed to a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Asset {
    pub uuid_pk: String,
    pub name: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub location: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub owner_id: String,
    /// Id of the beneficiary the asset is willed to.
    pub will_to: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub note: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Data used for creating an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssetDraft {
    pub name: String,
    pub location: String,
    pub will_to: String,
    pub note: String,
}

impl AssetDraft {
    /// Creates a new [`AssetDraft`].
    pub fn new<N, L, W, O>(name: N, location: L, will_to: W, note: O) -> Self
    where
        N: Into<String>,
        L: Into<String>,
        W: Into<String>,
        O: Into<String>,
    {
        Self {
            name: name.into(),
            location: location.into(),
            will_to: will_to.into(),
            note: note.into(),
        }
    }
}

/// Data used for partially updating an asset. Unset fields are left untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Setters, Serialize)]
#[setters(strip_option, into, prefix = "with_")]
pub struct AssetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[async_trait]
impl Resource for Asset {
    type Draft = AssetDraft;
    type Patch = AssetPatch;

    const NAME: &'static str = "asset";

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
            .asset_id(id)
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
            .asset_id(id)
            .build();
        client.send(&request).await
    }
}
