//! Module for trustee resources.
//!
//! Trustees (called executors by the profile endpoint) hold an account of their own and may sign
//! in to view the estate of the grantor who appointed them.

use crate::{storage::Storage, util, Client, CreateResponse, Resource};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

pub use request::*;

mod request;

string_enum! {
    /// Relation of a trustee to the grantor.
    pub enum TrusteeRelation {
        Brother => "brother",
        Friend => "friend",
        Lawyer => "lawyer",
        Sister => "sister",
    }
}

/// A trustee appointed by a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Trustee {
    pub uuid_pk: String,
    pub username: String,
    pub first_name: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub middle_name: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub last_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub phone_number: String,
    pub relation: TrusteeRelation,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub added_by: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Trustee {
    /// Returns the non-empty name parts joined by spaces.
    pub fn display_name(&self) -> String {
        util::display_name(&[&self.first_name, &self.middle_name, &self.last_name])
    }
}

/// Data used for appointing a trustee.
///
/// The password becomes the trustee's login password.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrusteeDraft {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub relation: TrusteeRelation,
    pub note: String,
}

/// Data used for partially updating a trustee.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Setters, Serialize)]
#[setters(strip_option, prefix = "with_")]
pub struct TrusteePatch {
    #[setters(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[setters(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[setters(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<TrusteeRelation>,
    #[setters(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[async_trait]
impl Resource for Trustee {
    type Draft = TrusteeDraft;
    type Patch = TrusteePatch;

    const NAME: &'static str = "trustee";

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
            .trustee_id(id)
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
            .trustee_id(id)
            .build();
        client.send(&request).await
    }
}
