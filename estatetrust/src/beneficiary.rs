//! Module for beneficiary resources.

use crate::{storage::Storage, util, Client, CreateResponse, Resource};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

pub use request::*;

mod request;

string_enum! {
    /// Relation of a beneficiary to the grantor.
    pub enum BeneficiaryRelation {
        Brother => "brother",
        Cousin => "cousin",
        Daughter => "daughter",
        Father => "father",
        Friend => "friend",
        Grandchild => "grandchild",
        Husband => "husband",
        Inlaw => "inlaw",
        Mother => "mother",
        Nephew => "nephew",
        Sister => "sister",
        Son => "son",
        Stepson => "stepson",
        Stepdaughter => "stepdaughter",
        Wife => "wife",
    }
}

/// A person the grantor wills assets to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Beneficiary {
    pub uuid_pk: String,
    pub first_name: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub middle_name: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub last_name: String,
    pub relation: BeneficiaryRelation,
    /// Id of the grantor who added the beneficiary.
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub added_by: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Beneficiary {
    /// Returns the non-empty name parts joined by spaces.
    pub fn display_name(&self) -> String {
        util::display_name(&[&self.first_name, &self.middle_name, &self.last_name])
    }
}

/// Data used for creating a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BeneficiaryDraft {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub relation: BeneficiaryRelation,
}

/// Data used for partially updating a beneficiary.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Setters, Serialize)]
#[setters(strip_option, prefix = "with_")]
pub struct BeneficiaryPatch {
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
    pub relation: Option<BeneficiaryRelation>,
}

#[async_trait]
impl Resource for Beneficiary {
    type Draft = BeneficiaryDraft;
    type Patch = BeneficiaryPatch;

    const NAME: &'static str = "beneficiary";

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
            .beneficiary_id(id)
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
            .beneficiary_id(id)
            .build();
        client.send(&request).await
    }
}
