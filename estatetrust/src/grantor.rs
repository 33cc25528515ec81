//! Module for the grantor account and its dashboard profile.

use crate::{
    asset::Asset, beneficiary::Beneficiary, monetary::Monetary, trustee::Trustee, util, Gender,
};
use chrono::{NaiveDate, NaiveDateTime};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

pub use request::*;

mod request;

/// The profile of a grantor together with every record of the estate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Profile {
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
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub beneficiaries: Vec<Beneficiary>,
    /// The trustees appointed by the grantor.
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub executors: Vec<Trustee>,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub assets: Vec<Asset>,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub monetaries: Vec<Monetary>,
}

impl Profile {
    /// Returns the non-empty name parts joined by spaces.
    pub fn display_name(&self) -> String {
        util::display_name(&[&self.first_name, &self.middle_name, &self.last_name])
    }
}

/// Data used for partially updating a grantor's profile.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Setters, Serialize)]
#[setters(strip_option, prefix = "with_")]
pub struct ProfilePatch {
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
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}
