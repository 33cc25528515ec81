//! Resolution of beneficiary ids to display names.

use crate::{beneficiary::Beneficiary, grantor::Profile};
use std::collections::HashMap;

/// An entry of a beneficiary select control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    /// The beneficiary id that is submitted.
    pub value: String,
    /// The display name that is shown.
    pub label: String,
}

/// Lookup of the beneficiaries known to the client.
///
/// Assets and monetary assets reference their beneficiary by id (`will_to`). Every view that
/// shows such a reference resolves it through this type.
///
/// # Example
///
/// ```
/// use estatetrust::directory::BeneficiaryDirectory;
///
/// let directory = BeneficiaryDirectory::default();
/// assert_eq!(directory.resolve("b-unknown"), "b-unknown");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BeneficiaryDirectory {
    names: HashMap<String, String>,
    options: Vec<SelectOption>,
}

impl BeneficiaryDirectory {
    /// Creates a directory from a list of beneficiaries. Order is kept for the select options.
    pub fn new<'a, I>(beneficiaries: I) -> Self
    where
        I: IntoIterator<Item = &'a Beneficiary>,
    {
        let mut directory = Self::default();
        for beneficiary in beneficiaries {
            let label = beneficiary.display_name();
            directory
                .names
                .insert(beneficiary.uuid_pk.clone(), label.clone());
            directory.options.push(SelectOption {
                value: beneficiary.uuid_pk.clone(),
                label,
            });
        }
        directory
    }

    /// Creates a directory from the beneficiaries of a profile.
    pub fn from_profile(profile: &Profile) -> Self {
        Self::new(&profile.beneficiaries)
    }

    /// Returns the display name of a beneficiary, or the id itself if it is unknown.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        match self.names.get(id) {
            Some(name) if !name.is_empty() => name,
            _ => id,
        }
    }

    /// Returns whether the id belongs to a known beneficiary.
    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
