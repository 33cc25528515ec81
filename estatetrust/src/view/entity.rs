//! Forms that add a record to the estate of the signed-in grantor.

use super::form::{self, ValidationErrors};
use super::ui::{Route, Toast, Ui};
use crate::{
    asset::{Asset, AssetDraft},
    beneficiary::{Beneficiary, BeneficiaryDraft, BeneficiaryRelation},
    lifecycle::Rejected,
    monetary::{Monetary, MonetaryDraft},
    storage::Storage,
    store::{ResourceContainer, Store},
    trustee::{Trustee, TrusteeDraft, TrusteeRelation},
    util, AccountType, Client, CreateResponse, Resource,
};
use displaydoc::Display;
use thiserror::Error;

/// Error returned when a form is submitted.
#[derive(Debug, Display, Error)]
pub enum SubmitError {
    /// invalid input: {0}
    Invalid(#[from] ValidationErrors),
    /// the previous submission is still pending
    Pending,
    /// trustee accounts may not add records
    NotPermitted,
    /// {0}
    Rejected(#[from] Rejected),
}

/// A form whose submission creates one record.
pub trait CreateForm: Default {
    type Resource: Resource;

    /// The screen that shows the form.
    const ROUTE: Route;

    /// Validates the fields and builds the request payload.
    fn validate(&self) -> Result<<Self::Resource as Resource>::Draft, ValidationErrors>;

    fn container(store: &mut Store) -> &mut ResourceContainer<Self::Resource>;

    fn success_toast() -> Toast {
        let name = <Self::Resource as Resource>::NAME;
        Toast::success(
            format!("{} Added", util::title_case(name)),
            format!("The {} has been successfully added.", name),
        )
    }

    fn error_toast() -> Toast {
        Toast::error(format!(
            "An error occurred while adding the {}.",
            <Self::Resource as Resource>::NAME
        ))
    }
}

/// Submits a form on behalf of a grantor.
///
/// Invalid input and trustee sessions are refused without a request. On success the form is
/// reset, a success toast is shown and the dashboard is opened; on failure an error toast is
/// shown and the fields are kept.
pub async fn submit<F, TStorage>(
    form: &mut F,
    ui: &mut Ui,
    store: &mut Store,
    client: &mut Client<TStorage>,
    grantor_id: &str,
) -> Result<CreateResponse, SubmitError>
where
    F: CreateForm,
    TStorage: Storage,
{
    let container = F::container(store);
    if container.is_creating() {
        return Err(SubmitError::Pending);
    }
    let account_type = client
        .storage()
        .account_type()
        .await
        .map_err(|e| Rejected(crate::Error::<TStorage::Error>::Storage(e).message()))?;
    if account_type == Some(AccountType::Trustee) {
        return Err(SubmitError::NotPermitted);
    }
    let draft = form.validate()?;
    match container.create(client, grantor_id, &draft).await {
        Ok(response) => {
            *form = F::default();
            ui.toast(F::success_toast());
            ui.navigate(Route::Dashboard);
            Ok(response)
        }
        Err(e) => {
            ui.toast(F::error_toast());
            Err(e.into())
        }
    }
}

/// Form for adding a physical asset.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct AssetForm {
    pub name: String,
    pub location: String,
    /// Id of the beneficiary, chosen from
    /// [`BeneficiaryDirectory::options`](crate::directory::BeneficiaryDirectory::options).
    pub will_to: String,
    pub note: String,
}

impl CreateForm for AssetForm {
    type Resource = Asset;

    const ROUTE: Route = Route::AddPhysicalAsset;

    fn validate(&self) -> Result<AssetDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.check(form::required("name", &self.name));
        let location = errors.check(form::required("location", &self.location));
        let will_to = errors.check(form::required("will_to", &self.will_to));
        let note = errors.check(form::required("note", &self.note));
        match (name, location, will_to, note) {
            (Some(name), Some(location), Some(will_to), Some(note)) => Ok(AssetDraft {
                name,
                location,
                will_to,
                note,
            }),
            _ => Err(errors),
        }
    }

    fn container(store: &mut Store) -> &mut ResourceContainer<Asset> {
        &mut store.assets
    }
}

/// Form for adding a monetary asset.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MonetaryForm {
    pub acc_name: String,
    pub acc_number: String,
    pub amount: String,
    pub bank_name: String,
    pub will_to: String,
    pub note: String,
}

impl CreateForm for MonetaryForm {
    type Resource = Monetary;

    const ROUTE: Route = Route::AddMonetaryAsset;

    fn validate(&self) -> Result<MonetaryDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let acc_name = errors.check(form::required("acc_name", &self.acc_name));
        let acc_number = errors.check(form::required("acc_number", &self.acc_number));
        let amount = errors.check(form::required("amount", &self.amount));
        let bank_name = errors.check(form::required("bank_name", &self.bank_name));
        let will_to = errors.check(form::required("will_to", &self.will_to));
        let note = errors.check(form::required("note", &self.note));
        match (acc_name, acc_number, amount, bank_name, will_to, note) {
            (
                Some(acc_name),
                Some(acc_number),
                Some(amount),
                Some(bank_name),
                Some(will_to),
                Some(note),
            ) => Ok(MonetaryDraft {
                acc_name,
                acc_number,
                amount,
                bank_name,
                will_to,
                note,
            }),
            _ => Err(errors),
        }
    }

    fn container(store: &mut Store) -> &mut ResourceContainer<Monetary> {
        &mut store.monetaries
    }
}

/// Form for adding a beneficiary.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct BeneficiaryForm {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub relation: String,
}

impl CreateForm for BeneficiaryForm {
    type Resource = Beneficiary;

    const ROUTE: Route = Route::AddBeneficiary;

    fn validate(&self) -> Result<BeneficiaryDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let first_name = errors.check(form::required("first_name", &self.first_name));
        let relation =
            errors.check(form::choice::<BeneficiaryRelation>("relation", &self.relation));
        match (first_name, relation) {
            (Some(first_name), Some(relation)) => Ok(BeneficiaryDraft {
                first_name,
                middle_name: self.middle_name.trim().to_owned(),
                last_name: self.last_name.trim().to_owned(),
                relation,
            }),
            _ => Err(errors),
        }
    }

    fn container(store: &mut Store) -> &mut ResourceContainer<Beneficiary> {
        &mut store.beneficiaries
    }
}

/// Form for appointing a trustee.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TrusteeForm {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub relation: String,
    pub note: String,
}

impl CreateForm for TrusteeForm {
    type Resource = Trustee;

    const ROUTE: Route = Route::AddTrustee;

    fn validate(&self) -> Result<TrusteeDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let first_name = errors.check(form::required("first_name", &self.first_name));
        let username = errors.check(form::required("username", &self.username));
        let email = errors.check(form::required("email", &self.email));
        let phone_number = errors.check(form::required("phone_number", &self.phone_number));
        let password = if self.password.is_empty() {
            errors.push(form::FieldError::Required { field: "password" });
            None
        } else {
            Some(self.password.clone())
        };
        let relation = errors.check(form::choice::<TrusteeRelation>("relation", &self.relation));
        match (first_name, username, email, phone_number, password, relation) {
            (
                Some(first_name),
                Some(username),
                Some(email),
                Some(phone_number),
                Some(password),
                Some(relation),
            ) => Ok(TrusteeDraft {
                first_name,
                middle_name: self.middle_name.trim().to_owned(),
                last_name: self.last_name.trim().to_owned(),
                username,
                email,
                phone_number,
                password,
                relation,
                note: self.note.trim().to_owned(),
            }),
            _ => Err(errors),
        }
    }

    fn container(store: &mut Store) -> &mut ResourceContainer<Trustee> {
        &mut store.trustees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_form_requires_every_field() {
        let form = AssetForm {
            name: "Watch".to_owned(),
            ..AssetForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.get("will_to").is_some());
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn beneficiary_form_parses_relation() {
        let form = BeneficiaryForm {
            first_name: "Ada".to_owned(),
            relation: "Stepdaughter".to_owned(),
            ..BeneficiaryForm::default()
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.relation, BeneficiaryRelation::Stepdaughter);

        let form = BeneficiaryForm {
            relation: "uncle".to_owned(),
            ..form
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn toast_texts() {
        assert_eq!(AssetForm::success_toast().title, "Asset Added");
        assert_eq!(
            MonetaryForm::success_toast().description,
            "The monetary asset has been successfully added."
        );
        assert_eq!(
            TrusteeForm::error_toast().description,
            "An error occurred while adding the trustee."
        );
    }
}
