use super::ui::{Toast, Ui};
use crate::{
    asset::Asset,
    beneficiary::Beneficiary,
    directory::BeneficiaryDirectory,
    grantor::Profile,
    lifecycle::Rejected,
    monetary::Monetary,
    storage::Storage,
    store::Store,
    trustee::Trustee,
    util, AccountType, Client, Error, Resource,
};
use displaydoc::Display;
use thiserror::Error;

string_enum! {
    /// The table a dashboard row belongs to.
    pub enum RowKind {
        Asset => "asset",
        Monetary => "monetary",
        Trustee => "trustee",
        Beneficiary => "beneficiary",
    }
}

impl RowKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Asset => Asset::NAME,
            Self::Monetary => Monetary::NAME,
            Self::Trustee => Trustee::NAME,
            Self::Beneficiary => Beneficiary::NAME,
        }
    }
}

/// Error returned when a dashboard row could not be deleted.
#[derive(Debug, Display, Error)]
pub enum DeleteError {
    /// trustee accounts may not delete records
    Disabled,
    /// no grantor is signed in
    NoSession,
    /// {0}
    Rejected(#[from] Rejected),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRow {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Display name of the beneficiary.
    pub will_to: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonetaryRow {
    pub id: String,
    pub acc_name: String,
    pub acc_number: String,
    pub amount: String,
    pub bank_name: String,
    /// Display name of the beneficiary.
    pub will_to: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrusteeRow {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub relation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BeneficiaryRow {
    pub id: String,
    pub name: String,
    pub relation: String,
}

/// The dashboard of the signed-in account.
///
/// Tables are read from the profile held by the store. A deleted row is dropped from that
/// profile right away, then the profile is fetched again to pick up what the server holds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dashboard {
    session_id: Option<String>,
    account_type: Option<AccountType>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn account_type(&self) -> Option<AccountType> {
        self.account_type
    }

    /// Loads the session and fetches what the dashboard shows.
    ///
    /// Does nothing if no session id is persisted. Grantors get their full profile, trustees
    /// their own record.
    pub async fn mount<TStorage: Storage>(
        &mut self,
        store: &mut Store,
        client: &mut Client<TStorage>,
    ) -> Result<(), Rejected> {
        let storage = client.storage();
        self.session_id = storage.session_id().await.map_err(storage_rejected::<TStorage>)?;
        self.account_type = storage
            .account_type()
            .await
            .map_err(storage_rejected::<TStorage>)?;
        let id = match &self.session_id {
            Some(v) => v.clone(),
            None => {
                tracing::debug!("no session, dashboard left empty");
                return Ok(());
            }
        };
        match self.account_type {
            Some(AccountType::Trustee) => {
                store.profile.fetch_trustee(client, &id).await.map(|_| ())
            }
            _ => store.profile.fetch(client, &id).await.map(|_| ()),
        }
    }

    /// Returns whether row delete controls are enabled.
    pub fn can_delete(&self) -> bool {
        self.account_type != Some(AccountType::Trustee)
    }

    pub fn profile<'a>(&self, store: &'a Store) -> Option<&'a Profile> {
        match self.account_type {
            Some(AccountType::Trustee) => None,
            _ => store.profile.profile(),
        }
    }

    pub fn directory(&self, store: &Store) -> BeneficiaryDirectory {
        self.profile(store)
            .map(BeneficiaryDirectory::from_profile)
            .unwrap_or_default()
    }

    pub fn asset_rows(&self, store: &Store) -> Vec<AssetRow> {
        let directory = self.directory(store);
        self.profile(store)
            .map(|profile| {
                profile
                    .assets
                    .iter()
                    .map(|v| AssetRow {
                        id: v.uuid_pk.clone(),
                        name: v.name.clone(),
                        location: v.location.clone(),
                        will_to: directory.resolve(&v.will_to).to_owned(),
                        note: v.note.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn monetary_rows(&self, store: &Store) -> Vec<MonetaryRow> {
        let directory = self.directory(store);
        self.profile(store)
            .map(|profile| {
                profile
                    .monetaries
                    .iter()
                    .map(|v| MonetaryRow {
                        id: v.uuid_pk.clone(),
                        acc_name: v.acc_name.clone(),
                        acc_number: v.acc_number.clone(),
                        amount: v.amount.clone(),
                        bank_name: v.bank_name.clone(),
                        will_to: directory.resolve(&v.will_to).to_owned(),
                        note: v.note.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn trustee_rows(&self, store: &Store) -> Vec<TrusteeRow> {
        self.profile(store)
            .map(|profile| {
                profile
                    .executors
                    .iter()
                    .map(|v| TrusteeRow {
                        id: v.uuid_pk.clone(),
                        name: v.display_name(),
                        username: v.username.clone(),
                        email: v.email.clone(),
                        phone_number: v.phone_number.clone(),
                        relation: v.relation.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn beneficiary_rows(&self, store: &Store) -> Vec<BeneficiaryRow> {
        self.profile(store)
            .map(|profile| {
                profile
                    .beneficiaries
                    .iter()
                    .map(|v| BeneficiaryRow {
                        id: v.uuid_pk.clone(),
                        name: v.display_name(),
                        relation: v.relation.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Deletes the record of a row.
    ///
    /// `id` is the id of the row acted on. Trustee sessions are refused without a request. On
    /// success the row is dropped, a toast is shown and the profile is fetched again. A failed
    /// refresh gets its own error toast and does not fail the delete.
    pub async fn delete<TStorage: Storage>(
        &mut self,
        ui: &mut Ui,
        store: &mut Store,
        client: &mut Client<TStorage>,
        kind: RowKind,
        id: &str,
    ) -> Result<(), DeleteError> {
        if !self.can_delete() {
            return Err(DeleteError::Disabled);
        }
        let grantor_id = self.session_id.clone().ok_or(DeleteError::NoSession)?;
        let result = match kind {
            RowKind::Asset => store.assets.delete(client, &grantor_id, id).await,
            RowKind::Monetary => store.monetaries.delete(client, &grantor_id, id).await,
            RowKind::Trustee => store.trustees.delete(client, &grantor_id, id).await,
            RowKind::Beneficiary => store.beneficiaries.delete(client, &grantor_id, id).await,
        };
        if let Err(e) = result {
            ui.toast(Toast::error(format!(
                "An error occurred while deleting the {}.",
                kind.name()
            )));
            return Err(e.into());
        }
        if let Some(profile) = store.profile.profile_mut() {
            forget_row(profile, kind, id);
        }
        ui.toast(Toast::success(
            format!("{} Deleted", util::title_case(kind.name())),
            format!("The {} has been successfully deleted.", kind.name()),
        ));
        if let Err(e) = store.profile.fetch(client, &grantor_id).await {
            tracing::warn!(error = %e, "dashboard refresh after delete failed");
            ui.toast(Toast::error("An error occurred while refreshing the dashboard."));
        }
        Ok(())
    }
}

fn forget_row(profile: &mut Profile, kind: RowKind, id: &str) {
    match kind {
        RowKind::Asset => profile.assets.retain(|v| v.uuid_pk != id),
        RowKind::Monetary => profile.monetaries.retain(|v| v.uuid_pk != id),
        RowKind::Trustee => profile.executors.retain(|v| v.uuid_pk != id),
        RowKind::Beneficiary => profile.beneficiaries.retain(|v| v.uuid_pk != id),
    }
}

fn storage_rejected<TStorage: Storage>(error: TStorage::Error) -> Rejected {
    Rejected(Error::<TStorage::Error>::Storage(error).message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_kind_parses() {
        assert_eq!("Monetary".parse::<RowKind>().unwrap(), RowKind::Monetary);
        assert!("folder".parse::<RowKind>().is_err());
        assert_eq!(RowKind::Monetary.name(), "monetary asset");
    }

    #[test]
    fn trustees_cannot_delete() {
        let dashboard = Dashboard {
            session_id: Some("t1".to_owned()),
            account_type: Some(AccountType::Trustee),
        };
        assert!(!dashboard.can_delete());
        assert!(Dashboard::new().can_delete());
    }
}
