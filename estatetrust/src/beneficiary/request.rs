use crate::beneficiary::{Beneficiary, BeneficiaryDraft, BeneficiaryPatch};
use crate::{storage::Storage, util::ResponseExt, Client, CreateResponse, Request};
use futures_core::future::BoxFuture;
use reqwest::Method;
use typed_builder::TypedBuilder;

/// A [`Request`] for retrieving all beneficiaries of a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct GetAll {
    #[builder(setter(into))]
    pub grantor_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for GetAll
{
    type Output = BoxFuture<'request, crate::Result<Vec<Beneficiary>, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("beneficiaries", "account", self.grantor_id, "beneficiaries"),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for retrieving a single beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Get {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub beneficiary_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Get
{
    type Output = BoxFuture<'request, crate::Result<Beneficiary, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!(
                        "beneficiaries",
                        "account",
                        self.grantor_id,
                        "beneficiaries",
                        self.beneficiary_id
                    ),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for creating a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Create {
    #[builder(setter(into))]
    pub grantor_id: String,
    pub draft: BeneficiaryDraft,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Create
{
    type Output = BoxFuture<'request, crate::Result<CreateResponse, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            let value = client
                .call(
                    Method::POST,
                    path!("beneficiaries", "account", self.grantor_id, "create", "beneficiary"),
                    Some(&self.draft),
                )
                .await?
                .parse()?;
            tracing::info!(grantor_id = %self.grantor_id, "created beneficiary");
            Ok(value)
        })
    }
}

/// A [`Request`] for modifying a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Modify {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub beneficiary_id: String,
    pub patch: BeneficiaryPatch,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Modify
{
    type Output = BoxFuture<'request, crate::Result<Beneficiary, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call(
                    Method::PUT,
                    path!(
                        "beneficiaries",
                        "account",
                        self.grantor_id,
                        "beneficiaries",
                        self.beneficiary_id,
                        "update"
                    ),
                    Some(&self.patch),
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for deleting a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Delete {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub beneficiary_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Delete
{
    type Output = BoxFuture<'request, crate::Result<(), TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            client
                .call::<()>(
                    Method::DELETE,
                    path!(
                        "beneficiaries",
                        "account",
                        self.grantor_id,
                        "beneficiaries",
                        self.beneficiary_id,
                        "delete"
                    ),
                    None,
                )
                .await?
                .parse_empty()?;
            tracing::info!(beneficiary_id = %self.beneficiary_id, "deleted beneficiary");
            Ok(())
        })
    }
}
