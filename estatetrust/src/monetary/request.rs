use crate::monetary::{Monetary, MonetaryDraft, MonetaryPatch};
use crate::{storage::Storage, util::ResponseExt, Client, CreateResponse, Request};
use futures_core::future::BoxFuture;
use reqwest::Method;
use typed_builder::TypedBuilder;

/// A [`Request`] for retrieving all monetary assets of a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct GetAll {
    #[builder(setter(into))]
    pub grantor_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for GetAll
{
    type Output = BoxFuture<'request, crate::Result<Vec<Monetary>, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("monetaries", "asset", "asset", self.grantor_id, "assets"),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for retrieving the monetary assets willed to a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct GetAllForBeneficiary {
    #[builder(setter(into))]
    pub beneficiary_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for GetAllForBeneficiary
{
    type Output = BoxFuture<'request, crate::Result<Vec<Monetary>, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("monetaries", "asset", "beneficiary", self.beneficiary_id, "assets"),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for retrieving a single monetary asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Get {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub monetary_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Get
{
    type Output = BoxFuture<'request, crate::Result<Monetary, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!(
                        "monetaries",
                        "asset",
                        "grantor",
                        self.grantor_id,
                        "assets",
                        self.monetary_id
                    ),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for creating a monetary asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Create {
    #[builder(setter(into))]
    pub grantor_id: String,
    pub draft: MonetaryDraft,
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
                    path!("monetaries", "asset", self.grantor_id, "create", "monetary"),
                    Some(&self.draft),
                )
                .await?
                .parse()?;
            tracing::info!(grantor_id = %self.grantor_id, "created monetary asset");
            Ok(value)
        })
    }
}

/// A [`Request`] for modifying a monetary asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Modify {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub monetary_id: String,
    pub patch: MonetaryPatch,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Modify
{
    type Output = BoxFuture<'request, crate::Result<Monetary, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call(
                    Method::PUT,
                    path!(
                        "monetaries",
                        "asset",
                        "grantor",
                        self.grantor_id,
                        "assets",
                        self.monetary_id,
                        "update"
                    ),
                    Some(&self.patch),
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for deleting a monetary asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Delete {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub monetary_id: String,
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
                        "monetaries",
                        "asset",
                        "grantor",
                        self.grantor_id,
                        "assets",
                        self.monetary_id,
                        "delete"
                    ),
                    None,
                )
                .await?
                .parse_empty()?;
            tracing::info!(monetary_id = %self.monetary_id, "deleted monetary asset");
            Ok(())
        })
    }
}
