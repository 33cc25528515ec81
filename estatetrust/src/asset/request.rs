use crate::asset::{Asset, AssetDraft, AssetPatch};
use crate::{storage::Storage, util::ResponseExt, Client, CreateResponse, Request};
use futures_core::future::BoxFuture;
use reqwest::Method;
use typed_builder::TypedBuilder;

/// A [`Request`] for retrieving all assets of a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct GetAll {
    #[builder(setter(into))]
    pub grantor_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for GetAll
{
    type Output = BoxFuture<'request, crate::Result<Vec<Asset>, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("assets", "grantor", self.grantor_id, "assets"),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for retrieving the assets willed to a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct GetAllForBeneficiary {
    #[builder(setter(into))]
    pub beneficiary_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for GetAllForBeneficiary
{
    type Output = BoxFuture<'request, crate::Result<Vec<Asset>, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("assets", "beneficiary", self.beneficiary_id, "assets"),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for retrieving a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Get {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub asset_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Get
{
    type Output = BoxFuture<'request, crate::Result<Asset, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("assets", self.grantor_id, "assets", self.asset_id),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for creating an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Create {
    #[builder(setter(into))]
    pub grantor_id: String,
    pub draft: AssetDraft,
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
                    path!("assets", self.grantor_id, "create", "asset"),
                    Some(&self.draft),
                )
                .await?
                .parse()?;
            tracing::info!(grantor_id = %self.grantor_id, "created asset");
            Ok(value)
        })
    }
}

/// A [`Request`] for modifying an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Modify {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub asset_id: String,
    pub patch: AssetPatch,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Modify
{
    type Output = BoxFuture<'request, crate::Result<Asset, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call(
                    Method::PATCH,
                    path!("assets", self.grantor_id, "assets", self.asset_id, "update"),
                    Some(&self.patch),
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for deleting an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Delete {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub asset_id: String,
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
                    path!("assets", self.grantor_id, "assets", self.asset_id, "delete"),
                    None,
                )
                .await?
                .parse_empty()?;
            tracing::info!(asset_id = %self.asset_id, "deleted asset");
            Ok(())
        })
    }
}
