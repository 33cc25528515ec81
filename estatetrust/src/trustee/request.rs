use crate::trustee::{Trustee, TrusteeDraft, TrusteePatch};
use crate::{storage::Storage, util::ResponseExt, Client, CreateResponse, Request};
use futures_core::future::BoxFuture;
use reqwest::Method;
use typed_builder::TypedBuilder;

/// A [`Request`] for retrieving all trustees of a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct GetAll {
    #[builder(setter(into))]
    pub grantor_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for GetAll
{
    type Output = BoxFuture<'request, crate::Result<Vec<Trustee>, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("trustees", "account", self.grantor_id, "trustees"),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for retrieving a single trustee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Get {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub trustee_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Get
{
    type Output = BoxFuture<'request, crate::Result<Trustee, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!(
                        "trustees",
                        "account",
                        self.grantor_id,
                        "trustees",
                        self.trustee_id
                    ),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for retrieving the dashboard of a signed-in trustee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct GetDashboard {
    #[builder(setter(into))]
    pub trustee_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for GetDashboard
{
    type Output = BoxFuture<'request, crate::Result<Trustee, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("trustees", "account", "trustee", self.trustee_id, "dashboard"),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for appointing a trustee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Create {
    #[builder(setter(into))]
    pub grantor_id: String,
    pub draft: TrusteeDraft,
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
                    path!("trustees", "account", self.grantor_id, "create", "trustee"),
                    Some(&self.draft),
                )
                .await?
                .parse()?;
            tracing::info!(
                grantor_id = %self.grantor_id,
                username = %self.draft.username,
                "created trustee"
            );
            Ok(value)
        })
    }
}

/// A [`Request`] for modifying a trustee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Modify {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub trustee_id: String,
    pub patch: TrusteePatch,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for Modify
{
    type Output = BoxFuture<'request, crate::Result<Trustee, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call(
                    Method::PUT,
                    path!(
                        "trustees",
                        "account",
                        self.grantor_id,
                        "trustees",
                        self.trustee_id,
                        "update"
                    ),
                    Some(&self.patch),
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for deleting a trustee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct Delete {
    #[builder(setter(into))]
    pub grantor_id: String,
    #[builder(setter(into))]
    pub trustee_id: String,
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
                        "trustees",
                        "account",
                        self.grantor_id,
                        "trustees",
                        self.trustee_id,
                        "delete"
                    ),
                    None,
                )
                .await?
                .parse_empty()?;
            tracing::info!(trustee_id = %self.trustee_id, "deleted trustee");
            Ok(())
        })
    }
}
