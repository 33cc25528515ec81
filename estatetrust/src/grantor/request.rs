use crate::grantor::{Profile, ProfilePatch};
use crate::{storage::Storage, util::ResponseExt, Client, Request};
use futures_core::future::BoxFuture;
use reqwest::Method;
use typed_builder::TypedBuilder;

/// A [`Request`] for retrieving the dashboard profile of a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct GetProfile {
    #[builder(setter(into))]
    pub grantor_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for GetProfile
{
    type Output = BoxFuture<'request, crate::Result<Profile, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call::<()>(
                    Method::GET,
                    path!("grantors", "account", "dashboard", self.grantor_id),
                    None,
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for modifying the profile of a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct ModifyProfile {
    #[builder(setter(into))]
    pub grantor_id: String,
    pub patch: ProfilePatch,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for ModifyProfile
{
    type Output = BoxFuture<'request, crate::Result<Profile, TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            Ok(client
                .call(
                    Method::PATCH,
                    path!("grantors", "account", "dashboard", self.grantor_id, "update"),
                    Some(&self.patch),
                )
                .await?
                .parse()?)
        })
    }
}

/// A [`Request`] for deleting the account of a grantor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, TypedBuilder)]
pub struct DeleteAccount {
    #[builder(setter(into))]
    pub grantor_id: String,
}

impl<'request, 'client: 'request, TStorage: Storage> Request<'request, 'client, TStorage>
    for DeleteAccount
{
    type Output = BoxFuture<'request, crate::Result<(), TStorage::Error>>;
    fn send(&'request self, client: &'client mut Client<TStorage>) -> Self::Output {
        Box::pin(async move {
            client
                .call::<()>(
                    Method::DELETE,
                    path!("grantors", "account", "dashboard", self.grantor_id, "delete"),
                    None,
                )
                .await?
                .parse_empty()?;
            tracing::info!(grantor_id = %self.grantor_id, "deleted grantor account");
            Ok(())
        })
    }
}
