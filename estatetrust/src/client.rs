use crate::response::MessageResponse;
use crate::storage::Storage;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::util::{self, ResponseExt};
use crate::{AuthSession, Error, LoginData, LoginResponse, RegisterData, Request, Urls};
use reqwest::{
    header::{self, HeaderValue},
    Method,
};
use serde::Serialize;
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// A client used for interacting with the EstateTrust API.
///
/// Every request carries `Authorization: Bearer <token>` when the storage holds a token. The
/// first successful response that contains an `access_token` while no token is stored has its
/// token persisted; later responses never overwrite it.
///
/// # Example
///
/// Creating a [`Client`]:
///
/// ```
/// use estatetrust::{storage::MemoryStorage, Client, Urls};
/// use url::Url;
///
/// # fn main() -> Result<(), url::ParseError> {
/// let client = Client::builder()
///     .storage(MemoryStorage::default())
///     .urls(Urls::new(Url::parse("https://estatetrust.example/api/v1")?))
///     .build();
/// assert_eq!(client.urls().base.path(), "/api/v1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct Client<TStorage> {
    #[builder(default = Arc::new(ReqwestTransport::default()) as Arc<dyn Transport>)]
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) storage: TStorage,
    pub(crate) urls: Urls,
}

impl<TStorage> Client<TStorage> {
    /// Returns a shared reference to the storage.
    pub fn storage(&self) -> &TStorage {
        &self.storage
    }

    /// Returns a mutable reference to the storage.
    pub fn storage_mut(&mut self) -> &mut TStorage {
        &mut self.storage
    }

    /// Returns the URLs of the API endpoints.
    pub fn urls(&self) -> &Urls {
        &self.urls
    }

    pub fn send<'request, 'client, R>(&'client mut self, request: &'request R) -> R::Output
    where
        R: Request<'request, 'client, TStorage>,
    {
        request.send(self)
    }
}

impl<TStorage: Storage> Client<TStorage> {
    /// Builds a request for the given path below the base URL.
    pub(crate) async fn request<I>(
        &self,
        method: Method,
        path_segments: I,
    ) -> crate::Result<HttpRequest, TStorage::Error>
    where
        I: IntoIterator + Send,
        I::Item: AsRef<str>,
    {
        let mut url = self.urls.base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(path_segments);
        let mut request = HttpRequest::new(method, url);
        request.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        if let Some(token) = self.storage.token().await.map_err(Error::Storage)? {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    request.headers.insert(header::AUTHORIZATION, value);
                }
                Err(e) => tracing::warn!(error = %e, "stored token is not a valid header value"),
            }
        }
        Ok(request)
    }

    /// Sends a request and persists the access token of the response if none is stored yet.
    pub(crate) async fn execute(
        &mut self,
        request: HttpRequest,
    ) -> crate::Result<HttpResponse, TStorage::Error> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.send(request).await?;
        tracing::debug!(status = %response.status, "received response");
        if response.status.is_success() {
            if let Some(token) = util::access_token(&response.body) {
                let stored = self.storage.token().await.map_err(Error::Storage)?;
                if stored.is_none() {
                    self.storage
                        .save_token(&token)
                        .await
                        .map_err(Error::Storage)?;
                    tracing::info!("persisted access token");
                }
            }
        }
        Ok(response)
    }

    pub(crate) async fn call<B>(
        &mut self,
        method: Method,
        path_segments: Vec<String>,
        body: Option<&B>,
    ) -> crate::Result<HttpResponse, TStorage::Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut request = self.request(method, path_segments).await?;
        if let Some(body) = body {
            request.body = Some(serde_json::to_value(body)?);
        }
        self.execute(request).await
    }

    /// Performs a GET request. `path` is relative to the base URL.
    pub async fn get(&mut self, path: &str) -> crate::Result<HttpResponse, TStorage::Error> {
        self.call::<()>(Method::GET, split_path(path), None).await
    }

    /// Performs a POST request. `path` is relative to the base URL.
    pub async fn post<B>(
        &mut self,
        path: &str,
        body: Option<&B>,
    ) -> crate::Result<HttpResponse, TStorage::Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.call(Method::POST, split_path(path), body).await
    }

    /// Performs a PUT request. `path` is relative to the base URL.
    pub async fn put<B>(
        &mut self,
        path: &str,
        body: Option<&B>,
    ) -> crate::Result<HttpResponse, TStorage::Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.call(Method::PUT, split_path(path), body).await
    }

    /// Performs a PATCH request. `path` is relative to the base URL.
    pub async fn patch<B>(
        &mut self,
        path: &str,
        body: Option<&B>,
    ) -> crate::Result<HttpResponse, TStorage::Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.call(Method::PATCH, split_path(path), body).await
    }

    /// Performs a DELETE request. `path` is relative to the base URL.
    pub async fn delete(&mut self, path: &str) -> crate::Result<HttpResponse, TStorage::Error> {
        self.call::<()>(Method::DELETE, split_path(path), None).await
    }

    /// Logs in and persists the session.
    ///
    /// A session left over from an earlier login is dropped first, so the token of this login is
    /// the one that gets persisted and a failed login leaves no session behind.
    pub async fn login(&mut self, data: &LoginData) -> crate::Result<AuthSession, TStorage::Error> {
        self.storage.clear().await.map_err(Error::Storage)?;
        let response: LoginResponse = self
            .call(Method::POST, path!("auths", "account", "login"), Some(data))
            .await?
            .parse()?;
        self.storage
            .save_account_type(data.account_type)
            .await
            .map_err(Error::Storage)?;
        self.storage
            .save_session_id(&response.id)
            .await
            .map_err(Error::Storage)?;
        tracing::info!(id = %response.id, account_type = %data.account_type, "logged in");
        Ok(AuthSession {
            access_token: response.access_token,
            id: response.id,
            account_type: data.account_type,
        })
    }

    /// Registers a new grantor account.
    pub async fn register(
        &mut self,
        data: &RegisterData,
    ) -> crate::Result<MessageResponse, TStorage::Error> {
        let response = self
            .call(Method::POST, path!("grantors", "account", "create"), Some(data))
            .await?
            .parse()?;
        tracing::info!(username = %data.username, "registered grantor");
        Ok(response)
    }

    /// Forgets the persisted session.
    pub async fn logout(&mut self) -> crate::Result<(), TStorage::Error> {
        self.storage.clear().await.map_err(Error::Storage)?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Returns the persisted session, if there is a complete one.
    pub async fn restore_session(&self) -> crate::Result<Option<AuthSession>, TStorage::Error> {
        let token = self.storage.token().await.map_err(Error::Storage)?;
        let id = self.storage.session_id().await.map_err(Error::Storage)?;
        let account_type = self.storage.account_type().await.map_err(Error::Storage)?;
        Ok(match (token, id, account_type) {
            (Some(access_token), Some(id), Some(account_type)) => Some(AuthSession {
                access_token,
                id,
                account_type,
            }),
            _ => None,
        })
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
