//! Client-side state: one lifecycle container per resource.
//!
//! Every container operation runs the same way: mark the operation pending, send the request,
//! then settle it with the server payload or with the error message. Failures never propagate
//! past the container; they are stored and returned as [`Rejected`].

use crate::{
    asset::Asset,
    beneficiary::Beneficiary,
    grantor::{self, Profile, ProfilePatch},
    lifecycle::{AddStatus, Lifecycle, OperationKey, Rejected},
    monetary::Monetary,
    response::MessageResponse,
    storage::Storage,
    trustee::{self, Trustee},
    AuthSession, Client, CreateResponse, LoginData, RegisterData, Resource,
};

/// Container for the records of one resource type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceContainer<R> {
    items: Vec<R>,
    lifecycle: Lifecycle,
}

impl<R> Default for ResourceContainer<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            lifecycle: Lifecycle::default(),
        }
    }
}

impl<R: Resource> ResourceContainer<R> {
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|v| v.id() == id)
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    pub fn clear_error(&mut self) {
        self.lifecycle.clear_error();
    }

    pub fn add_status(&self) -> AddStatus {
        self.lifecycle.add_status()
    }

    /// Returns whether a create operation is in flight.
    pub fn is_creating(&self) -> bool {
        self.lifecycle.is_pending(&OperationKey::create())
    }

    /// Fetches every record of the grantor and replaces the held list.
    pub async fn fetch<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        grantor_id: &str,
    ) -> Result<&[R], Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::fetch());
        let result = R::get_all(client, grantor_id).await;
        self.items = self.lifecycle.complete(&ticket, result)?;
        Ok(&self.items)
    }

    /// Creates a record. The held list is left as is until the next fetch.
    pub async fn create<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        grantor_id: &str,
        draft: &R::Draft,
    ) -> Result<CreateResponse, Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::create());
        let result = R::create(client, grantor_id, draft).await;
        self.lifecycle.complete(&ticket, result)
    }

    /// Updates a record and replaces the held copy with the server's.
    pub async fn update<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        grantor_id: &str,
        id: &str,
        patch: &R::Patch,
    ) -> Result<R, Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::update(id));
        let result = R::modify(client, grantor_id, id, patch).await;
        let updated = self.lifecycle.complete(&ticket, result)?;
        if let Some(item) = self.items.iter_mut().find(|v| v.id() == id) {
            *item = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes a record and removes it from the held list.
    pub async fn delete<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        grantor_id: &str,
        id: &str,
    ) -> Result<(), Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::delete(id));
        let result = R::delete(client, grantor_id, id).await;
        self.lifecycle.complete(&ticket, result)?;
        self.items.retain(|v| v.id() != id);
        Ok(())
    }
}

/// Container for the grantor profile that backs the dashboard.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfileContainer {
    profile: Option<Profile>,
    trustee: Option<Trustee>,
    lifecycle: Lifecycle,
}

impl ProfileContainer {
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub(crate) fn profile_mut(&mut self) -> Option<&mut Profile> {
        self.profile.as_mut()
    }

    /// The record of the signed-in trustee, for trustee sessions.
    pub fn trustee(&self) -> Option<&Trustee> {
        self.trustee.as_ref()
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    pub fn clear_error(&mut self) {
        self.lifecycle.clear_error();
    }

    /// Fetches the full profile of a grantor.
    pub async fn fetch<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        grantor_id: &str,
    ) -> Result<&Profile, Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::fetch());
        let request = grantor::GetProfile::builder().grantor_id(grantor_id).build();
        let result = client.send(&request).await;
        let profile = self.lifecycle.complete(&ticket, result)?;
        Ok(self.profile.insert(profile))
    }

    /// Fetches the dashboard record of a signed-in trustee.
    pub async fn fetch_trustee<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        trustee_id: &str,
    ) -> Result<&Trustee, Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::fetch());
        let request = trustee::GetDashboard::builder()
            .trustee_id(trustee_id)
            .build();
        let result = client.send(&request).await;
        let trustee = self.lifecycle.complete(&ticket, result)?;
        Ok(self.trustee.insert(trustee))
    }

    /// Updates the profile and replaces the held copy with the server's.
    pub async fn update<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        grantor_id: &str,
        patch: &ProfilePatch,
    ) -> Result<&Profile, Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::update(grantor_id));
        let request = grantor::ModifyProfile::builder()
            .grantor_id(grantor_id)
            .patch(patch.clone())
            .build();
        let result = client.send(&request).await;
        let profile = self.lifecycle.complete(&ticket, result)?;
        Ok(self.profile.insert(profile))
    }

    /// Deletes the grantor account and forgets the held profile.
    pub async fn delete_account<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        grantor_id: &str,
    ) -> Result<(), Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::delete(grantor_id));
        let request = grantor::DeleteAccount::builder()
            .grantor_id(grantor_id)
            .build();
        let result = client.send(&request).await;
        self.lifecycle.complete(&ticket, result)?;
        self.profile = None;
        Ok(())
    }
}

/// Container for the signed-in session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuthContainer {
    session: Option<AuthSession>,
    lifecycle: Lifecycle,
}

impl AuthContainer {
    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    pub fn clear_error(&mut self) {
        self.lifecycle.clear_error();
    }

    /// Logs in. The token, account type and session id are persisted by the client.
    ///
    /// Any earlier session is forgotten, also when the login fails.
    pub async fn login<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        data: &LoginData,
    ) -> Result<&AuthSession, Rejected> {
        self.session = None;
        let ticket = self.lifecycle.begin(OperationKey::create());
        let result = client.login(data).await;
        let session = self.lifecycle.complete(&ticket, result)?;
        Ok(self.session.insert(session))
    }

    /// Clears the persisted session.
    pub async fn logout<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
    ) -> Result<(), Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::delete("session"));
        let result = client.logout().await;
        self.lifecycle.complete(&ticket, result)?;
        self.session = None;
        Ok(())
    }

    /// Loads a session persisted by an earlier login.
    pub async fn restore<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
    ) -> Result<Option<&AuthSession>, Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::fetch());
        let result = client.restore_session().await;
        self.session = self.lifecycle.complete(&ticket, result)?;
        Ok(self.session.as_ref())
    }
}

/// Container for grantor registration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegistrationContainer {
    message: Option<String>,
    lifecycle: Lifecycle,
}

impl RegistrationContainer {
    /// The message of the last successful registration.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    pub fn clear_error(&mut self) {
        self.lifecycle.clear_error();
    }

    pub async fn register<TStorage: Storage>(
        &mut self,
        client: &mut Client<TStorage>,
        data: &RegisterData,
    ) -> Result<MessageResponse, Rejected> {
        let ticket = self.lifecycle.begin(OperationKey::create());
        let result = client.register(data).await;
        let response = self.lifecycle.complete(&ticket, result)?;
        self.message = Some(response.message.clone());
        Ok(response)
    }
}

/// All containers of the client.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Store {
    pub auth: AuthContainer,
    pub registration: RegistrationContainer,
    pub profile: ProfileContainer,
    pub assets: ResourceContainer<Asset>,
    pub monetaries: ResourceContainer<Monetary>,
    pub beneficiaries: ResourceContainer<Beneficiary>,
    pub trustees: ResourceContainer<Trustee>,
}
