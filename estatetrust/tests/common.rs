#![allow(dead_code)] // https://github.com/rust-lang/rust/issues/46379

use async_trait::async_trait;
use estatetrust::storage::MemoryStorage;
use estatetrust::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use estatetrust::{AccountType, Client, Urls};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use url::Url;

pub const BASE_URL: &str = "https://estatetrust.test/api/v1";
pub const GRANTOR_ID: &str = "g1";
pub const TOKEN: &str = "token-g1";

/// A [`Transport`] that records every request and answers from a queue.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    requests: Vec<HttpRequest>,
    responses: VecDeque<Result<HttpResponse, String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        let response = HttpResponse::new(
            StatusCode::from_u16(status).unwrap(),
            serde_json::to_vec(&body).unwrap(),
        );
        self.inner.lock().unwrap().responses.push_back(Ok(response));
        self
    }

    pub fn respond_empty(&self, status: u16) -> &Self {
        let response = HttpResponse::new(StatusCode::from_u16(status).unwrap(), Vec::new());
        self.inner.lock().unwrap().responses.push_back(Ok(response));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(Err(message.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        match inner.responses.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Other(message)),
            None => Err(TransportError::Other("no response queued".to_owned())),
        }
    }
}

pub fn urls() -> Urls {
    Urls::new(Url::parse(BASE_URL).unwrap())
}

pub fn client(transport: &MockTransport, storage: MemoryStorage) -> Client<MemoryStorage> {
    Client::builder()
        .transport(Arc::new(transport.clone()) as Arc<dyn Transport>)
        .storage(storage)
        .urls(urls())
        .build()
}

pub fn grantor_storage() -> MemoryStorage {
    MemoryStorage {
        token: Some(TOKEN.to_owned()),
        account_type: Some(AccountType::Grantor),
        session_id: Some(GRANTOR_ID.to_owned()),
    }
}

pub fn trustee_storage() -> MemoryStorage {
    MemoryStorage {
        token: Some("token-t1".to_owned()),
        account_type: Some(AccountType::Trustee),
        session_id: Some("t1".to_owned()),
    }
}

pub fn url(path: &str) -> String {
    format!("{}/{}", BASE_URL, path)
}

pub fn asset_json(id: &str, name: &str, will_to: &str) -> Value {
    json!({
        "uuid_pk": id,
        "name": name,
        "location": "Safe",
        "owner_id": GRANTOR_ID,
        "will_to": will_to,
        "note": "Gift",
        "created_at": "2024-03-01T10:00:00"
    })
}

pub fn monetary_json(id: &str, will_to: &str) -> Value {
    json!({
        "uuid_pk": id,
        "acc_name": "Savings",
        "acc_number": "12345678",
        "amount": "1000",
        "bank_name": "First Bank",
        "owner_id": GRANTOR_ID,
        "will_to": will_to,
        "note": "",
        "created_at": "2024-03-01T10:00:00"
    })
}

pub fn beneficiary_json(id: &str, first_name: &str, last_name: &str) -> Value {
    json!({
        "uuid_pk": id,
        "first_name": first_name,
        "middle_name": "",
        "last_name": last_name,
        "relation": "daughter",
        "added_by": GRANTOR_ID,
        "created_at": "2024-03-01T10:00:00"
    })
}

pub fn trustee_json(id: &str, username: &str) -> Value {
    json!({
        "uuid_pk": id,
        "username": username,
        "first_name": "Tom",
        "middle_name": "",
        "last_name": "Trust",
        "email": "tom@example.com",
        "phone_number": "0456",
        "relation": "lawyer",
        "added_by": GRANTOR_ID,
        "created_at": "2024-03-01T10:00:00"
    })
}

pub fn profile_json(assets: Vec<Value>, beneficiaries: Vec<Value>, executors: Vec<Value>) -> Value {
    json!({
        "uuid_pk": GRANTOR_ID,
        "username": "ada",
        "first_name": "Ada",
        "middle_name": "",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "phone_number": "0123",
        "date_of_birth": "1815-12-10",
        "gender": "female",
        "created_at": "2024-03-01T10:00:00",
        "beneficiaries": beneficiaries,
        "executors": executors,
        "assets": assets,
        "monetaries": []
    })
}
