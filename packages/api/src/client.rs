//! # Remote record client
//!
//! Typed CRUD against the hosted mock collection at
//! `{base}/users`. Each operation is a single round trip: no retry, no
//! timeout, no request coalescing. The mock service is treated as an
//! unreliable collaborator — any non-success status, and for `list` any
//! non-JSON answer, maps to an [`ApiError`] that the call site logs and
//! absorbs.

use store::{RecordId, Student};

use crate::error::ApiError;

/// Base URL of the hosted mock REST service.
pub const DEFAULT_BASE_URL: &str = "https://687b2e57b4bc7cfbda84e292.mockapi.io";

/// Async interface over the remote collection so the flows in
/// [`crate::ops`] can run against a fake in tests.
pub trait RecordApi {
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Student>, ApiError>>;
    fn create(
        &self,
        student: &Student,
    ) -> impl std::future::Future<Output = Result<Student, ApiError>>;
    fn update(
        &self,
        id: &RecordId,
        student: &Student,
    ) -> impl std::future::Future<Output = Result<Student, ApiError>>;
    fn delete(&self, id: &RecordId) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed [`RecordApi`] implementation.
#[derive(Clone, Debug)]
pub struct RecordClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecordClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different collection host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn record_url(&self, id: &RecordId) -> String {
        format!("{}/users/{id}", self.base_url)
    }
}

impl Default for RecordClient {
    fn default() -> Self {
        Self::new()
    }
}

fn status_check(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Http {
            status: status.as_u16(),
        })
    }
}

impl RecordApi for RecordClient {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        let response = self.http.get(self.collection_url()).send().await?;
        status_check(&response)?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"));
        if !is_json {
            return Err(ApiError::UnexpectedContentType { content_type });
        }

        Ok(response.json().await?)
    }

    async fn create(&self, student: &Student) -> Result<Student, ApiError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(student)
            .send()
            .await?;
        status_check(&response)?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &RecordId, student: &Student) -> Result<Student, ApiError> {
        let response = self
            .http
            .put(self.record_url(id))
            .json(student)
            .send()
            .await?;
        status_check(&response)?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        let response = self.http.delete(self.record_url(id)).send().await?;
        status_check(&response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_the_base() {
        let client = RecordClient::with_base_url("http://localhost:3000");
        assert_eq!(client.collection_url(), "http://localhost:3000/users");
        assert_eq!(
            client.record_url(&RecordId::from("12")),
            "http://localhost:3000/users/12"
        );
        assert_eq!(
            client.record_url(&RecordId::from(7u64)),
            "http://localhost:3000/users/7"
        );
    }
}
