//! REST client for the remote `employees` collection

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Employee, EmployeeId, NewEmployee, PartialEmployee, component_debug, component_warn};
use url::Url;

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::traits::EmployeeStore;

const COMPONENT: &str = "rest_store";
const COLLECTION: &str = "employees";

/// HTTP-backed [`EmployeeStore`]
#[derive(Debug, Clone)]
pub struct RestEmployeeStore {
    client: Client,
    base_url: Url,
}

impl RestEmployeeStore {
    pub fn new(config: &DirectoryConfig) -> DirectoryResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DirectoryError::config(format!("could not build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// `{base}/employees` or `{base}/employees/{id}`, id percent-encoded
    fn endpoint(&self, id: Option<&EmployeeId>) -> DirectoryResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| DirectoryError::config(format!("base URL {} cannot take a path", self.base_url)))?;
            segments.pop_if_empty().push(COLLECTION);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    /// Map non-success statuses to errors, returning the response otherwise
    async fn check_status(response: reqwest::Response, id: Option<&EmployeeId>) -> DirectoryResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let text = response.text().await.unwrap_or_default();

        match status {
            StatusCode::NOT_FOUND => {
                component_debug!(COMPONENT, path = %path, "Employee not found");
                Err(DirectoryError::not_found(
                    id.map(ToString::to_string).unwrap_or(path),
                ))
            }
            _ => {
                component_warn!(COMPONENT, status = %status, path = %path, "Store request failed");
                Err(DirectoryError::fetch(format!("HTTP {status} from {path}: {text}")))
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, id: Option<&EmployeeId>) -> DirectoryResult<T> {
        let response = Self::check_status(response, id).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl EmployeeStore for RestEmployeeStore {
    async fn list_employees(&self) -> DirectoryResult<Vec<Employee>> {
        let url = self.endpoint(None)?;
        component_debug!(COMPONENT, url = %url, "GET employees");

        let response = self.client.get(url).send().await?;
        let employees: Vec<Employee> = Self::decode(response, None).await?;

        component_debug!(COMPONENT, count = employees.len(), "Fetched roster");
        Ok(employees)
    }

    async fn get_employee(&self, id: &EmployeeId) -> DirectoryResult<Employee> {
        let url = self.endpoint(Some(id))?;
        component_debug!(COMPONENT, url = %url, "GET employee");

        let response = self.client.get(url).send().await?;
        Self::decode(response, Some(id)).await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> DirectoryResult<Employee> {
        let url = self.endpoint(None)?;
        component_debug!(COMPONENT, url = %url, "POST employee");

        let response = self.client.post(url).json(employee).send().await?;
        Self::decode(response, None).await
    }

    async fn update_employee(&self, id: &EmployeeId, update: &PartialEmployee) -> DirectoryResult<Employee> {
        let url = self.endpoint(Some(id))?;
        component_debug!(COMPONENT, url = %url, "PUT employee");

        let response = self.client.put(url).json(update).send().await?;
        Self::decode(response, Some(id)).await
    }

    async fn delete_employee(&self, id: &EmployeeId) -> DirectoryResult<()> {
        let url = self.endpoint(Some(id))?;
        component_debug!(COMPONENT, url = %url, "DELETE employee");

        let response = self.client.delete(url).send().await?;
        Self::check_status(response, Some(id)).await?;
        Ok(())
    }
}
