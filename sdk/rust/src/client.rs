use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub operand1: f64,
    pub operand2: f64,
    pub operation: String, // word or symbol: "add", "+", "divide", "/", ...
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub result: f64,
    pub status: String, // "Success" or "Error"
    pub message: String,
}

impl CalculationResponse {
    pub fn is_success(&self) -> bool {
        self.status == "Success"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub name: String,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationCatalog {
    pub supported_operations: Vec<OperationInfo>,
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct CalculatorClient {
    client: Client,
    base_url: String,
}

impl CalculatorClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Evaluate `operand1 <operation> operand2`.
    ///
    /// Domain errors (400) decode into a response with `status == "Error"`;
    /// only transport failures and unexpected statuses are `Err`.
    pub async fn calculate(
        &self,
        operand1: f64,
        operand2: f64,
        operation: &str,
    ) -> Result<CalculationResponse, SdkError> {
        let req = CalculationRequest {
            operand1,
            operand2,
            operation: operation.to_string(),
        };
        let resp = self
            .client
            .post(format!("{}/api/calculator/calculate", self.base_url))
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if status != StatusCode::OK && status != StatusCode::BAD_REQUEST {
            return Err(SdkError::Status { status, body: text });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch the catalog of supported operations.
    pub async fn operations(&self) -> Result<OperationCatalog, SdkError> {
        let resp = self
            .client
            .get(format!("{}/api/calculator/operations", self.base_url))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SdkError::Status { status, body });
        }

        Ok(resp.json().await?)
    }
}
