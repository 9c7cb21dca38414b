//! Return Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ReturnRecord, ReturnRequest};

impl ApiClient {
    pub async fn create_return(&self, request: &ReturnRequest) -> Result<ReturnRecord, ApiError> {
        self.send_json(Method::POST, "return", request).await
    }

    pub async fn list_returns_for_sale(&self, sale_id: u32) -> Result<Vec<ReturnRecord>, ApiError> {
        self.get_json("return", &[("saleId", sale_id.to_string())]).await
    }
}
