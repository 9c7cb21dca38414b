//! Sale Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Sale, SaleCreateRequest};

/// Where checkouts are submitted.
#[allow(async_fn_in_trait)]
pub trait SalesGateway {
    async fn checkout(&self, request: &SaleCreateRequest) -> Result<Sale, ApiError>;
}

impl SalesGateway for ApiClient {
    async fn checkout(&self, request: &SaleCreateRequest) -> Result<Sale, ApiError> {
        self.send_json(Method::POST, "sale/Checkout", request).await
    }
}

impl ApiClient {
    /// Sale with its line items.
    pub async fn get_sale(&self, id: u32) -> Result<Sale, ApiError> {
        self.get_json(&format!("sale/GetDetailsById/{}", id), &[]).await
    }

    pub async fn list_sales_today(&self) -> Result<Vec<Sale>, ApiError> {
        self.get_json("sale/Today", &[]).await
    }
}
