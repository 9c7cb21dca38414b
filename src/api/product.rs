//! Product Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Product;

impl ApiClient {
    /// Products with their category names resolved.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("product/GetDetails", &[]).await
    }
}
