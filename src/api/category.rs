//! Category Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Category;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("category", &[]).await
    }
}
