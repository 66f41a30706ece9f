//! Food log endpoints

use super::ApiClient;
use crate::types::{
    ApiResponse, FoodLogDelete, FoodLogEntry, FoodLogNew, FoodLogQuery, FoodLogUpdate,
};
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    pub async fn food_log_list(&self) -> ApiResponse<Vec<FoodLogEntry>> {
        self.execute_api(Method::GET, "/foodlog/list", |r| r).await
    }

    pub async fn active_food_log_list(&self) -> ApiResponse<Vec<FoodLogEntry>> {
        self.execute_api(Method::GET, "/foodlog/list-active", |r| r)
            .await
    }

    /// Log a meal under its occasion.
    pub async fn create_food_log(&self, entry: &FoodLogNew) -> ApiResponse<Value> {
        self.execute_api(Method::POST, "/foodlog/create", |r| r.json(entry))
            .await
    }

    pub async fn update_food_log(&self, update: &FoodLogUpdate) -> ApiResponse<Value> {
        self.execute_api(Method::PUT, "/foodlog/update", |r| r.json(update))
            .await
    }

    /// Soft-delete a log entry. The backend expects the identifiers
    /// in the DELETE body.
    pub async fn delete_food_log(&self, delete: FoodLogDelete) -> ApiResponse<Value> {
        self.execute_api(Method::DELETE, "/foodlog/delete", |r| r.json(&delete))
            .await
    }

    /// One day's entries for a user, resolved in their timezone.
    pub async fn food_log_detail(&self, query: &FoodLogQuery) -> ApiResponse<Vec<FoodLogEntry>> {
        self.execute_api(Method::POST, "/foodlog/detail", |r| r.json(query))
            .await
    }
}
