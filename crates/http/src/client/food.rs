//! Local food database (masterdata) endpoints

use super::ApiClient;
use crate::types::{ApiResponse, FoodNew, FoodRecord, FoodRef, FoodUpdate};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct NameQuery<'a> {
    query: &'a str,
}

impl ApiClient {
    pub async fn food_list(&self) -> ApiResponse<Vec<FoodRecord>> {
        self.execute_api(Method::GET, "/masterdata/food/list", |r| r)
            .await
    }

    pub async fn active_food_list(&self) -> ApiResponse<Vec<FoodRecord>> {
        self.execute_api(Method::GET, "/masterdata/food/list-active", |r| r)
            .await
    }

    /// Name search over the local database.
    pub async fn search_food(&self, query: &str) -> ApiResponse<Vec<FoodRecord>> {
        let params = NameQuery { query };
        self.execute_api(Method::GET, "/masterdata/food/list-search", |r| {
            r.query(&params)
        })
        .await
    }

    pub async fn create_food(&self, food: &FoodNew) -> ApiResponse<Value> {
        self.execute_api(Method::POST, "/masterdata/food/create", |r| r.json(food))
            .await
    }

    pub async fn update_food(&self, food: &FoodUpdate) -> ApiResponse<Value> {
        self.execute_api(Method::PUT, "/masterdata/food/update", |r| r.json(food))
            .await
    }

    /// Soft-delete a food record.
    pub async fn deactivate_food(&self, id_food: i64) -> ApiResponse<Value> {
        let body = FoodRef { id_food };
        self.execute_api(Method::PUT, "/masterdata/food/delete", |r| r.json(&body))
            .await
    }

    pub async fn food_detail(&self, id_food: i64) -> ApiResponse<FoodRecord> {
        let body = FoodRef { id_food };
        self.execute_api(Method::POST, "/masterdata/food/detail", |r| r.json(&body))
            .await
    }
}
