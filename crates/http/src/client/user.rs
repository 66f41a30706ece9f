//! User profile endpoints

use super::ApiClient;
use crate::types::{ApiResponse, ProfileUpdateRequest, UserRecord, UserRef};
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    /// All users (admin view).
    pub async fn list_users(&self) -> ApiResponse<Vec<UserRecord>> {
        self.execute_api(Method::GET, "/user/list", |r| r).await
    }

    /// Users not soft-deleted.
    pub async fn list_active_users(&self) -> ApiResponse<Vec<UserRecord>> {
        self.execute_api(Method::GET, "/user/active", |r| r).await
    }

    /// Submit the biometric profile form. Marks the profile as filled
    /// so the guard stops routing the user to the form.
    pub async fn update_profile(&self, update: &ProfileUpdateRequest) -> ApiResponse<Value> {
        self.execute_api(Method::PUT, "/user/update", |r| r.json(update))
            .await
    }

    /// Soft-delete: flips `is_active`, the record stays.
    pub async fn deactivate_user(&self, id_user: i64) -> ApiResponse<Value> {
        let body = UserRef { id_user };
        self.execute_api(Method::PUT, "/user/delete", |r| r.json(&body))
            .await
    }

    pub async fn user_detail(&self, id_user: i64) -> ApiResponse<UserRecord> {
        let body = UserRef { id_user };
        self.execute_api(Method::POST, "/user/detail", |r| r.json(&body))
            .await
    }
}
