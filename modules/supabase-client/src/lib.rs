pub mod error;

pub use error::{Result, SupabaseError};

use serde::de::DeserializeOwned;

/// Read-only client for a Supabase project's PostgREST endpoint.
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key: key.into(),
        }
    }

    /// Fetch up to `limit` rows from `table`, newest-first by `order_column`.
    pub async fn select_recent<T: DeserializeOwned>(
        &self,
        table: &str,
        order_column: &str,
        limit: u32,
    ) -> Result<Vec<T>> {
        let url = self.table_url(table, order_column, limit);
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let rows: Vec<T> = resp.json().await?;
        tracing::info!(table, count = rows.len(), "Fetched rows from Supabase");
        Ok(rows)
    }

    fn table_url(&self, table: &str, order_column: &str, limit: u32) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order={}.desc&limit={}",
            self.base_url, table, order_column, limit
        )
    }
}
