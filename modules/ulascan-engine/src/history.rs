use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use ulascan_common::{HistoryDraft, HistoryPage, HistoryRecord};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history record not found")]
    NotFound,

    #[error("history store failure: {0}")]
    Store(String),
}

#[derive(Debug, Clone)]
pub struct HistoryQuery {
    pub page: u32,
    pub limit: u32,
    pub product_name: Option<String>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            product_name: None,
        }
    }
}

/// Boundary contract for analysis history. One record per (user, product):
/// a re-analysis replaces the prior record instead of accumulating.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Delete any record for the same (user, product), then insert.
    async fn replace(&self, draft: HistoryDraft) -> Result<HistoryRecord, HistoryError>;

    /// One page of a user's records, newest first, optionally filtered by a
    /// case-insensitive product-name substring.
    async fn list(&self, user_id: Uuid, query: HistoryQuery) -> Result<HistoryPage, HistoryError>;

    /// Fetch a single record, scoped to its owner.
    async fn get(&self, id: Uuid, user_id: Uuid) -> Result<HistoryRecord, HistoryError>;
}

/// In-process history store.
#[derive(Default)]
pub struct MemoryHistoryStore {
    records: RwLock<Vec<HistoryRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn replace(&self, draft: HistoryDraft) -> Result<HistoryRecord, HistoryError> {
        let record = HistoryRecord {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            product_id: draft.product_id,
            url: draft.url,
            product_name: draft.product_name,
            review_count: draft.review_count,
            classified_count: draft.classified_count,
            rating_avg: draft.rating_avg,
            count_positive: draft.count_positive,
            count_negative: draft.count_negative,
            packaging: draft.packaging,
            delivery: draft.delivery,
            admin_response: draft.admin_response,
            product_condition: draft.product_condition,
            summary: draft.summary,
            created_at: chrono::Utc::now(),
        };

        let mut records = self.records.write().await;
        records.retain(|r| !(r.user_id == record.user_id && r.product_id == record.product_id));
        records.push(record.clone());

        Ok(record)
    }

    async fn list(&self, user_id: Uuid, query: HistoryQuery) -> Result<HistoryPage, HistoryError> {
        let records = self.records.read().await;

        let needle = query.product_name.as_deref().map(str::to_lowercase);
        let mut matches: Vec<&HistoryRecord> = records
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| match &needle {
                Some(name) => r.product_name.to_lowercase().contains(name),
                None => true,
            })
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let limit = query.limit.max(1);
        let page = query.page.max(1);
        let total = matches.len() as u64;
        let pages = total.div_ceil(limit as u64) as u32;

        let start = ((page - 1) * limit) as usize;
        let histories = matches
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(HistoryPage {
            histories,
            page,
            pages,
            limit,
            total,
        })
    }

    async fn get(&self, id: Uuid, user_id: Uuid) -> Result<HistoryRecord, HistoryError> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.id == id && r.user_id == user_id)
            .cloned()
            .ok_or(HistoryError::NotFound)
    }
}
