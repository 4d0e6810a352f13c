pub mod in_memory;

use async_trait::async_trait;

use crate::{
    entities::order::{NewOrder, Order, OrderUpdate},
    errors::RepoErr,
    seed::SeedOrder,
};

#[derive(Debug, Clone, Default)]
pub struct ListOrdersQuery {
    /// Status name, matched case-insensitively. Empty means no filter.
    pub status: Option<String>,
    /// Non-positive means no limit.
    pub limit: Option<i64>,
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Loads demo orders once; later calls are no-ops returning 0.
    async fn seed(&self, seeds: Vec<SeedOrder>) -> usize;
    async fn create(&self, new: NewOrder) -> Result<Order, RepoErr>;
    async fn get_by_id(&self, id: &str) -> Option<Order>;
    async fn list(&self, q: ListOrdersQuery) -> Vec<Order>;
    async fn update(&self, id: &str, patch: OrderUpdate) -> Option<Order>;
    async fn delete(&self, id: &str) -> bool;
    async fn count(&self) -> usize;
}
