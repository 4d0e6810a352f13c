use crate::entities::order::{NewOrder, Order, OrderStatus, OrderUpdate};
use crate::errors::RepoErr;
use crate::repositories::{ListOrdersQuery, OrderRepository};
use crate::seed::SeedOrder;
use crate::utils::now_utc;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

pub const ORDER_ID_PREFIX: &str = "ORD-2024-";

#[derive(Default)]
struct Store {
    orders: Vec<Order>,
    last_seq: u32,
    seeded: bool,
}

impl Store {
    fn next_id(&mut self) -> String {
        self.last_seq += 1;
        format!("{ORDER_ID_PREFIX}{:03}", self.last_seq)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.orders.iter().position(|o| o.order_id == id)
    }
}

/// Insertion-ordered order store. Ids come from a counter that never
/// rewinds, so deleting orders cannot make a later id collide.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<Store>>,
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn seed(&self, seeds: Vec<SeedOrder>) -> usize {
        let mut store = self.inner.write().await;
        if store.seeded {
            debug!("seed skipped: store already seeded");
            return 0;
        }
        store.seeded = true;
        let mut n = 0;
        for s in seeds {
            let totals = match s.order.validate() {
                Ok(t) => t,
                Err(e) => {
                    warn!(err = %e, "skipping invalid seed order");
                    continue;
                }
            };
            let id = store.next_id();
            store
                .orders
                .push(Order::new(id, s.order, totals, s.order_date, s.status));
            n += 1;
        }
        info!(count = n, "seeded orders");
        n
    }

    async fn create(&self, new: NewOrder) -> Result<Order, RepoErr> {
        let totals = new.validate()?;
        let mut store = self.inner.write().await;
        let id = store.next_id();
        let order = Order::new(id, new, totals, now_utc(), OrderStatus::Pending);
        store.orders.push(order.clone());
        info!(order_id = %order.order_id, total = %order.total_amount, items = order.items.len(), "order created");
        Ok(order)
    }

    async fn get_by_id(&self, id: &str) -> Option<Order> {
        let store = self.inner.read().await;
        store.orders.iter().find(|o| o.order_id == id).cloned()
    }

    async fn list(&self, q: ListOrdersQuery) -> Vec<Order> {
        let store = self.inner.read().await;
        let status = q.status.as_deref().filter(|s| !s.is_empty());
        let limit = q
            .limit
            .filter(|&l| l > 0)
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        store
            .orders
            .iter()
            .filter(|o| status.map_or(true, |s| o.status.matches(s)))
            .take(limit)
            .cloned()
            .collect()
    }

    async fn update(&self, id: &str, patch: OrderUpdate) -> Option<Order> {
        let mut store = self.inner.write().await;
        let idx = store.position(id)?;
        if patch.is_empty() {
            debug!(order_id = %id, "empty update");
            return Some(store.orders[idx].clone());
        }
        let updated = store.orders[idx].patched(&patch);
        store.orders[idx] = updated.clone();
        info!(order_id = %id, status = %updated.status, "order updated");
        Some(updated)
    }

    async fn delete(&self, id: &str) -> bool {
        let mut store = self.inner.write().await;
        match store.position(id) {
            Some(idx) => {
                store.orders.remove(idx);
                info!(order_id = %id, "order deleted");
                true
            }
            None => {
                debug!(order_id = %id, "delete of unknown order");
                false
            }
        }
    }

    async fn count(&self) -> usize {
        self.inner.read().await.orders.len()
    }
}
