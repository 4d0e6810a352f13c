use crate::auth::{Authenticator, PresenceOnly};
use crate::repositories::OrderRepository;
use actix_web::web::Data;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new<R: OrderRepository + 'static>(orders: R) -> Data<Self> {
        Self::with_auth(orders, PresenceOnly)
    }

    pub fn with_auth<R, A>(orders: R, auth: A) -> Data<Self>
    where
        R: OrderRepository + 'static,
        A: Authenticator + 'static,
    {
        Data::new(Self {
            orders: Arc::new(orders),
            auth: Arc::new(auth),
        })
    }
}
