//! # Order Session
//!
//! Shares one order between threads of a host (e.g. several request
//! handlers serving the same register).
//!
//! ## Thread Safety
//! `Order` itself has no internal synchronization. `OrderSession` wraps it
//! in `Arc<Mutex<Order>>`: one lock per order, held only for the duration
//! of a closure.
//!
//! ```rust
//! use stand_core::item::Food;
//! use stand_core::session::OrderSession;
//!
//! let session = OrderSession::new();
//! session.with_order_mut(|order| order.add_item(Food::new("corndog")?)).unwrap();
//! assert_eq!(session.with_order(|order| order.num_items()), 1);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::StandConfig;
use crate::order::Order;
use crate::receipt::Receipt;

/// A lockable, cloneable handle to a single order.
#[derive(Debug, Clone, Default)]
pub struct OrderSession {
    order: Arc<Mutex<Order>>,
}

impl OrderSession {
    pub fn new() -> Self {
        OrderSession::from_order(Order::new())
    }

    pub fn with_config(config: &StandConfig) -> Self {
        OrderSession::from_order(Order::with_config(config))
    }

    pub fn from_order(order: Order) -> Self {
        OrderSession {
            order: Arc::new(Mutex::new(order)),
        }
    }

    /// Runs `f` with read access to the order.
    ///
    /// A poisoned lock is recovered: every `Order` mutation either completes
    /// or leaves the order untouched, so the data is still consistent.
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Order) -> R,
    {
        let order = self.order.lock().unwrap_or_else(PoisonError::into_inner);
        f(&order)
    }

    /// Runs `f` with write access to the order.
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Order) -> R,
    {
        let mut order = self.order.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut order)
    }

    /// Receipt of the order as it stands now.
    pub fn receipt(&self) -> Receipt {
        self.with_order(Order::receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
