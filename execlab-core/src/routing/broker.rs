//! Broker boundary — order submission and status retrieval.
//!
//! Live connectivity is deliberately unbuilt. The trait exists so the routing
//! logic can hand off fills to a capability the caller supplies; the stock
//! implementation surfaces a distinct `NotSupported` failure rather than
//! silently doing nothing. Tests substitute a deterministic fake.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BookSide, Symbol};

#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("{operation} is not supported by this broker")]
    NotSupported { operation: &'static str },

    #[error("unknown order id {0}")]
    UnknownOrder(String),
}

/// Order flavor at the submission boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Market,
    Limit { limit_price: f64 },
}

/// Typed order submission record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub symbol: Symbol,
    pub qty: f64,
    pub side: BookSide,
    pub kind: OrderKind,
}

/// Lifecycle status reported back by a broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Filled,
    Cancelled,
    Rejected,
}

/// Capability interface for order submission and status retrieval.
pub trait Broker: Send + Sync {
    /// Submit an order; returns the broker-assigned order id.
    fn send_order(&mut self, ticket: &OrderTicket) -> Result<String, BrokerError>;

    /// Retrieve the status of a previously submitted order.
    fn order_status(&self, order_id: &str) -> Result<OrderStatus, BrokerError>;
}

/// Placeholder broker: every call fails with `NotSupported`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedBroker;

impl Broker for UnimplementedBroker {
    fn send_order(&mut self, _ticket: &OrderTicket) -> Result<String, BrokerError> {
        Err(BrokerError::NotSupported {
            operation: "order submission",
        })
    }

    fn order_status(&self, _order_id: &str) -> Result<OrderStatus, BrokerError> {
        Err(BrokerError::NotSupported {
            operation: "order status retrieval",
        })
    }
}
