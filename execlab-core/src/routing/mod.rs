//! Order routing: book matching and the broker submission boundary.

pub mod broker;
pub mod router;

pub use broker::{Broker, BrokerError, OrderKind, OrderStatus, OrderTicket, UnimplementedBroker};
pub use router::{route, route_with_impact_cap, CappedFill};
