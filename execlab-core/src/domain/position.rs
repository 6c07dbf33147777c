//! Position state carried bar-by-bar through the strategy state machine.

use serde::{Deserialize, Serialize};

/// Long/flat position state.
///
/// The entry price exists exactly while long: it is set on the flat-to-long
/// transition and discarded on the long-to-flat transition. Encoding the
/// entry price inside the `Long` variant makes the "long iff entry price set"
/// invariant unrepresentable to violate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PositionState {
    Flat,
    Long { entry_price: f64 },
}

impl PositionState {
    pub fn is_long(&self) -> bool {
        matches!(self, PositionState::Long { .. })
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, PositionState::Flat)
    }

    /// Entry price of the currently open trade, if any.
    pub fn entry_price(&self) -> Option<f64> {
        match self {
            PositionState::Flat => None,
            PositionState::Long { entry_price } => Some(*entry_price),
        }
    }

    /// Return since entry at `current_price`, if long.
    pub fn open_return(&self, current_price: f64) -> Option<f64> {
        self.entry_price()
            .map(|entry| (current_price - entry) / entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_price_exists_iff_long() {
        assert_eq!(PositionState::Flat.entry_price(), None);
        assert_eq!(
            PositionState::Long { entry_price: 101.0 }.entry_price(),
            Some(101.0)
        );
    }

    #[test]
    fn open_return_relative_to_entry() {
        let long = PositionState::Long { entry_price: 100.0 };
        assert_eq!(long.open_return(102.0), Some(0.02));
        assert_eq!(PositionState::Flat.open_return(102.0), None);
    }

    #[test]
    fn state_serialization_is_tagged() {
        let json = serde_json::to_string(&PositionState::Long { entry_price: 99.5 }).unwrap();
        assert!(json.contains("\"state\":\"long\""));
        let deser: PositionState = serde_json::from_str(&json).unwrap();
        assert_eq!(deser.entry_price(), Some(99.5));
    }
}
