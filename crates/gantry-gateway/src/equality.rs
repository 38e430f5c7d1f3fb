//! Order-sensitive equality over address and listener lists
//!
//! Used to skip status writes and ignore no-op updates. These are not set
//! comparisons: the same elements in a different order compare unequal.

use gantry_common::crd::{GatewayAddress, Listener};

/// Whether two address lists have the same contents in the same order
pub fn addresses_equal(l1: &[GatewayAddress], l2: &[GatewayAddress]) -> bool {
    l1 == l2
}

/// Whether two listener lists have the same contents in the same order
pub fn listeners_equal(l1: &[Listener], l2: &[Listener]) -> bool {
    l1 == l2
}
