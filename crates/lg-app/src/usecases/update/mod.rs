mod coordinator;

pub use coordinator::{UpdateCoordinator, UpdatePorts};
