pub mod weights;
pub mod forward;
pub mod network;

pub use weights::{WeightVector, MIN_WEIGHT, MAX_WEIGHT};
pub use forward::forward;
pub use network::UnaryNetwork;
