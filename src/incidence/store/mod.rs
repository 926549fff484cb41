//! Incidence stores: the two mirrored maps behind every container.

pub mod directed;
pub mod store_trait;
pub mod undirected;

pub use directed::{DiEdgeRecord, DiHyperStore, DiNodeRecord, Side};
pub use store_trait::IncidenceStore;
pub(crate) use store_trait::delegate_incidence_store;
pub use undirected::{EdgeRecord, HyperStore, NodeRecord};

#[cfg(test)]
mod tests;
