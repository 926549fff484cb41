//! The incidence core: identifiers, attributes and the dual-map stores.

pub mod attrs;
pub mod counter;
pub mod guard;
pub mod id;
pub mod store;

pub use attrs::{AttrUpdate, Attrs, Value, attrs_from};
pub use counter::IdCounter;
pub use guard::MutationGuard;
pub use id::Id;
pub use store::{DiHyperStore, HyperStore, IncidenceStore, Side};
