//! The four id namespaces a view can range over.
//!
//! A namespace is a thin borrowed handle that tells an [`IdView`](super::IdView)
//! where its ids live, what "incident" means for them and which statistic
//! kinds apply.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;

use crate::incidence::attrs::Attrs;
use crate::incidence::id::Id;
use crate::incidence::store::{DiHyperStore, IncidenceStore};
use crate::incidence_error::IncidenceError;
use crate::stats::{DiEdgeStat, DiNodeStat, EdgeStat, NodeStat, StatKind};

/// Read access to one side of a store.
pub trait Namespace<'a>: Copy + fmt::Debug {
    /// The store statistics are evaluated against.
    type Store: IncidenceStore + ?Sized + 'a;
    /// Statistic kinds defined on this namespace.
    type Stat: StatKind<Self::Store> + FromStr<Err = IncidenceError>;
    /// `"node"` or `"edge"`, for messages.
    const LABEL: &'static str;

    fn store(&self) -> &'a Self::Store;
    /// Every id of the namespace, in store order.
    fn ids(&self) -> Box<dyn Iterator<Item = &'a Id> + 'a>;
    fn has(&self, id: &Id) -> bool;
    fn attrs(&self, id: &Id) -> Option<&'a Attrs>;
    fn total(&self) -> usize;
    /// Memberships for nodes, members for edges.
    fn incident(&self, id: &Id) -> Box<dyn Iterator<Item = &'a Id> + 'a>;
    /// Ids of the same namespace sharing at least `s` incident ids with `id`.
    fn neighbors(&self, id: &Id, s: usize) -> IndexSet<Id>;
    /// The error for an id the store does not know.
    fn not_found(id: Id) -> IncidenceError;
}

macro_rules! namespace_handle {
    ($(#[$meta:meta])* $name:ident<$a:lifetime>, $store:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $name<$a> {
            store: &$a $store,
        }

        impl<$a> $name<$a> {
            pub fn new(store: &$a $store) -> Self {
                Self { store }
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("nodes", &self.store.num_nodes())
                    .field("edges", &self.store.num_edges())
                    .finish()
            }
        }
    };
}

namespace_handle!(
    /// Nodes of an undirected container.
    Nodes<'a>,
    dyn IncidenceStore + 'a
);
namespace_handle!(
    /// Edges of an undirected container.
    Edges<'a>,
    dyn IncidenceStore + 'a
);
namespace_handle!(
    /// Nodes of a directed container.
    DiNodes<'a>,
    DiHyperStore
);
namespace_handle!(
    /// Edges of a directed container.
    DiEdges<'a>,
    DiHyperStore
);

macro_rules! node_side {
    ($a:lifetime) => {
        const LABEL: &'static str = "node";

        fn store(&self) -> &$a Self::Store {
            self.store
        }
        fn ids(&self) -> Box<dyn Iterator<Item = &$a Id> + $a> {
            self.store.node_ids()
        }
        fn has(&self, id: &Id) -> bool {
            self.store.has_node(id)
        }
        fn attrs(&self, id: &Id) -> Option<&$a Attrs> {
            self.store.node_attrs(id)
        }
        fn total(&self) -> usize {
            self.store.num_nodes()
        }
        fn incident(&self, id: &Id) -> Box<dyn Iterator<Item = &$a Id> + $a> {
            self.store.memberships(id)
        }
        fn neighbors(&self, id: &Id, s: usize) -> IndexSet<Id> {
            self.store.node_neighbors(id, s)
        }
        fn not_found(id: Id) -> IncidenceError {
            IncidenceError::NodeNotFound(id)
        }
    };
}

macro_rules! edge_side {
    ($a:lifetime) => {
        const LABEL: &'static str = "edge";

        fn store(&self) -> &$a Self::Store {
            self.store
        }
        fn ids(&self) -> Box<dyn Iterator<Item = &$a Id> + $a> {
            self.store.edge_ids()
        }
        fn has(&self, id: &Id) -> bool {
            self.store.has_edge(id)
        }
        fn attrs(&self, id: &Id) -> Option<&$a Attrs> {
            self.store.edge_attrs(id)
        }
        fn total(&self) -> usize {
            self.store.num_edges()
        }
        fn incident(&self, id: &Id) -> Box<dyn Iterator<Item = &$a Id> + $a> {
            self.store.members(id)
        }
        fn neighbors(&self, id: &Id, s: usize) -> IndexSet<Id> {
            self.store.edge_neighbors(id, s)
        }
        fn not_found(id: Id) -> IncidenceError {
            IncidenceError::EdgeNotFound(id)
        }
    };
}

impl<'a> Namespace<'a> for Nodes<'a> {
    type Store = dyn IncidenceStore + 'a;
    type Stat = NodeStat;
    node_side!('a);
}

impl<'a> Namespace<'a> for Edges<'a> {
    type Store = dyn IncidenceStore + 'a;
    type Stat = EdgeStat;
    edge_side!('a);
}

impl<'a> Namespace<'a> for DiNodes<'a> {
    type Store = DiHyperStore;
    type Stat = DiNodeStat;
    node_side!('a);
}

impl<'a> Namespace<'a> for DiEdges<'a> {
    type Store = DiHyperStore;
    type Stat = DiEdgeStat;
    edge_side!('a);
}
