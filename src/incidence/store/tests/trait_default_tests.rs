use indexmap::IndexSet;

use crate::incidence::attrs::Attrs;
use crate::incidence::id::Id;
use crate::incidence::store::{HyperStore, IncidenceStore};

fn set<I: Into<Id>>(ids: impl IntoIterator<Item = I>) -> IndexSet<Id> {
    ids.into_iter().map(Into::into).collect()
}

fn store() -> HyperStore {
    let mut s = HyperStore::new();
    s.insert_edge(Id::from("a"), set([1, 2, 3]), Attrs::new());
    s.insert_edge(Id::from("b"), set([2, 3]), Attrs::new());
    s.insert_edge(Id::from("c"), set([3, 4]), Attrs::new());
    s
}

#[test]
fn node_neighbors_respect_s() {
    let s = store();
    assert_eq!(s.node_neighbors(&Id::from(3), 1), set([1, 2, 4]));
    assert_eq!(s.node_neighbors(&Id::from(3), 2), set([2]));
    assert!(s.node_neighbors(&Id::from(42), 1).is_empty());
}

#[test]
fn edge_neighbors_respect_s() {
    let s = store();
    assert_eq!(s.edge_neighbors(&Id::from("a"), 1), set(["b", "c"]));
    assert_eq!(s.edge_neighbors(&Id::from("a"), 2), set(["b"]));
}

#[test]
fn absent_ids_have_no_incidence() {
    let s = store();
    assert_eq!(s.degree(&Id::from(99)), 0);
    assert_eq!(s.members(&Id::from("zz")).count(), 0);
    assert!(s.node_attrs(&Id::from(99)).is_none());
}
