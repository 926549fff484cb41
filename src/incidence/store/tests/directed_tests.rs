use indexmap::IndexSet;

use crate::debug_invariants::DebugInvariants;
use crate::incidence::attrs::Attrs;
use crate::incidence::id::Id;
use crate::incidence::store::{DiHyperStore, IncidenceStore, Side};

fn set<I: Into<Id>>(ids: impl IntoIterator<Item = I>) -> IndexSet<Id> {
    ids.into_iter().map(Into::into).collect()
}

#[test]
fn sides_mirror_out_and_in_edges() {
    let mut s = DiHyperStore::new();
    s.insert_edge(Id::from(0), set([1, 2]), set([2, 3]), Attrs::new());
    assert_eq!(s.out_degree(&Id::from(2)), 1);
    assert_eq!(s.in_degree(&Id::from(2)), 1);
    // node on both sides is counted once in the undirected view
    assert_eq!(s.degree(&Id::from(2)), 1);
    assert_eq!(s.edge_size(&Id::from(0)), 3);
    assert_eq!(s.tail_size(&Id::from(0)), 2);
    assert_eq!(s.head_size(&Id::from(0)), 2);
    s.validate_invariants().unwrap();
}

#[test]
fn weak_removal_strips_both_sides() {
    let mut s = DiHyperStore::new();
    s.insert_edge(Id::from(0), set([1, 2]), set([2, 3]), Attrs::new());
    s.remove_node_weak(&Id::from(2)).unwrap();
    let e = s.edge(&Id::from(0)).unwrap();
    assert_eq!(e.tail(), &set([1]));
    assert_eq!(e.head(), &set([3]));
    s.validate_invariants().unwrap();
}

#[test]
fn weak_removal_drops_edge_only_when_both_sides_empty() {
    let mut s = DiHyperStore::new();
    s.insert_edge(Id::from("x"), set([1]), set([2]), Attrs::new());
    s.remove_node_weak(&Id::from(1)).unwrap();
    assert!(s.has_edge(&Id::from("x")));
    s.remove_node_weak(&Id::from(2)).unwrap();
    assert!(!s.has_edge(&Id::from("x")));
}

#[test]
fn strong_removal_drops_edges_on_either_side() {
    let mut s = DiHyperStore::new();
    s.insert_edge(Id::from(0), set([1]), set([2]), Attrs::new());
    s.insert_edge(Id::from(1), set([3]), set([1]), Attrs::new());
    s.insert_edge(Id::from(2), set([3]), set([4]), Attrs::new());
    s.remove_node_strong(&Id::from(1)).unwrap();
    let edges: Vec<_> = s.edge_ids().cloned().collect();
    assert_eq!(edges, vec![Id::from(2)]);
    assert_eq!(s.in_degree(&Id::from(2)), 0);
    s.validate_invariants().unwrap();
}

#[test]
fn link_adds_to_requested_side() {
    let mut s = DiHyperStore::new();
    s.insert_edge(Id::from(0), set([1]), IndexSet::new(), Attrs::new());
    s.link(&Id::from(0), Id::from(7), Side::Head);
    assert_eq!(s.in_degree(&Id::from(7)), 1);
    assert!(s.edge(&Id::from(0)).unwrap().head().contains(&Id::from(7)));
    s.validate_invariants().unwrap();
}

#[test]
fn unlink_touches_one_side_only() {
    let mut s = DiHyperStore::new();
    s.insert_edge(Id::from(0), set([1, 2]), set([2, 3]), Attrs::new());
    assert!(s.unlink(&Id::from(0), &Id::from(2), Side::Tail));
    assert!(!s.unlink(&Id::from(0), &Id::from(2), Side::Tail));
    assert_eq!(s.out_degree(&Id::from(2)), 0);
    assert_eq!(s.in_degree(&Id::from(2)), 1);
    assert_eq!(s.edge(&Id::from(0)).unwrap().head(), &set([2, 3]));
    assert!(!s.unlink(&Id::from(9), &Id::from(2), Side::Head));
    s.validate_invariants().unwrap();
}
