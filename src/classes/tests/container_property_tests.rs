use itertools::Itertools;
use proptest::collection::vec;
use proptest::prelude::*;

use crate::classes::{DiHypergraph, Hypergraph, HypergraphOptions, Insert, SimplicialComplex};
use crate::convert::{to_edge_dict, to_edge_list};
use crate::debug_invariants::DebugInvariants;
use crate::incidence::attrs::Attrs;
use crate::incidence::id::Id;
use crate::incidence::store::{IncidenceStore, Side};
use crate::incidence_error::IncidenceError;

/// Both directions of the incidence relation agree, read through the public trait.
fn mirrored<S: IncidenceStore + ?Sized>(s: &S) -> bool {
    let forward = s
        .edge_ids()
        .all(|e| s.members(e).all(|n| s.memberships(n).any(|x| x == e)));
    let backward = s
        .node_ids()
        .all(|n| s.memberships(n).all(|e| s.members(e).any(|x| x == n)));
    forward && backward
}

#[derive(Clone, Debug)]
enum Op {
    AddEdge(Vec<u8>),
    AddNodeToEdge(u8, u8),
    RemoveNode(u8, bool),
    RemoveEdge(u8),
    RemoveNodeFromEdge(u8, u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => vec(0u8..8, 0..4).prop_map(Op::AddEdge),
        1 => (0u8..6, 0u8..8).prop_map(|(e, n)| Op::AddNodeToEdge(e, n)),
        1 => (0u8..8, any::<bool>()).prop_map(|(n, s)| Op::RemoveNode(n, s)),
        1 => (0u8..6).prop_map(Op::RemoveEdge),
        1 => (0u8..6, 0u8..8).prop_map(|(e, n)| Op::RemoveNodeFromEdge(e, n)),
    ]
}

fn apply(h: &mut Hypergraph, op: &Op) -> Result<(), IncidenceError> {
    match op {
        Op::AddEdge(m) => h.add_edge(m.iter().copied(), None, Attrs::new()).map(|_| ()),
        Op::AddNodeToEdge(e, n) => h.add_node_to_edge(*e, *n),
        Op::RemoveNode(n, strong) => h.remove_node(&Id::from(*n), *strong),
        Op::RemoveEdge(e) => h.remove_edge(&Id::from(*e)),
        Op::RemoveNodeFromEdge(e, n) => h.remove_node_from_edge(&Id::from(*e), &Id::from(*n)),
    }
}

#[derive(Clone, Debug)]
enum DiOp {
    AddEdge(Vec<u8>, Vec<u8>),
    Link(u8, u8, bool),
    Unlink(u8, u8, bool),
    AddNodes(Vec<u8>),
    RemoveNode(u8, bool),
    RemoveEdge(u8),
}

fn side(tail: bool) -> Side {
    if tail { Side::Tail } else { Side::Head }
}

fn di_op() -> impl Strategy<Value = DiOp> {
    prop_oneof![
        3 => (vec(0u8..8, 0..3), vec(0u8..8, 0..3)).prop_map(|(t, h)| DiOp::AddEdge(t, h)),
        1 => (0u8..6, 0u8..8, any::<bool>()).prop_map(|(e, n, t)| DiOp::Link(e, n, t)),
        1 => (0u8..6, 0u8..8, any::<bool>()).prop_map(|(e, n, t)| DiOp::Unlink(e, n, t)),
        1 => vec(0u8..10, 0..3).prop_map(DiOp::AddNodes),
        1 => (0u8..8, any::<bool>()).prop_map(|(n, s)| DiOp::RemoveNode(n, s)),
        1 => (0u8..6).prop_map(DiOp::RemoveEdge),
    ]
}

fn apply_directed(dh: &mut DiHypergraph, op: &DiOp) -> Result<(), IncidenceError> {
    match op {
        DiOp::AddEdge(t, h) => dh
            .add_edge(t.iter().copied(), h.iter().copied(), None, Attrs::new())
            .map(|_| ()),
        DiOp::Link(e, n, tail) => dh.add_node_to_edge(*e, *n, side(*tail)),
        DiOp::Unlink(e, n, tail) => {
            dh.remove_node_from_edge(&Id::from(*e), &Id::from(*n), side(*tail))
        }
        DiOp::AddNodes(ns) => dh.add_nodes_with_attrs(ns.iter().map(|n| (*n, Attrs::new()))),
        DiOp::RemoveNode(n, strong) => dh.remove_node(&Id::from(*n), *strong),
        DiOp::RemoveEdge(e) => dh.remove_edge(&Id::from(*e)),
    }
}

proptest! {
    #[test]
    fn random_mutations_keep_duality(ops in vec(op(), 0..40)) {
        let mut h = Hypergraph::new();
        for op in &ops {
            if let Err(e) = apply(&mut h, op) {
                prop_assert!(e.is_not_found(), "unexpected error {e} for {op:?}");
            }
            prop_assert!(h.validate_invariants().is_ok());
            prop_assert!(mirrored(&h));
        }
    }

    #[test]
    fn random_directed_mutations_keep_duality(ops in vec(di_op(), 0..40)) {
        let mut dh = DiHypergraph::new();
        for op in &ops {
            if let Err(e) = apply_directed(&mut dh, op) {
                prop_assert!(
                    e.is_not_found() || matches!(e, IncidenceError::InvalidStructure(_)),
                    "unexpected error {e} for {op:?}"
                );
            }
            prop_assert!(dh.validate_invariants().is_ok());
            prop_assert!(mirrored(&dh));
        }
    }

    #[test]
    fn edge_list_round_trip(edges in vec(vec(0i32..20, 0..5), 0..12)) {
        let h = Hypergraph::from_edge_list(edges.clone()).unwrap();
        let expected: Vec<Vec<Id>> = edges
            .iter()
            .map(|m| m.iter().copied().map(Id::from).unique().collect())
            .collect();
        prop_assert_eq!(to_edge_list(&h), expected.clone());
        let back = Hypergraph::from_edge_list(expected).unwrap();
        prop_assert_eq!(to_edge_dict(&back), to_edge_dict(&h));
    }

    #[test]
    fn failed_batch_keeps_ids(edges in vec(vec(0i32..10, 1..4), 0..6)) {
        let mut h = Hypergraph::with_options(HypergraphOptions::strict());
        let _ = h.add_edges_from(edges.clone()).unwrap();
        let before = to_edge_dict(&h);
        let mut bad = edges;
        bad.push(Vec::new());
        prop_assert!(h.add_edges_from(bad).is_err());
        prop_assert_eq!(to_edge_dict(&h), before.clone());
        let next = h.add_edge([0], None, Attrs::new()).unwrap();
        prop_assert_eq!(next.id(), &Id::from(before.len()));
    }

    #[test]
    fn closure_is_idempotent(simplices in vec(vec(0i32..7, 1..5), 1..6)) {
        let mut sc = SimplicialComplex::new();
        let _ = sc.add_simplices_from(simplices.clone()).unwrap();
        prop_assert!(sc.validate_invariants().is_ok());
        let count = sc.num_edges();
        let again = sc.add_simplices_from(simplices).unwrap();
        prop_assert!(again.iter().all(|i| matches!(i, Insert::Existing(_))));
        prop_assert_eq!(sc.num_edges(), count);
    }

    #[test]
    fn cascade_leaves_a_closed_complex(
        simplices in vec(vec(0i32..6, 2..5), 1..5),
        victim in 0usize..16,
    ) {
        let mut sc = SimplicialComplex::new();
        let _ = sc.add_simplices_from(simplices).unwrap();
        let ids: Vec<Id> = sc.edge_ids().cloned().collect();
        let target = ids[victim % ids.len()].clone();
        let members: Vec<Id> = sc.members(&target).cloned().collect();
        sc.remove_simplex_id(&target).unwrap();
        prop_assert!(!sc.has_simplex(members.iter()));
        prop_assert!(sc.validate_invariants().is_ok());
    }
}
