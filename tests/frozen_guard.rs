use hyper_sieve::prelude::*;

fn id(v: i32) -> Id {
    Id::from(v)
}

#[test]
fn frozen_hypergraph_rejects_every_mutation() {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![2, 3]]).unwrap();
    h.freeze();
    assert!(h.is_frozen());
    let before = to_edge_dict(&h);

    let frozen = Err(IncidenceError::Frozen);
    assert_eq!(h.add_node(9, Attrs::new()), frozen);
    assert_eq!(h.add_nodes_from([7, 8]), frozen);
    assert_eq!(h.add_edge([4, 5], None, Attrs::new()), Err(IncidenceError::Frozen));
    assert_eq!(h.add_edges_from([vec![4]]), Err(IncidenceError::Frozen));
    assert_eq!(h.add_node_to_edge(0, 9), frozen);
    assert_eq!(h.remove_node(&id(1), true), frozen);
    assert_eq!(h.remove_edge(&id(0)), frozen);
    assert_eq!(h.remove_node_from_edge(&id(0), &id(1)), frozen);
    assert_eq!(h.merge_duplicate_edges(&MergeOptions::default()), frozen);
    assert_eq!(h.cleanup(&CleanupOptions::default()), frozen);
    assert_eq!(h.set_attr("name", "x"), frozen);
    assert_eq!(h.set_node_attributes(AttrUpdate::uniform("a", 1)), frozen);
    assert_eq!(h.set_edge_attributes(AttrUpdate::uniform("a", 1)), frozen);
    assert_eq!(h.clear(false), frozen);

    assert_eq!(to_edge_dict(&h), before);
    assert!(h.attrs().is_empty());
}

#[test]
fn frozen_check_precedes_validation() {
    let mut h = Hypergraph::with_options(HypergraphOptions::strict());
    h.freeze();
    assert_eq!(
        h.add_edge(Vec::<i32>::new(), None, Attrs::new()),
        Err(IncidenceError::Frozen)
    );
    assert_eq!(h.remove_node(&id(42), false), Err(IncidenceError::Frozen));
}

#[test]
fn copy_of_frozen_is_mutable_and_independent() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_list([vec![1, 2]])?;
    h.freeze();
    let mut c = h.copy();
    assert!(!c.is_frozen());
    let _ = c.add_edge([3], None, Attrs::new())?;
    assert_eq!(c.num_edges(), 2);
    assert_eq!(h.num_edges(), 1);
    Ok(())
}

#[test]
fn frozen_simplicial_and_directed() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let _ = sc.add_simplex([1, 2, 3], None, Attrs::new())?;
    sc.freeze();
    assert_eq!(
        sc.add_simplex([4, 5], None, Attrs::new()),
        Err(IncidenceError::Frozen)
    );
    assert_eq!(sc.remove_simplex_id(&id(0)), Err(IncidenceError::Frozen));
    assert_eq!(sc.remove_node(&id(1)), Err(IncidenceError::Frozen));
    assert_eq!(sc.num_edges(), 4);
    let mut thawed = sc.copy();
    thawed.remove_node(&id(1))?;
    assert_eq!(thawed.num_edges(), 1);

    let mut dh = DiHypergraph::from_edge_list([(vec![1], vec![2])])?;
    dh.freeze();
    assert_eq!(
        dh.add_node_to_edge(0, 3, Side::Head),
        Err(IncidenceError::Frozen)
    );
    assert_eq!(dh.remove_node(&id(1), false), Err(IncidenceError::Frozen));
    assert_eq!(
        dh.remove_node_from_edge(&id(0), &id(1), Side::Tail),
        Err(IncidenceError::Frozen)
    );
    assert_eq!(
        dh.add_nodes_with_attrs([(3, Attrs::new())]),
        Err(IncidenceError::Frozen)
    );
    assert_eq!(dh.num_nodes(), 2);
    Ok(())
}
