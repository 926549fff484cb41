use hyper_sieve::prelude::*;
use serde_json::json;

fn id(v: i32) -> Id {
    Id::from(v)
}

#[test]
fn edge_list_builds_degrees() -> Result<(), Box<dyn std::error::Error>> {
    let h = Hypergraph::from_edge_list([vec![1, 2], vec![2, 3, 4]])?;
    assert_eq!(h.num_edges(), 2);
    assert_eq!(h.num_nodes(), 4);
    let deg = h.nodes().degree().as_map();
    assert_eq!(deg[&id(1)], json!(1));
    assert_eq!(deg[&id(2)], json!(2));
    assert_eq!(deg[&id(3)], json!(1));
    assert_eq!(deg[&id(4)], json!(1));
    // counter ids in insertion order
    assert_eq!(h.edges().ids(), vec![id(0), id(1)]);
    Ok(())
}

#[test]
fn duplicate_edge_id_is_a_noop() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![2, 3, 4]])?;
    let out = h.add_edge([5, 6], Some(id(0)), Attrs::new())?;
    assert_eq!(out, Insert::Duplicate(id(0)));
    assert_eq!(h.num_edges(), 2);
    assert!(!h.has_node(&id(5)));
    assert_eq!(Vec::from_iter(h.edges().members(&id(0))?), vec![id(1), id(2)]);
    Ok(())
}

#[test]
fn strong_removal_deletes_incident_edges() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_dict([(0, vec![1, 2, 3]), (5, vec![1, 9])])?;
    h.remove_node(&id(1), true)?;
    assert_eq!(h.num_edges(), 0);
    assert_eq!(h.nodes().ids(), vec![id(2), id(3), id(9)]);
    assert!(h.nodes().memberships(&id(9))?.is_empty());
    h.validate_invariants()?;
    Ok(())
}

#[test]
fn weak_removal_strips_and_drops_emptied_edges() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![1]])?;
    h.remove_node(&id(1), false)?;
    assert_eq!(to_edge_list(&h), vec![vec![id(2)]]);

    let mut keep = Hypergraph::with_options(HypergraphOptions {
        allow_empty_edges: true,
        remove_empty_edges: false,
    });
    let _ = keep.add_edges_from([vec![1, 2], vec![1]])?;
    keep.remove_node(&id(1), false)?;
    assert_eq!(keep.num_edges(), 2);
    assert_eq!(keep.edges().empty().ids(), vec![id(1)]);
    Ok(())
}

#[test]
fn missing_ids_report_not_found() {
    let mut h = Hypergraph::from_edge_list([vec![1, 2]]).unwrap();
    assert_eq!(
        h.remove_node(&id(7), false),
        Err(IncidenceError::NodeNotFound(id(7)))
    );
    assert_eq!(h.remove_edge(&id(3)), Err(IncidenceError::EdgeNotFound(id(3))));
    let err = h.remove_node_from_edge(&id(0), &id(9)).unwrap_err();
    assert!(err.is_not_found());
    // bulk removal skips unknown ids
    h.remove_nodes_from(&[id(7), id(1)], false).unwrap();
    assert_eq!(h.nodes().ids(), vec![id(2)]);
}

#[test]
fn remove_node_from_edge_keeps_node() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![3]])?;
    h.remove_node_from_edge(&id(0), &id(1))?;
    assert!(h.has_node(&id(1)));
    assert_eq!(h.nodes().degree().get(&id(1))?, json!(0));
    h.remove_node_from_edge(&id(1), &id(3))?;
    assert!(!h.has_edge(&id(1)));
    Ok(())
}

#[test]
fn add_node_to_edge_creates_missing_parts() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::new();
    h.add_node_to_edge("e", 1)?;
    h.add_node_to_edge("e", 2)?;
    h.add_node_to_edge(4, 2)?;
    assert_eq!(h.edges().members(&Id::from("e"))?.len(), 2);
    assert_eq!(h.nodes().memberships(&id(2))?.len(), 2);
    // explicit integer id 4 moves the counter past it
    let next = h.add_edge([9], None, Attrs::new())?;
    assert_eq!(next, Insert::Added(id(5)));
    Ok(())
}

#[test]
fn empty_edges_follow_policy() {
    let mut lax = Hypergraph::new();
    let out = lax.add_edge(Vec::<i32>::new(), None, Attrs::new()).unwrap();
    assert!(out.is_added());

    let mut strict = Hypergraph::with_options(HypergraphOptions::strict());
    let err = strict
        .add_edges_from([vec![1, 2], vec![]])
        .unwrap_err();
    assert!(matches!(err, IncidenceError::InvalidStructure(_)));
    // nothing from the failed batch was applied
    assert_eq!(strict.num_edges(), 0);
    assert_eq!(strict.num_nodes(), 0);
}

#[test]
fn members_are_deduplicated() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::new();
    let _ = h.add_edge([1, 2, 2, 1], None, Attrs::new())?;
    assert_eq!(h.edges().size().get(&id(0))?, json!(2));
    Ok(())
}

#[test]
fn input_variants_agree() -> Result<(), Box<dyn std::error::Error>> {
    let from_list = Hypergraph::from_input(HypergraphInput::EdgeList(vec![
        vec![id(0), id(1)],
        vec![id(1), id(2)],
    ]))?;
    let from_pairs = Hypergraph::from_input(HypergraphInput::Bipartite(vec![
        (id(0), id(0)),
        (id(1), id(0)),
        (id(1), id(1)),
        (id(2), id(1)),
    ]))?;
    let from_matrix = Hypergraph::from_input(HypergraphInput::Incidence(vec![
        vec![1, 0],
        vec![1, 1],
        vec![0, 1],
    ]))?;
    let from_sparse = Hypergraph::from_input(HypergraphInput::SparseIncidence {
        num_nodes: 3,
        num_edges: 2,
        entries: vec![(0, 0), (1, 0), (1, 1), (2, 1)],
    })?;
    let expected = to_edge_dict(&from_list);
    assert_eq!(to_edge_dict(&from_pairs), expected);
    assert_eq!(to_edge_dict(&from_matrix), expected);
    assert_eq!(to_edge_dict(&from_sparse), expected);
    Ok(())
}

#[test]
fn malformed_matrices_are_rejected() {
    let ragged = Hypergraph::from_incidence_matrix(&[vec![1, 0], vec![1]]);
    assert!(matches!(ragged, Err(IncidenceError::InvalidStructure(_))));
    let outside = Hypergraph::from_input(HypergraphInput::SparseIncidence {
        num_nodes: 1,
        num_edges: 1,
        entries: vec![(0, 3)],
    });
    assert!(matches!(outside, Err(IncidenceError::InvalidStructure(_))));
}

#[test]
fn attributes_read_back() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![2, 3]])?;
    h.set_attr("name", "toy")?;
    h.add_node(1, attrs_from([("color", "red")]))?;
    h.add_node(1, attrs_from([("size", 3)]))?;
    h.set_edge_attributes(AttrUpdate::per_id("weight", [(0, 2.5), (42, 1.0)]))?;
    h.set_node_attributes(AttrUpdate::uniform("seen", true))?;

    assert_eq!(h.attr("name"), Some(&json!("toy")));
    let node = h.nodes().get(&id(1))?;
    assert_eq!(node["color"], json!("red"));
    assert_eq!(node["size"], json!(3));
    assert_eq!(h.get_edge_attribute("weight").len(), 1);
    assert_eq!(h.get_node_attribute("seen").len(), 3);
    assert_eq!(h.to_string(), "toy Hypergraph with 3 nodes and 2 hyperedges");
    Ok(())
}

#[test]
fn dual_swaps_namespaces() -> Result<(), Box<dyn std::error::Error>> {
    let h = Hypergraph::from_edge_dict([("a", vec![1, 2]), ("b", vec![2])])?;
    let d = h.dual();
    assert_eq!(d.nodes().ids(), vec![Id::from("a"), Id::from("b")]);
    assert_eq!(d.edges().ids(), vec![id(1), id(2)]);
    assert_eq!(
        Vec::from_iter(d.edges().members(&id(2))?),
        vec![Id::from("a"), Id::from("b")]
    );
    assert_eq!(to_edge_dict(&d.dual()), to_edge_dict(&h));
    Ok(())
}

#[test]
fn clear_resets_counter() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![2, 3]])?;
    h.set_attr("name", "kept")?;
    h.clear(true)?;
    assert_eq!((h.num_nodes(), h.num_edges()), (0, 0));
    assert_eq!(h.attr("name"), Some(&json!("kept")));
    assert_eq!(h.add_edge([1], None, Attrs::new())?, Insert::Added(id(0)));
    h.clear(false)?;
    assert!(h.attrs().is_empty());
    Ok(())
}

#[test]
fn default_ids_after_max_explicit_id() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::new();
    let top = Id::Int(i64::MAX);
    assert_eq!(h.add_edge([1], Some(top.clone()), Attrs::new())?, Insert::Added(top));
    assert_eq!(h.add_edge([2], None, Attrs::new())?, Insert::Added(id(0)));
    assert_eq!(h.add_edge([3], None, Attrs::new())?, Insert::Added(id(1)));
    h.validate_invariants()?;
    Ok(())
}
