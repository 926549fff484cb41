use hyper_sieve::prelude::*;

fn id(v: i32) -> Id {
    Id::from(v)
}

fn sorted_members(sc: &SimplicialComplex) -> Vec<Vec<Id>> {
    let mut out: Vec<Vec<Id>> = to_edge_list(sc)
        .into_iter()
        .map(|mut m| {
            m.sort();
            m
        })
        .collect();
    out.sort();
    out
}

#[test]
fn add_simplex_closes_downward() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let out = sc.add_simplex([1, 2, 3], None, Attrs::new())?;
    assert_eq!(out, Insert::Added(id(0)));
    assert_eq!(
        sorted_members(&sc),
        vec![
            vec![id(1), id(2)],
            vec![id(1), id(2), id(3)],
            vec![id(1), id(3)],
            vec![id(2), id(3)],
        ]
    );
    // generated faces carry no attributes
    for face in sc.edges().filterby(EdgeStat::size(), 2, FilterMode::Eq)?.iter() {
        assert!(sc.edges().get(face)?.is_empty());
    }
    sc.validate_invariants()?;
    Ok(())
}

#[test]
fn closure_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let _ = sc.add_simplex([1, 2, 3], None, Attrs::new())?;
    let before = sc.num_edges();
    assert_eq!(
        sc.add_simplex([3, 1, 2], None, Attrs::new())?,
        Insert::Existing(id(0))
    );
    let face = sc.simplex_id([2, 1]).cloned().ok_or("missing face")?;
    assert_eq!(
        sc.add_simplex([1, 2], Some(Id::from("x")), Attrs::new())?,
        Insert::Existing(face)
    );
    assert_eq!(sc.num_edges(), before);
    Ok(())
}

#[test]
fn explicit_id_collision_is_duplicate() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let _ = sc.add_simplex([1, 2], Some(Id::from("s")), Attrs::new())?;
    let out = sc.add_simplex([3, 4], Some(Id::from("s")), Attrs::new())?;
    assert_eq!(out, Insert::Duplicate(Id::from("s")));
    assert!(!sc.has_simplex([3, 4]));
    Ok(())
}

#[test]
fn removal_cascades_to_supersets() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let _ = sc.add_simplex([1, 2, 3], None, Attrs::new())?;
    let edge = sc.simplex_id([1, 2]).cloned().ok_or("missing face")?;
    sc.remove_simplex_id(&edge)?;
    assert!(!sc.has_simplex([1, 2, 3]));
    assert!(!sc.has_simplex([1, 2]));
    assert!(sc.has_simplex([1, 3]));
    assert!(sc.has_simplex([2, 3]));
    assert_eq!(sc.num_edges(), 2);
    sc.validate_invariants()?;
    Ok(())
}

#[test]
fn node_removal_drops_every_coface() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let _ = sc.add_simplices_from([vec![1, 2, 3], vec![3, 4]])?;
    sc.remove_node(&id(3))?;
    assert!(!sc.has_node(&id(3)));
    assert_eq!(sorted_members(&sc), vec![vec![id(1), id(2)]]);
    assert!(sc.nodes().contains(&id(4)));
    assert_eq!(
        sc.remove_node(&id(3)),
        Err(IncidenceError::NodeNotFound(id(3)))
    );
    Ok(())
}

#[test]
fn bulk_removal_skips_unknown_ids() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let _ = sc.add_simplex([1, 2, 3], None, Attrs::new())?;
    sc.remove_simplex_ids_from(&[id(0), id(99)])?;
    assert_eq!(sc.num_edges(), 3);
    Ok(())
}

#[test]
fn min_size_controls_face_depth() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::with_options(SimplicialOptions { min_size: 1 });
    let _ = sc.add_simplex([1, 2], None, Attrs::new())?;
    assert_eq!(sc.num_edges(), 3);
    assert!(sc.has_simplex([1]));
    assert_eq!(sc.edges().singletons().len(), 2);
    Ok(())
}

#[test]
fn empty_simplex_is_rejected() {
    let mut sc = SimplicialComplex::new();
    let err = sc
        .add_simplex(Vec::<i32>::new(), None, Attrs::new())
        .unwrap_err();
    assert!(matches!(err, IncidenceError::InvalidStructure(_)));
    assert_eq!(sc.num_edges(), 0);
}

#[test]
fn max_order_keeps_only_bounded_faces() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let _ = sc.add_simplices_from_max_order([vec![1, 2, 3, 4]], 1)?;
    assert_eq!(sc.num_edges(), 6);
    assert!(!sc.has_simplex([1, 2, 3]));
    assert_eq!(sc.edges().order().max()?, Some(1.0));
    Ok(())
}

#[test]
fn from_hypergraph_keeps_explicit_ids() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_dict([("a", vec![1, 2, 3]), ("b", vec![1, 2])])?;
    let _ = h.add_edge(Vec::<i32>::new(), Some(Id::from("empty")), Attrs::new())?;
    h.set_edge_attributes(AttrUpdate::per_id("w", [("a", 1), ("b", 2)]))?;

    let sc = SimplicialComplex::from_hypergraph(&h)?;
    assert_eq!(sc.simplex_id([1, 2]), Some(&Id::from("b")));
    assert_eq!(sc.simplex_id([1, 2, 3]), Some(&Id::from("a")));
    assert_eq!(sc.num_edges(), 4);
    assert!(!sc.has_edge(&Id::from("empty")));
    assert_eq!(sc.get_edge_attribute("w").len(), 2);
    sc.validate_invariants()?;

    let back = sc.to_hypergraph();
    assert_eq!(back.num_edges(), sc.num_edges());
    Ok(())
}

#[test]
fn display_counts_simplices() -> Result<(), Box<dyn std::error::Error>> {
    let mut sc = SimplicialComplex::new();
    let _ = sc.add_simplex([1, 2, 3], None, Attrs::new())?;
    assert_eq!(
        sc.to_string(),
        "Unnamed SimplicialComplex with 3 nodes and 4 simplices"
    );
    Ok(())
}
