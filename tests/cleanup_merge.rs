use hyper_sieve::prelude::*;
use serde_json::json;

fn id(v: i32) -> Id {
    Id::from(v)
}

fn ids(v: &[i32]) -> Vec<Id> {
    v.iter().copied().map(Id::from).collect()
}

/// `0:{1,2} 1:{2,1} 2:{3}` with weights 1 and 2 on the duplicates.
fn with_duplicates() -> Hypergraph {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![2, 1], vec![3]]).unwrap();
    h.set_edge_attributes(AttrUpdate::per_id("w", [(0, 1), (1, 2)]))
        .unwrap();
    h
}

#[test]
fn merge_keeps_first_id_and_attrs() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = with_duplicates();
    h.merge_duplicate_edges(&MergeOptions::default())?;
    assert_eq!(h.num_edges(), 2);
    assert!(h.has_edge(&id(0)));
    assert!(!h.has_edge(&id(1)));
    assert_eq!(h.get_edge_attribute("w")[&id(0)], json!(1));
    assert_eq!(h.nodes().degree().get(&id(1))?, json!(1));
    h.validate_invariants()?;
    Ok(())
}

#[test]
fn merge_union_with_multiplicity() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = with_duplicates();
    h.merge_duplicate_edges(&MergeOptions {
        rename: MergeRename::First,
        merge_rule: MergeRule::Union,
        multiplicity: Some("mult".into()),
    })?;
    assert_eq!(h.get_edge_attribute("w")[&id(0)], json!([1, 2]));
    let mult = h.get_edge_attribute("mult");
    assert_eq!(mult[&id(0)], json!(2));
    assert_eq!(mult[&id(2)], json!(1));
    Ok(())
}

#[test]
fn merge_with_fresh_id() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = with_duplicates();
    h.merge_duplicate_edges(&MergeOptions {
        rename: MergeRename::New,
        ..MergeOptions::default()
    })?;
    assert_eq!(h.edges().ids(), ids(&[2, 3]));
    assert_eq!(h.edges().members(&id(3))?.len(), 2);
    Ok(())
}

#[test]
fn cleanup_prunes_and_relabels() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![1, 2], vec![3], vec![], vec![4, 5]])?;
    h.add_node(9, Attrs::new())?;
    h.cleanup(&CleanupOptions::default())?;

    assert_eq!(h.num_nodes(), 4);
    assert_eq!(to_edge_list(&h), vec![ids(&[2, 3]), ids(&[0, 1])]);
    let edge_labels = h.get_edge_attribute("label");
    assert_eq!(edge_labels[&id(0)], json!(4));
    assert_eq!(edge_labels[&id(1)], json!(0));
    assert_eq!(h.get_node_attribute("label")[&id(2)], json!(4));
    // the counter continues after the relabelled ids
    assert_eq!(h.add_edge([0], None, Attrs::new())?, Insert::Added(id(2)));
    h.validate_invariants()?;
    Ok(())
}

#[test]
fn cleanup_can_keep_everything() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Hypergraph::from_edge_list([vec![1, 2], vec![1, 2], vec![3], vec![]])?;
    h.add_node("lonely", Attrs::new())?;
    let before = to_edge_dict(&h);
    h.cleanup(&CleanupOptions {
        keep_isolates: true,
        keep_singletons: true,
        keep_multiedges: true,
        keep_empty: true,
        relabel: false,
    })?;
    assert_eq!(to_edge_dict(&h), before);
    assert!(h.has_node(&Id::from("lonely")));
    Ok(())
}
