//! Read-only, composable views over the ids of a container.

pub mod edge_view;
pub mod filter;
pub mod id_view;
pub mod namespace;
pub mod node_view;

pub use edge_view::{DiEdgeView, EdgeView};
pub use filter::FilterMode;
pub use id_view::IdView;
pub use namespace::{DiEdges, DiNodes, Edges, Namespace, Nodes};
pub use node_view::{DiNodeView, NodeView};
