//! Edge descriptions accepted by the bulk insertion methods.

use indexmap::IndexSet;

use crate::incidence::attrs::Attrs;
use crate::incidence::id::Id;

/// An undirected edge to insert: members, optional explicit id, attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeSpec {
    pub members: IndexSet<Id>,
    pub id: Option<Id>,
    pub attrs: Attrs,
}

impl EdgeSpec {
    pub fn new<I, T>(members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }
}

impl<T: Into<Id>> From<Vec<T>> for EdgeSpec {
    fn from(members: Vec<T>) -> Self {
        EdgeSpec::new(members)
    }
}

impl<T: Into<Id>, K: Into<Id>> From<(Vec<T>, K)> for EdgeSpec {
    fn from((members, id): (Vec<T>, K)) -> Self {
        EdgeSpec::new(members).with_id(id)
    }
}

/// A directed edge to insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiEdgeSpec {
    pub tail: IndexSet<Id>,
    pub head: IndexSet<Id>,
    pub id: Option<Id>,
    pub attrs: Attrs,
}

impl DiEdgeSpec {
    pub fn new<I, J, T, U>(tail: I, head: J) -> Self
    where
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = U>,
        T: Into<Id>,
        U: Into<Id>,
    {
        Self {
            tail: tail.into_iter().map(Into::into).collect(),
            head: head.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }
}

impl<T: Into<Id>, U: Into<Id>> From<(Vec<T>, Vec<U>)> for DiEdgeSpec {
    fn from((tail, head): (Vec<T>, Vec<U>)) -> Self {
        DiEdgeSpec::new(tail, head)
    }
}
