//! Serialized form of an [`IndexSet`].
//!
//! Deserialization goes through the validating constructors, so malformed input
//! (a zero row stride, an overflowing range) is rejected and a hash list
//! rebuilds its hash index.

use serde::{Deserialize, Serialize};
use selkit_common::error::Error;

use crate::set::IndexSet;

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum IndexSetRepr {
    Empty,
    Singleton {
        index: i64,
    },
    Range {
        start: i64,
        count: usize,
    },
    Box {
        start: i64,
        box_width: usize,
        box_height: usize,
        row_stride: usize,
    },
    List {
        indices: Vec<i64>,
    },
    HashList {
        indices: Vec<i64>,
    },
}

impl From<IndexSet> for IndexSetRepr {
    fn from(set: IndexSet) -> Self {
        match set {
            IndexSet::Empty(_) => IndexSetRepr::Empty,
            IndexSet::Singleton(set) => IndexSetRepr::Singleton { index: set.index() },
            IndexSet::Range(set) => IndexSetRepr::Range {
                start: set.start(),
                count: set.count(),
            },
            IndexSet::Box(set) => IndexSetRepr::Box {
                start: set.start(),
                box_width: set.box_width(),
                box_height: set.box_height(),
                row_stride: set.row_stride(),
            },
            IndexSet::List(set) => IndexSetRepr::List {
                indices: set.as_slice().to_vec(),
            },
            IndexSet::HashList(set) => IndexSetRepr::HashList {
                indices: set.as_slice().to_vec(),
            },
        }
    }
}

impl TryFrom<IndexSetRepr> for IndexSet {
    type Error = Error;

    fn try_from(repr: IndexSetRepr) -> Result<Self, Self::Error> {
        match repr {
            IndexSetRepr::Empty => Ok(IndexSet::empty()),
            IndexSetRepr::Singleton { index } => Ok(IndexSet::singleton(index)),
            IndexSetRepr::Range { start, count } => IndexSet::range(start, count),
            IndexSetRepr::Box {
                start,
                box_width,
                box_height,
                row_stride,
            } => IndexSet::boxed(start, box_width, box_height, row_stride),
            IndexSetRepr::List { indices } => Ok(IndexSet::list(indices)),
            IndexSetRepr::HashList { indices } => Ok(IndexSet::hash_list(indices)),
        }
    }
}
