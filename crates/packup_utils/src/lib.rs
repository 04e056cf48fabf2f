mod indexmap;
mod path_ext;

pub use crate::{
  indexmap::{FxIndexMap, FxIndexSet},
  path_ext::PathExt,
};
