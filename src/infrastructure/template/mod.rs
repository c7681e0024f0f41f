//! Template sources
//!
//! Only the remote sparse-clone source is provided; the template tree is
//! always fetched fresh from the configured repository.

mod git_sparse;

pub use git_sparse::{GitSparseTemplate, CLONE_DIR_NAME};
