#![warn(clippy::indexing_slicing)]

//! Building blocks of the vick Service controller: the `Service` custom resource, the labels,
//! selector and names of the objects generated for it, and the generated objects themselves.

pub mod constants;
pub mod crd;
pub mod manifest;
pub mod resources;
