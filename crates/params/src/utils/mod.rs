//! Constants shared by utility algorithms

pub mod hash;
