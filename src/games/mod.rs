//! Game implementations.

pub mod pentago;
