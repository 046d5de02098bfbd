//! Integration test modules

mod containers;
mod enumeration;
mod pipelines;
