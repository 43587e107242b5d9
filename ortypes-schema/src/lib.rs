//! # ortypes Schema
//!
//! Type definitions for ORT format model value types.
//!
//! This crate provides:
//! - Tensor element type enumeration with serialized values
//! - Decoded type descriptors (tensor, map, sequence)
//! - Validation of wire-shaped descriptors from a model buffer
//! - Value name registry for descriptor lookup

pub mod error;
pub mod raw;
pub mod registry;
pub mod types;

pub use error::SchemaError;
pub use raw::{RawTable, RawTypeInfo};
pub use registry::{TypeInfoLookup, ValueRegistry};
pub use types::{TensorDataType, TypeInfo};
