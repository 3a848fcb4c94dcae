//! Integration tests across shared-types, bc-compute and bc-block-validation

pub mod pipeline_flow;
pub mod wire_format;
