//! Core of the STRATSEG brokerage reporting tools: loads the client/policy
//! roster and the sales-pipeline workbook, and turns filter/search inputs
//! into serializable view models for the presentation layer.

pub mod dashboard;
pub mod pipeline;
pub mod roster;
