//! rootwalk Application Layer: ports and the query coordination use case.
pub mod ports;
pub mod use_cases;
