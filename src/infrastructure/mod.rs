//! Adapters for the domain ports: in-memory payment storage and the HTTP
//! client for the acquirer simulator.

pub mod in_memory;
pub mod simulator;
