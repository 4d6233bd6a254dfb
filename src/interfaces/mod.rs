//! Transport edges of the service. The only edge is HTTP.

pub mod http;
