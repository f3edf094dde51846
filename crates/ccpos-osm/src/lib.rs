pub mod client;
pub mod error;
pub mod parse;
pub mod types;

pub use client::OsmClient;
pub use error::OsmError;
pub use parse::parse_node_xml;
pub use types::OsmNode;
