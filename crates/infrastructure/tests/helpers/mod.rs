pub mod dns_server_mock;
pub mod mock_transport;
pub mod records;

pub use dns_server_mock::{MockDnsServer, MockServerMode};
pub use mock_transport::{MockTransport, ServerReply};
pub use records::*;
