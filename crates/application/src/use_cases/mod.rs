pub mod dns;

pub use dns::{AnswerSource, DnsAnswer, HandleDnsQueryUseCase};
