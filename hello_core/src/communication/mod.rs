//! Zenoh integration for hello_bus
//!
//! - Session: one middleware session per process, opened from [`BusConfig`]
//! - Publisher: typed writer for one topic in one domain
//! - Subscriber: typed reader for one topic in one domain
//!
//! [`BusConfig`]: crate::config::BusConfig

pub mod publisher;
pub mod session;
pub mod subscriber;
pub mod traits;

pub use publisher::Publisher;
pub use session::BusSession;
pub use subscriber::Subscriber;
pub use traits::{SampleReader, SampleWriter};

/// Root of every key expression; the domain id follows it
pub const DOMAIN_PREFIX: &str = "domain";

/// Key expression for `topic` inside `domain_id`.
///
/// Participants in different domains never see each other's samples because
/// their key expressions differ in the domain segment. Whitespace runs in the
/// topic name collapse to a single `_`.
pub fn key_expr(domain_id: u32, topic: &str) -> String {
    let topic = topic.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}/{}/{}", DOMAIN_PREFIX, domain_id, topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_expr() {
        assert_eq!(key_expr(0, "Example HelloMessage"), "domain/0/Example_HelloMessage");
        assert_eq!(key_expr(42, "ChocolateTemperature"), "domain/42/ChocolateTemperature");
        assert_eq!(key_expr(1, "  spaced   out  "), "domain/1/spaced_out");
    }

    #[test]
    fn test_domains_are_disjoint() {
        assert_ne!(key_expr(0, "t"), key_expr(1, "t"));
    }
}
