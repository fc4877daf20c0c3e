/// AWS service clients and configuration providers
pub mod config;
pub mod ses;

// Re-export service traits
pub use config::ConfigProvider;
pub use ses::RawEmailTransport;
