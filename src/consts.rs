//! Global constants

// -- CLI defaults (test environment values)
pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "31949";
pub const DEFAULT_ACCESS_KEY: &str = "sgiamadmin";
pub const DEFAULT_SECRET_KEY: &str = "ldapadmin";

// -- Client settings
pub const ENDPOINT_SCHEME: &str = "http";
/// SigV4 still needs a region, even against a custom endpoint.
pub const SIGNING_REGION: &str = "us-east-1";
pub const CRED_PROVIDER_NAME: &str = "cli-args";
