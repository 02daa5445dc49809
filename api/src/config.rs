use std::env;
use std::time::Duration;

pub const DEFAULT_HEADLESS_SERVER_URL: &str =
    "https://headless-server-preview.sherlock-labs.testsystem.coremedia.io/";
pub const DEFAULT_SITE_ID: &str = "abffe57734feeee";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base address of the headless server; `/graphql` is appended for queries
    /// and picture URLs are anchored to it.
    pub headless_server_url: String,
    /// Site the article search is scoped to
    pub site_id: String,
    pub port: u16,
    /// Upper bound for one GraphQL round trip
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            headless_server_url: env::var("HEADLESS_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_HEADLESS_SERVER_URL.to_string()),
            site_id: env::var("HEADLESS_SITE_ID").unwrap_or_else(|_| DEFAULT_SITE_ID.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            fetch_timeout: Duration::from_secs(
                env::var("FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headless_server_url: DEFAULT_HEADLESS_SERVER_URL.to_string(),
            site_id: DEFAULT_SITE_ID.to_string(),
            port: DEFAULT_PORT,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}
