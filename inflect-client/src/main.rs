use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use inflect_client::cache::{CacheConfig, CachedInflectionClient};
use inflect_client::inflection::{InflectionClient, InflectionConfig};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let words: Vec<String> = std::env::args().skip(1).collect();
    if words.is_empty() {
        eprintln!("usage: inflect <word>...");
        return ExitCode::from(2);
    }

    let mut config = InflectionConfig::default();
    if let Ok(base_url) = std::env::var("INFLECT_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let client = match InflectionClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create inflection client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let inflector = CachedInflectionClient::new(client, &CacheConfig::default());

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let forms = inflector.lookup(word).await;
        for (case, form) in forms.iter() {
            println!("{case}\t{form}");
        }
    }

    ExitCode::SUCCESS
}
