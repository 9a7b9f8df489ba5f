//! Word inflection client.
//!
//! Looks up the six grammatical case forms of a word from a remote
//! inflection service and caches successful answers in memory.
//!
//! ```no_run
//! use inflect_client::cache::{CacheConfig, CachedInflectionClient};
//! use inflect_client::inflection::{InflectionClient, InflectionConfig};
//!
//! # async fn demo() -> Result<(), inflect_client::inflection::InflectionError> {
//! let client = InflectionClient::new(InflectionConfig::default())?;
//! let inflector = CachedInflectionClient::new(client, &CacheConfig::default());
//!
//! let forms = inflector.lookup("Москва").await;
//! assert_eq!(forms.as_slice().len(), 6);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod domain;
pub mod inflection;
