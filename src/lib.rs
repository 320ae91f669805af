//! WTP Cache - "Who's That Pokemon?" artwork cache
//!
//! Picks a random creature from a local SQLite lookup table and returns paths
//! to a shrouded and an unshrouded version of its artwork. The pair is
//! generated once per creature name and reused from disk afterwards.

pub mod artwork;
pub mod cache_key;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod selector;
pub mod shroud;

pub use artwork::{pad_id, ArtworkSource, HttpArtwork};
pub use cache_key::cache_key;
pub use config::Config;
pub use error::{FetchError, Result, WtpError};
pub use models::{ArtifactPair, Record, ResultRecord};
pub use resolver::CacheResolver;
pub use selector::Selector;
pub use shroud::{ShroudedImages, Shrouder, Silhouette};

use rand::Rng;
use std::collections::BTreeSet;

/// Pick a random creature from `generations` and resolve its artwork pair
pub fn get_creature_and_images<A, S, R>(
    selector: &Selector,
    resolver: &CacheResolver<A, S>,
    generations: &BTreeSet<i64>,
    rng: &mut R,
) -> Result<ResultRecord>
where
    A: ArtworkSource,
    S: Shrouder,
    R: Rng,
{
    let record = selector.pick(generations, rng)?;
    log::debug!("Selected {} ({})", record.id, record.group);
    let artifacts = resolver.resolve(&record)?;
    Ok(ResultRecord::new(record, artifacts))
}
