use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use log::debug;
use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::FixtureError;

pub const DEFAULT_RANDOM_DEVICE: &str = "/dev/random";

const STREAM_SEED_STEP: u64 = 0x9e37_79b9_7f4a_7c15;

/// Where the bytes of random fixtures come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RandomSource {
    /// A device or file, read front to back
    Device(PathBuf),
    /// A seeded pseudo random generator, one reproducible stream per stream index
    Seeded(u64),
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::Device(PathBuf::from(DEFAULT_RANDOM_DEVICE))
    }
}

impl RandomSource {
    /// Opens a fresh stream from this source.
    ///
    /// `stream` only matters for seeded sources, where each index yields a different sequence.
    pub fn open(&self, stream: u64) -> Result<Box<dyn Read>, FixtureError> {
        match self {
            RandomSource::Device(path) => {
                debug!("Opening random source {}", path.display());
                let file = File::open(path).map_err(|source| FixtureError::OpenSource {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
            RandomSource::Seeded(seed) => {
                debug!("Using seeded random stream {:#x}/{}", seed, stream);
                Ok(Box::new(SeededStream::new(seed ^ stream.wrapping_mul(STREAM_SEED_STEP))))
            }
        }
    }
}

/// Endless reader over a seeded generator.
pub struct SeededStream {
    rng: StdRng,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Read for SeededStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.rng.fill_bytes(buf);
        Ok(buf.len())
    }
}
