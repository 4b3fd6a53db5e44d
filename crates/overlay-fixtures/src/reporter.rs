use std::{io::Stdout, time::Duration};

use overlay_fixtures_core::FixtureError;
use pbr::{ProgressBar, Units};

const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Progress bar for a single fixture file.
///
/// Writes pass through to `inner` and are counted on the bar, labelled with the fixture name.
/// The bar is only drawn as complete once the fixture was written in full.
pub struct ProgressBarReporter<T> {
    pb: ProgressBar<Stdout>,
    inner: T,
    file_name: String,
    written: u64,
    complete: bool,
}

impl<T> ProgressBarReporter<T>
where
    T: std::io::Write,
{
    pub fn new(file_name: &str, total_bytes: u64, inner: T) -> Self {
        let mut pb = ProgressBar::new(total_bytes);
        pb.set_units(Units::Bytes);
        pb.set_max_refresh_rate(Some(REFRESH_INTERVAL));
        pb.message(&format!("{} ", file_name));

        Self {
            pb,
            inner,
            file_name: file_name.to_string(),
            written: 0,
            complete: false,
        }
    }

    /// Ends the bar according to `outcome` and hands the outcome back.
    ///
    /// A failed fixture keeps the bar at the bytes actually written.
    pub fn finish(
        &mut self,
        outcome: Result<u64, FixtureError>,
    ) -> Result<u64, FixtureError> {
        match outcome {
            Ok(_) => {
                self.complete = true;
                self.pb.finish_println("");
            }
            Err(_) => {
                self.pb.message(&format!("{} failed ", self.file_name));
                self.pb.set_max_refresh_rate(None);
                self.pb.set(self.written);
                self.pb.is_finish = true;
                println!();
            }
        }

        outcome
    }

    /// Bytes accepted by the inner writer so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> std::io::Write for ProgressBarReporter<T>
where
    T: std::io::Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.written += written as u64;
        self.pb.add(written as _);
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
