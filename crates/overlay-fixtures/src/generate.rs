use std::{io::BufWriter, path::PathBuf};

use log::{debug, info, LevelFilter};
use overlay_fixtures_core::{
    sets::FixtureSet, source::RandomSource, write_fixture, writer::create_output, FixtureError,
    PageSize,
};

use crate::reporter::ProgressBarReporter;

const WRITE_BUFFER_SIZE: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub page_size: PageSize,
    pub source: RandomSource,
}

/// Writes every fixture of `set` into the output directory, one after another.
///
/// Stops at the first failure. Files already written, and the partial file, are left in place.
pub fn generate(set: &dyn FixtureSet, options: &GenerateOptions) -> Result<(), FixtureError> {
    let page_size = options.page_size;
    let total_size = set.total_size(page_size)?;

    debug!(
        "Generating {} fixture set from {:?}",
        set.set_name(),
        options.source
    );

    info!(
        "using page size {} bytes with total size {} bytes ({} mB)",
        page_size,
        total_size,
        total_size / 1024 / 1024
    );

    let should_print_progress = log::max_level() >= LevelFilter::Info;

    for (stream, fixture) in (0u64..).zip(set.fixtures()) {
        info!("creating '{}'", fixture.file_name);

        let path = options.output_dir.join(fixture.file_name);
        let writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, create_output(&path)?);

        if should_print_progress {
            let mut reporter = ProgressBarReporter::new(fixture.file_name, total_size, writer);
            let outcome = write_fixture(
                fixture.content,
                &options.source,
                stream,
                &mut reporter,
                page_size,
                total_size,
            );
            reporter.finish(outcome)?;
        } else {
            write_fixture(
                fixture.content,
                &options.source,
                stream,
                writer,
                page_size,
                total_size,
            )?;
        }
    }

    Ok(())
}
