use std::process::ExitCode;

use overlay_fixtures_core::sets::LargeSet;

fn main() -> ExitCode {
    overlay_fixtures::run(&LargeSet)
}
