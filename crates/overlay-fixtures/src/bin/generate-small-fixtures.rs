use std::process::ExitCode;

use overlay_fixtures_core::sets::SmallSet;

fn main() -> ExitCode {
    overlay_fixtures::run(&SmallSet)
}
