use anyhow::{bail, Result};

use ecomseed_core::check::check_files;

use crate::args::CheckArgs;

pub fn run(args: &CheckArgs) -> Result<()> {
    let report = check_files(&args.dir)?;
    println!("{}", report.summary());

    if !report.is_clean() {
        bail!("{} integrity violation(s)", report.violations.len());
    }
    Ok(())
}
