//! Delete the transient secrets file

use anyhow::Result;

use super::secrets_file;
use crate::cli::GlobalOptions;
use crate::output;

pub fn run(global: &GlobalOptions) -> Result<()> {
    let outcome = sls_secrets_lifecycle::cleanup(&secrets_file(global))?;
    output::outcome(&outcome);
    Ok(())
}
