//! Read a single value from the transient secrets file

use anyhow::Result;
use clap::Args;

use super::secrets_file;
use crate::cli::GlobalOptions;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Secret key to print
    pub key: String,
}

pub fn run(args: GetArgs, global: &GlobalOptions) -> Result<()> {
    let value = secrets_file(global).get(&args.key)?;
    println!("{}", value);
    Ok(())
}
