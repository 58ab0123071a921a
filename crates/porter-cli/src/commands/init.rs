//! Handler for `porter init`.

use miette::Result;

pub fn exec() -> Result<()> {
    let cwd = std::env::current_dir().map_err(porter_util::errors::PorterError::Io)?;
    porter_ops::ops_init::init(&cwd)
}
