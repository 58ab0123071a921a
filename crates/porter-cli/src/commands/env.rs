//! Handler for `porter env`.

use miette::Result;

pub fn exec(reveal: bool) -> Result<()> {
    let project_root = super::project_root()?;
    porter_ops::ops_env::env(&project_root, reveal)
}
