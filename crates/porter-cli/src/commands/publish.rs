//! Handler for `porter publish`.

use miette::Result;

pub async fn exec(dry_run: bool, verbose: bool) -> Result<()> {
    let project_root = super::project_root()?;
    porter_ops::ops_publish::publish(&project_root, dry_run, verbose).await
}
