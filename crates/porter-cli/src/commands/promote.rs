//! Handler for `porter promote`.

use miette::Result;

pub async fn exec() -> Result<()> {
    let project_root = super::project_root()?;
    porter_ops::ops_promote::promote(&project_root).await
}
