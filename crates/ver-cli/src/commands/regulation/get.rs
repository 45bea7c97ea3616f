use ver_core::catalog;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn run(id: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let regulation = catalog::find_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("regulation '{id}' not found"))?;
    output(regulation, flags.format)
}
