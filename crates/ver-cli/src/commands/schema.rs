use ver_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `vrd schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let schema = lookup(&registry, &args.type_name)?;
    output(schema, flags.format)
}

fn lookup<'a>(registry: &'a SchemaRegistry, name: &str) -> anyhow::Result<&'a serde_json::Value> {
    registry.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        )
    })
}
