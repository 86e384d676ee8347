use anyhow::Context;
use libgraphql_override::OverrideResolver;
use libgraphql_override::SchemaInput;
use std::path::PathBuf;

/// One `schema + overrides -> output` run.
#[derive(Debug, PartialEq)]
pub(crate) struct OverrideJob {
    pub output: PathBuf,
    pub overrides: SchemaInput,
    pub schema: SchemaInput,
}
impl OverrideJob {
    /// Resolves the merged schema, prints it, and writes it to `output`
    /// (creating missing parent directories). Returns the output path.
    pub(crate) fn run(self) -> anyhow::Result<PathBuf> {
        log::debug!("Applying overrides for {:#?}.", self.output);
        let merged = OverrideResolver::new(self.schema, self.overrides)
            .and_then(OverrideResolver::resolve)
            .with_context(|| format!(
                "Failed to build the schema for `{}`",
                self.output.display(),
            ))?;

        if let Some(parent) = self.output.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir() {
            log::trace!("Creating output directory {parent:#?}.");
            std::fs::create_dir_all(parent).with_context(|| format!(
                "Failed to create the output directory `{}`",
                parent.display(),
            ))?;
        }

        std::fs::write(self.output.as_path(), merged.to_string())
            .with_context(|| format!(
                "Failed to write `{}`",
                self.output.display(),
            ))?;

        Ok(self.output)
    }
}
