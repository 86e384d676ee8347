use crate::OverrideJob;
use anyhow::Context;
use indexmap::IndexMap;
use libgraphql_override::SchemaInput;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;

/// File names searched for, in order, when a directory is given.
pub(crate) const CONFIG_FILE_NAMES: [&str; 2] = [
    ".graphqlconfig",
    ".graphqlconfig.json",
];

/// The subset of a `.graphqlconfig` file this tool reads.
///
/// Either a single project at the top level, or a `projects` map of named
/// projects. Override jobs live under each project's `extensions.override`:
///
/// ```json
/// {
///   "projects": {
///     "app": {
///       "extensions": {
///         "override": [
///           {
///             "schema": "schema.graphql",
///             "overrides": "overrides.graphql",
///             "output": "generated/app.graphql"
///           }
///         ]
///       }
///     }
///   }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GraphQLConfig {
    #[serde(default)]
    pub projects: Option<IndexMap<String, ProjectConfig>>,

    #[serde(flatten)]
    pub root: ProjectConfig,
}
impl GraphQLConfig {
    /// Returns `path` if it's a file, or the first config file found inside
    /// it if it's a directory.
    pub(crate) fn locate(path: &Path) -> anyhow::Result<PathBuf> {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        if !path.is_dir() {
            anyhow::bail!("No config file or directory exists at `{}`", path.display());
        }

        CONFIG_FILE_NAMES.iter()
            .map(|file_name| path.join(file_name))
            .find(|candidate| candidate.is_file())
            .with_context(|| format!(
                "No {} file found in `{}`",
                CONFIG_FILE_NAMES.join(" or "),
                path.display(),
            ))
    }

    pub(crate) fn load(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read `{}`", config_path.display()))?;
        Self::parse(content.as_str())
            .with_context(|| format!("Failed to parse `{}`", config_path.display()))
    }

    pub(crate) fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Named projects in file order; a single-project config yields one
    /// unnamed project.
    pub(crate) fn projects(&self) -> Vec<(Option<&str>, &ProjectConfig)> {
        match &self.projects {
            Some(projects) => projects.iter()
                .map(|(name, project)| (Some(name.as_str()), project))
                .collect(),
            None => vec![(None, &self.root)],
        }
    }

    /// Every override job across all projects. Relative paths resolve
    /// against the directory containing `config_path`.
    pub(crate) fn override_jobs(&self, config_path: &Path) -> anyhow::Result<Vec<OverrideJob>> {
        let base_dir = config_path.parent().unwrap_or(Path::new(""));
        let mut jobs = vec![];
        for (project_name, project) in self.projects() {
            let Some(raw_jobs) = &project.extensions.override_jobs else {
                log::trace!("Project {project_name:?} has no override jobs.");
                continue;
            };
            for (index, raw_job) in raw_jobs.iter().enumerate() {
                jobs.push(raw_job.to_job(base_dir).with_context(|| format!(
                    "Invalid override job #{index} in {}",
                    project_name.map_or_else(
                        || "the config".to_string(),
                        |name| format!("project `{name}`"),
                    ),
                ))?);
            }
        }
        Ok(jobs)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProjectConfig {
    #[serde(default)]
    pub extensions: ProjectExtensions,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProjectExtensions {
    #[serde(default, rename = "override")]
    pub override_jobs: Option<Vec<RawOverrideJob>>,
}

/// An override job as written in the config, before validation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawOverrideJob {
    pub output: Option<String>,
    pub overrides: Option<String>,
    pub schema: Option<String>,
}
impl RawOverrideJob {
    fn to_job(&self, base_dir: &Path) -> anyhow::Result<OverrideJob> {
        let (Some(schema), Some(overrides), Some(output)) =
            (&self.schema, &self.overrides, &self.output) else {
            anyhow::bail!(
                "`schema`, `overrides`, and `output` must all be provided for \
                each override job"
            );
        };

        Ok(OverrideJob {
            output: base_dir.join(output),
            overrides: job_input(base_dir, overrides),
            schema: job_input(base_dir, schema),
        })
    }
}

fn job_input(base_dir: &Path, text: &str) -> SchemaInput {
    let candidate = base_dir.join(text.trim());
    if !text.contains('\n') && candidate.is_file() {
        SchemaInput::Path(candidate)
    } else {
        SchemaInput::infer(text)
    }
}
