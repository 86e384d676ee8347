use crate::GraphQLConfig;
use libgraphql_override::SchemaInput;
use std::path::Path;

type Result<T> = anyhow::Result<T>;

fn write(dir: &Path, file_name: &str, content: &str) -> Result<()> {
    std::fs::write(dir.join(file_name), content)?;
    Ok(())
}

mod parsing {
    use super::*;

    #[test]
    fn single_project_config() -> Result<()> {
        let config = GraphQLConfig::parse(r#"{
            "schemaPath": "schema.graphql",
            "extensions": {
                "endpoints": {},
                "override": [
                    { "schema": "a.graphql", "overrides": "b.graphql", "output": "c.graphql" }
                ]
            }
        }"#)?;

        let projects = config.projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].0, None);
        let jobs = config.override_jobs(Path::new("cfg/.graphqlconfig"))?;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].output, Path::new("cfg").join("c.graphql"));
        Ok(())
    }

    #[test]
    fn multi_project_config_keeps_project_order() -> Result<()> {
        let config = GraphQLConfig::parse(r#"{
            "projects": {
                "web": {
                    "extensions": {
                        "override": [
                            { "schema": "s", "overrides": "o", "output": "web.graphql" }
                        ]
                    }
                },
                "docs": {},
                "api": {
                    "extensions": {
                        "override": [
                            { "schema": "s", "overrides": "o", "output": "api1.graphql" },
                            { "schema": "s", "overrides": "o", "output": "api2.graphql" }
                        ]
                    }
                }
            }
        }"#)?;

        let names = config.projects().iter()
            .map(|(name, _)| name.unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["web", "docs", "api"]);

        let outputs = config.override_jobs(Path::new(".graphqlconfig"))?
            .into_iter()
            .map(|job| job.output)
            .collect::<Vec<_>>();
        assert_eq!(outputs, vec![
            Path::new("web.graphql"),
            Path::new("api1.graphql"),
            Path::new("api2.graphql"),
        ]);
        Ok(())
    }

    #[test]
    fn incomplete_jobs_are_rejected() -> Result<()> {
        let config = GraphQLConfig::parse(r#"{
            "projects": {
                "app": {
                    "extensions": {
                        "override": [{ "schema": "s", "output": "out.graphql" }]
                    }
                }
            }
        }"#)?;

        let err = match config.override_jobs(Path::new(".graphqlconfig")) {
            Ok(jobs) => panic!("Expected an error, found {jobs:?}"),
            Err(err) => format!("{err:#}"),
        };
        assert!(err.contains("project `app`"), "{err}");
        assert!(err.contains("`schema`, `overrides`, and `output`"), "{err}");
        Ok(())
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(GraphQLConfig::parse("{ \"projects\": ").is_err());
    }
}

mod files {
    use super::*;

    #[test]
    fn locate_searches_directories_in_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(GraphQLConfig::locate(dir.path()).is_err());

        write(dir.path(), ".graphqlconfig.json", "{}")?;
        assert_eq!(
            GraphQLConfig::locate(dir.path())?,
            dir.path().join(".graphqlconfig.json"),
        );

        write(dir.path(), ".graphqlconfig", "{}")?;
        assert_eq!(
            GraphQLConfig::locate(dir.path())?,
            dir.path().join(".graphqlconfig"),
        );

        let explicit = dir.path().join(".graphqlconfig.json");
        assert_eq!(GraphQLConfig::locate(explicit.as_path())?, explicit);
        assert!(GraphQLConfig::locate(dir.path().join("missing").as_path()).is_err());
        Ok(())
    }

    #[test]
    fn job_paths_resolve_against_the_config_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path(), "schema.graphql", "type User { id: ID! }")?;
        write(dir.path(), "overrides.graphql", "type User { name: String @create }")?;
        write(dir.path(), ".graphqlconfig", r#"{
            "extensions": {
                "override": [{
                    "schema": "schema.graphql",
                    "overrides": "overrides.graphql",
                    "output": "generated/app.graphql"
                }]
            }
        }"#)?;

        let config_path = GraphQLConfig::locate(dir.path())?;
        let jobs = GraphQLConfig::load(config_path.as_path())?
            .override_jobs(config_path.as_path())?;
        let [job] = jobs.as_slice() else {
            panic!("Expected one job, found {jobs:?}");
        };
        assert_eq!(job.schema, SchemaInput::Path(dir.path().join("schema.graphql")));
        assert_eq!(job.overrides, SchemaInput::Path(dir.path().join("overrides.graphql")));

        let mut jobs = jobs;
        let output = jobs.remove(0).run()?;
        assert_eq!(output, dir.path().join("generated").join("app.graphql"));
        assert!(std::fs::read_to_string(output)?.contains("name: String"));
        Ok(())
    }

    #[test]
    fn inline_sdl_is_accepted_in_jobs() -> Result<()> {
        let config = GraphQLConfig::parse(r#"{
            "extensions": {
                "override": [{
                    "schema": "type User { id: ID! }",
                    "overrides": "type User @remove",
                    "output": "out.graphql"
                }]
            }
        }"#)?;
        let jobs = config.override_jobs(Path::new(".graphqlconfig"))?;
        assert_eq!(jobs[0].schema, SchemaInput::Sdl("type User { id: ID! }".to_string()));
        Ok(())
    }
}
