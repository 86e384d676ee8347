use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::GraphQLConfig;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ConfigCmd {
    #[arg(
        help="Path to a `.graphqlconfig` file, or to the directory containing \
             one. Defaults to the current directory.",
        long,
        short='c',
    )]
    pub(crate) config: Option<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ConfigCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let search_from = self.config.unwrap_or_else(|| PathBuf::from("."));
        let config_path = match GraphQLConfig::locate(search_from.as_path()) {
            Ok(config_path) => config_path,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Loading override jobs from {config_path:#?}.");

        let jobs = match GraphQLConfig::load(config_path.as_path())
            .and_then(|config| config.override_jobs(config_path.as_path())) {
            Ok(jobs) => jobs,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        if jobs.is_empty() {
            log::warn!(
                "{config_path:#?} lists no `extensions.override` jobs; nothing \
                to do."
            );
        }

        let mut saved = Vec::with_capacity(jobs.len());
        for job in jobs {
            match job.run() {
                Ok(output) => saved.push(format!(
                    "{} new schema saved to: {}",
                    output_utils::GREEN_CHECK,
                    output.display(),
                )),

                Err(err) => return CommandResult::partial_failure(
                    saved,
                    format_args!("{} {err:#}", output_utils::RED_X),
                ),
            }
        }

        CommandResult::stdout(format_args!("{}", saved.join("\n")))
    }
}
