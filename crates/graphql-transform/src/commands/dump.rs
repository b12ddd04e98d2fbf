use crate::file_discovery;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_transform::TemplateDataBuilder;

#[derive(Debug, clap::Args)]
pub(crate) struct DumpCmd {
    #[arg(
        help="Print compact (single-line) JSON.",
        long,
    )]
    compact: bool,

    #[arg(
        help="Paths or glob patterns of the GraphQL documents to transform.",
        name="FILES_OR_GLOBS",
        required=true,
    )]
    patterns: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for DumpCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match file_discovery::discover_files(&self.patterns) {
            Ok(file_paths) => file_paths,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        log::debug!("Found {} GraphQL files to transform.", file_paths.len());

        let mut builder = TemplateDataBuilder::new();
        for file_path in &file_paths {
            builder = match builder.add_file(file_path) {
                Ok(builder) => builder,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to transform {file_path:?}: {e}",
                    output_utils::RED_X,
                )),
            };
        }

        let template_data = builder.build();
        let json =
            if self.compact {
                serde_json::to_string(&template_data)
            } else {
                serde_json::to_string_pretty(&template_data)
            };

        match json {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize template data: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
