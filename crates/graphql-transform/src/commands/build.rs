use crate::config::BuildTarget;
use crate::config::Config;
use crate::config::DEFAULT_CONFIG_FILE_NAME;
use crate::file_discovery;
use crate::output_utils;
use crate::renderer::TemplateRenderer;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_transform::TemplateDataBuilder;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, clap::Args)]
pub(crate) struct BuildCmd {
    #[arg(
        default_value=DEFAULT_CONFIG_FILE_NAME,
        help="Path to the JSON config file describing the build targets.",
        long,
        short='c',
    )]
    config: PathBuf,

    #[arg(
        help="Only build the target(s) with this output path (relative to the \
             config file's directory). May be repeated.",
        long="target",
        name="OUTPUT_PATH",
    )]
    only_outputs: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for BuildCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = match Config::from_file(&self.config) {
            Ok(config) => config,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let selected_targets: Vec<&BuildTarget> =
            config.targets()
                .iter()
                .filter(|target| self.is_selected(target))
                .collect();

        if selected_targets.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No build targets in {:?} match {:?}.",
                output_utils::RED_X,
                self.config,
                self.only_outputs,
            ));
        }

        // A failing target does not stop the remaining targets from building.
        let mut failures = vec![];
        for target in &selected_targets {
            if let Err(e) = build_target(target) {
                log::error!("Failed to build {:?}: {e:#}", target.output());
                failures.push(format!("  * {}: {e:#}", target.output().display()));
            }
        }

        if failures.is_empty() {
            CommandResult::stdout(format_args!(
                "{} Built {} target(s).",
                output_utils::GREEN_CHECK,
                selected_targets.len(),
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{} {} of {} target(s) failed to build:\n{}",
                output_utils::RED_X,
                failures.len(),
                selected_targets.len(),
                failures.join("\n"),
            ))
        }
    }
}

impl BuildCmd {
    fn is_selected(&self, target: &BuildTarget) -> bool {
        if self.only_outputs.is_empty() {
            return true;
        }

        let config_dir = self.config.parent().unwrap_or(Path::new(""));
        self.only_outputs
            .iter()
            .any(|output| {
                target.output() == output
                    || target.output() == config_dir.join(output)
                    || target.output().ends_with(output)
            })
    }
}

/// Transform every document matched by `target` into one
/// [`TemplateData`](libgraphql_transform::TemplateData), render it, and
/// (over)write the target's output file.
pub(crate) fn build_target(target: &BuildTarget) -> anyhow::Result<()> {
    let build_start = Instant::now();
    log::info!(
        "Building {:?} using {:?}",
        target.output(),
        target.template(),
    );

    let renderer = TemplateRenderer::from_file(target.template())?;
    let file_paths = file_discovery::discover_files(target.schema_patterns())?;

    let mut builder = TemplateDataBuilder::new();
    for file_path in &file_paths {
        log::info!(" > adding: {file_path:?}");
        builder = builder.add_file(file_path)
            .with_context(|| format!("Failed to transform {file_path:?}"))?;
    }

    let rendered = renderer.render(&builder.build())?;
    if let Some(output_dir) = target.output().parent()
        && !output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory {output_dir:?}"))?;
    }
    std::fs::write(target.output(), rendered)
        .with_context(|| format!("Failed to write {:?}", target.output()))?;

    log::info!(
        "Built {:?} from {} file(s) in {:?}",
        target.output(),
        file_paths.len(),
        build_start.elapsed(),
    );
    Ok(())
}
