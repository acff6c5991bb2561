use anyhow::{Result, bail};
use clap::Parser;
use depenv_inspector::{
    DeploymentInspector, Inspector, ProcessEnv, json_output::ResolveJsonOutput, resolve,
};
use std::process;
use tracing::{Level, debug, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "depenv-inspect",
    about = "Resolve the deployment environment from a flag or an environment variable"
)]
struct Cli {
    /// Valid deployment environment name (repeatable).
    #[arg(long = "env", value_name = "NAME", required = true)]
    envs: Vec<String>,
    /// Explicit candidate; used when it is registered.
    #[arg(long)]
    name: Option<String>,
    /// Environment variable consulted when `--name` is absent or invalid.
    #[arg(long = "var", default_value = "MYAPP_ENV")]
    var: String,
    /// Treat an empty variable as unset even if "" was registered.
    #[arg(long)]
    reserve_empty: bool,
    /// Emit a JSON report on stdout.
    #[arg(long)]
    json: bool,
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn init_tracing(&self) {
        let level = if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    fn inspector(&self) -> DeploymentInspector {
        let inspector = DeploymentInspector::with_names(self.envs.iter().cloned());
        if self.reserve_empty {
            inspector.reserving_empty()
        } else {
            inspector
        }
    }
}

fn main() {
    let cli = Cli::parse();
    cli.init_tracing();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let inspector = cli.inspector();
    debug!(registered = ?inspector.names().collect::<Vec<_>>(), "registry ready");

    if let Some(name) = cli.name.as_deref()
        && let Err(err) = inspector.validate(name)
    {
        warn!(%err, var = %cli.var, "explicit name rejected, falling back to lookup");
    }

    let result = resolve(&inspector, cli.name.as_deref(), &cli.var, &ProcessEnv);
    if let Ok(resolved) = &result {
        info!(environment = %resolved.environment, source = ?resolved.source, "resolved");
    }

    if cli.json {
        let ok = result.is_ok();
        println!(
            "{}",
            ResolveJsonOutput::from_result(&inspector, result).into_string()
        );
        if !ok {
            process::exit(1);
        }
        return Ok(());
    }

    match result {
        Ok(resolved) => {
            println!("{}", resolved.environment);
            Ok(())
        }
        Err(err) => bail!(
            "could not determine the deployment environment from --name or ${}: {err}",
            cli.var
        ),
    }
}
