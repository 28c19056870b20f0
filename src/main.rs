use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser};
use tracing::debug;

use traviscli::boundary::BoundaryWarning;
use traviscli::build_source::FileBuildSource;
use traviscli::cli::{run_update_workflow, UpdateWorkflowArgs};
use traviscli::domain::BumpFlags;
use traviscli::preferences::{self, PreferencesLocation};
use traviscli::{observability, ui};

#[derive(clap::Parser)]
#[command(
    name = "traviscli",
    version,
    about = "Keep a project's version file in step with its latest Travis CI build number"
)]
struct Args {
    #[arg(short, long, default_value_t = 1, help = "Number of builds to consider")]
    count: usize,

    #[arg(short, long, help = "Repository slug, something like hasii2011/PyUt")]
    repo_slug: String,

    #[arg(
        short,
        long,
        default_value = "travisci/resources/version.txt",
        help = "Location of the version text file"
    )]
    file: PathBuf,

    #[arg(short, long, value_name = "FILE", help = "TOML file of build records exported from Travis CI")]
    builds: PathBuf,

    #[arg(long, value_name = "N", help = "Set the major version (resets minor and patch)")]
    major: Option<u32>,

    #[arg(long, value_name = "N", help = "Set the minor version (resets patch)")]
    minor: Option<u32>,

    #[arg(long, value_name = "N", help = "Set the patch version")]
    patch: Option<u32>,

    #[arg(long, value_name = "TOKEN", help = "Store a Travis CI API token in the preferences file")]
    set_token: Option<String>,

    #[arg(long, value_name = "PATH", help = "Use this preferences file instead of the default")]
    preferences: Option<PathBuf>,

    #[arg(long, help = "Show the new version without writing it")]
    dry_run: bool,

    #[arg(short, long, action = ArgAction::Count, help = "More logging (-v debug, -vv trace)")]
    verbose: u8,

    #[arg(short, long, help = "Only log errors")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    observability::init_logging(args.quiet, args.verbose);

    let bump = BumpFlags {
        major: args.major,
        minor: args.minor,
        patch: args.patch,
    };
    if let Err(e) = bump.into_request() {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    let location = match args.preferences {
        Some(path) => preferences::set_location(PreferencesLocation::at(path))?,
        None => preferences::determine_location(),
    };
    debug!(path = %location.path().display(), "preferences location");

    {
        let mut store = preferences::instance()?
            .lock()
            .map_err(|_| anyhow!("preferences store is poisoned"))?;

        if let Some(token) = args.set_token.as_deref() {
            store
                .set_travisci_api_token(token)
                .context("Failed to store Travis CI API token")?;
            ui::display_success("Stored Travis CI API token");
        }

        if store.has_placeholder_token() {
            ui::display_boundary_warning(&BoundaryWarning::PlaceholderToken {
                preferences_path: location.path().display().to_string(),
            });
        }
    }

    let source = match FileBuildSource::open(&args.builds) {
        Ok(source) => source,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = UpdateWorkflowArgs {
        repo_slug: args.repo_slug,
        build_count: args.count,
        version_file: args.file,
        bump,
        dry_run: args.dry_run,
    };
    ui::display_status(&format!(
        "Reconciling {} with builds of {}",
        workflow_args.version_file.display(),
        workflow_args.repo_slug
    ));

    let result = match run_update_workflow(&workflow_args, &source) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Version file not updated: {}", e));
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_version_change(&result.old_version, &result.new_version);

    if result.written {
        ui::display_success(&format!(
            "Updated {}",
            workflow_args.version_file.display()
        ));
    } else {
        ui::display_status("Dry run: version file left unchanged");
    }

    Ok(())
}
