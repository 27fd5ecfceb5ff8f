use anyhow::Result;
use clap::Parser;
use std::fs;

use chronon_pack::warning::PackagingWarning;
use chronon_pack::{config, descriptor, release, requirements, ui, version};

#[derive(clap::Parser)]
#[command(
    name = "chronon-pack",
    about = "Generate the distribution descriptor for the Chronon client library"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Override the upstream version string")]
    version_str: Option<String>,

    #[arg(short, long, help = "Override the source branch name")]
    branch: Option<String>,

    #[arg(short, long, help = "Write the descriptor to this path instead of stdout")]
    output: Option<String>,

    #[arg(long, help = "Print the canonical version only and exit")]
    show_version: bool,

    #[arg(long, help = "Preview the descriptor without writing anything")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("chronon-pack {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve ambient release identifiers and normalize once, up front
    let inputs = release::resolve(
        args.version_str.as_deref(),
        args.branch.as_deref(),
        &config.release,
    );
    let canonical = version::normalize(&inputs.version, &inputs.branch);

    if args.show_version {
        println!("{}", canonical);
        return Ok(());
    }

    ui::display_version_resolution(&inputs.version, &inputs.branch, &canonical);

    if !version::is_plain_release(&canonical) {
        ui::display_warning(&PackagingWarning::NonReleaseVersion {
            version: canonical.clone(),
        });
    }

    // Long description: fall back to the short description if missing
    let long_description = match fs::read_to_string(&config.package.readme) {
        Ok(text) => Some(text),
        Err(_) => {
            ui::display_warning(&PackagingWarning::MissingLongDescription {
                path: config.package.readme.clone(),
            });
            None
        }
    };

    // Base dependency declarations
    let install_requires = match requirements::read_requirements(&config.requirements.base) {
        Ok(specs) => specs,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    if install_requires.is_empty() {
        ui::display_warning(&PackagingWarning::EmptyRequirements {
            path: config.requirements.base.clone(),
        });
    }

    let package_descriptor =
        descriptor::build_descriptor(&config, canonical, long_description, install_requires);
    let rendered = match descriptor::render_descriptor(&package_descriptor) {
        Ok(text) => text,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.dry_run {
        ui::display_status("Dry run - descriptor not written:");
        println!("{}", rendered);
        return Ok(());
    }

    match args.output {
        Some(path) => {
            fs::write(&path, &rendered)?;
            ui::display_success(&format!(
                "Wrote descriptor for {} {} to {}",
                package_descriptor.name, package_descriptor.version, path
            ));
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}
