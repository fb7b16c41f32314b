use anyhow::Result;
use clap::Parser;
use std::path::Path;

use relcut::config;
use relcut::release::{run_release, ReleasePaths};
use relcut::ui;
use relcut::version::VersionBump;

#[derive(clap::Parser)]
#[command(
    name = "relcut",
    about = "Bump the project version across manifest, lockfile, packaging recipe, and changelog"
)]
struct Args {
    #[arg(
        long,
        value_enum,
        default_value = "patch",
        help = "Version bump type (default: patch)"
    )]
    bump_type: BumpType,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum BumpType {
    Patch,
    Minor,
    Major,
}

impl From<BumpType> for VersionBump {
    fn from(bump: BumpType) -> Self {
        match bump {
            BumpType::Patch => VersionBump::Patch,
            BumpType::Minor => VersionBump::Minor,
            BumpType::Major => VersionBump::Major,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(None) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let paths = ReleasePaths::from_config(Path::new("."), &config);
    let today = chrono::Local::now().date_naive().to_string();

    match run_release(&paths, &args.bump_type.into(), &today) {
        Ok(version) => {
            println!("{}", version);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
