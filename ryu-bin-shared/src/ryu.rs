use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use console::{style, Term};
use serde::Serialize;

use ryu_lib::rmm::{self, RmmError};
use ryu_lib::{CheckResult, GameDef, ModDataChecker};

use crate::gamedir::{find_game_directory_steam, verify_game_dir};
use crate::srmm_release::{latest_srmm_version, version_gt};

#[derive(Parser)]
#[clap(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[clap(flatten)]
    check_args: Option<CheckArgs>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether Ryu Mod Manager is installed in the game directory.
    Rmm {
        /// Path to game main directory.
        #[clap(long)]
        game: Option<PathBuf>,
        /// Also look up the latest Shin Ryu Mod Manager release on GitHub.
        #[clap(long)]
        check_update: bool,
        /// Installed mod manager version to compare the latest release against.
        #[clap(long)]
        installed: Option<String>,
    },
    /// Move mods from the RMM mods folder into a managed mods directory.
    Import {
        /// Directory of the mod library to import into.
        dest: PathBuf,
        /// Path to game main directory.
        #[clap(long)]
        game: Option<PathBuf>,
        /// List what would be imported without moving anything.
        #[clap(long)]
        dry_run: bool,
        /// Skip the confirmation prompt.
        #[clap(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Path to folder of mod to check.
    modpath: PathBuf,
    /// Normalize a wrapper-folder layout in place before checking.
    #[clap(long)]
    fix: bool,
    /// Output the report in JSON format.
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    game: &'a str,
    modpath: String,
    result: CheckResult,
    offenders: Vec<String>,
}

/// Run the main ryu application for one game definition.
pub fn run(
    def: &'static GameDef,
    current_version: &'static str,
    bin_name: &'static str,
) -> Result<()> {
    use clap::{CommandFactory, FromArgMatches};

    let matches = Cli::command().version(current_version).name(bin_name).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    match cli.command {
        Some(Commands::Rmm { game, check_update, installed }) => {
            cmd_rmm(def, game, check_update, installed.as_deref())
        }
        Some(Commands::Import { dest, game, dry_run, yes }) => {
            cmd_import(def, &dest, game, dry_run, yes)
        }
        None => {
            let Some(args) = cli.check_args else {
                bail!("Please supply the path to a mod folder to check.");
            };
            cmd_check(def, &args)
        }
    }
}

fn cmd_check(def: &'static GameDef, args: &CheckArgs) -> Result<()> {
    eprintln!("Checking mod layout for {}.", def.name);

    let checker = ModDataChecker::new(def.valid_paths);
    let mut result = checker.check(&args.modpath)?;

    if args.fix && result == CheckResult::Fixable {
        checker.fix(&args.modpath)?;
        eprintln!("Moved the wrapper folder's contents up one level.");
        result = checker.check(&args.modpath)?;
    }

    let offenders = if result == CheckResult::Invalid {
        checker.offending_entries(&args.modpath)?
    } else {
        Vec::new()
    };

    if args.json {
        let report = CheckReport {
            game: def.short_name,
            modpath: args.modpath.display().to_string(),
            result,
            offenders: offenders.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match result {
            CheckResult::Valid => {
                eprintln!("The mod layout looks {}.", style("valid").green());
            }
            CheckResult::Fixable => {
                eprintln!(
                    "The mod content is wrapped in an extra folder. Rerun with --fix to normalize it."
                );
            }
            CheckResult::Invalid => {
                eprintln!("The mod layout is {}.", style("invalid").red());
                for name in &offenders {
                    eprintln!("  unrecognized top-level entry: {name}");
                }
            }
        }
    }

    if result == CheckResult::Invalid {
        bail!("mod layout does not match the {} data directory", def.name);
    }
    Ok(())
}

fn cmd_rmm(
    def: &'static GameDef,
    game: Option<PathBuf>,
    check_update: bool,
    installed: Option<&str>,
) -> Result<()> {
    let game_dir = locate_game(def, game)?;
    let status = rmm::rmm_status(def, &game_dir);

    report_file(def.rmm_exe, status.manager);
    report_file(rmm::PARLESS_ASI, status.parless);

    if check_update {
        let latest = latest_srmm_version().context("Could not look up the latest release")?;
        match installed {
            Some(installed) if version_gt(&latest, installed) => {
                eprintln!("Shin Ryu Mod Manager v{latest} is available (installed: v{installed}).");
            }
            Some(installed) => {
                eprintln!("Shin Ryu Mod Manager v{installed} is up to date.");
            }
            None => eprintln!("Latest Shin Ryu Mod Manager release: v{latest}."),
        }
    }
    Ok(())
}

fn report_file(name: &str, present: bool) {
    if present {
        eprintln!("{name}: {}", style("installed").green());
    } else {
        eprintln!("{name}: {}", style("missing").red());
    }
}

fn cmd_import(
    def: &'static GameDef,
    dest: &Path,
    game: Option<PathBuf>,
    dry_run: bool,
    yes: bool,
) -> Result<()> {
    let game_dir = locate_game(def, game)?;

    let mods = match rmm::importable_mods(def, &game_dir) {
        Ok(mods) => mods,
        Err(RmmError::ModsDirMissing(dir)) => {
            eprintln!("There is no RMM mods folder at {}. Nothing to import.", dir.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    if mods.is_empty() {
        eprintln!("No mods to import.");
        return Ok(());
    }

    eprintln!("Found {} mod(s) in the RMM mods folder:", mods.len());
    for path in &mods {
        eprintln!("  {}", path.file_name().unwrap_or(path.as_os_str()).to_string_lossy());
    }

    if dry_run {
        let names = rmm::import_mods(def, &game_dir, dest, true)?;
        eprintln!("Would import {} mod(s) into {}.", names.len(), dest.display());
        return Ok(());
    }

    if !yes {
        let term = Term::stderr();
        eprint!("Import {} mod(s) into {}? [y/N] ", mods.len(), dest.display());
        let answer = term.read_char()?;
        eprintln!();
        if answer != 'y' && answer != 'Y' {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let names = rmm::import_mods(def, &game_dir, dest, false)?;
    eprintln!("Imported {} mod(s) into {}.", names.len(), dest.display());
    Ok(())
}

fn locate_game(def: &'static GameDef, game: Option<PathBuf>) -> Result<PathBuf> {
    let game_dir = match game {
        Some(dir) => dir,
        None => find_game_directory_steam(def)
            .context("Cannot find the game directory. Please supply it as the --game option.")?,
    };
    eprintln!("Using {} directory: {}", def.name, game_dir.display());
    verify_game_dir(def, &game_dir)?;
    Ok(game_dir)
}
