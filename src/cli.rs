// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::WrapErr;

use crate::config::consts::{BASE_URL, DEFAULT_ARCHIVE, DEFAULT_SUBJECT_ID, TIMEOUT_SECS};
use crate::config::options::{check_subject_id, AppOptions, FilenameTemplate, ProjectionKind, TableFormat};
use crate::progress::{Output, Progress};
use crate::report::Summary;
use crate::runner;

#[derive(Parser, Debug)]
#[command(name = "wa_scrape", version, about = "World Aquatics athlete results → JSON archive + table")]
pub struct Cli {
    /// Append debug logs to .store/debug.log
    #[arg(long, global = true)]
    pub debug: bool,

    /// Defaults to `fetch` with default arguments
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download an athlete's results, archive the raw payload and write a table
    Fetch(FetchArgs),
    /// Rebuild a table from a previously written archive (no network)
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Athlete id, as in the athlete page URL
    #[arg(default_value = DEFAULT_SUBJECT_ID, value_parser = parse_subject_id)]
    pub subject_id: String,

    /// Request timeout in seconds; 0 waits forever
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Archive file name template; `{name}` is the athlete name
    #[arg(long)]
    pub archive_name: Option<String>,

    #[command(flatten)]
    pub export: ExportArgs,
}

fn parse_subject_id(arg: &str) -> Result<String, String> {
    check_subject_id(arg).map(|id| s!(id)).map_err(|e| e.to_string())
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            subject_id: s!(DEFAULT_SUBJECT_ID),
            timeout: TIMEOUT_SECS,
            base_url: s!(BASE_URL),
            archive_name: None,
            export: ExportArgs::default(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Archive written by `fetch`
    #[arg(default_value = DEFAULT_ARCHIVE)]
    pub archive: PathBuf,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Directory for every output file
    #[arg(short = 'o', long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Table format [fetch: xlsx, replay: csv]
    #[arg(long, value_enum)]
    pub format: Option<TableFormat>,

    /// Column set [fetch: full, replay: minimal]
    #[arg(long, value_enum)]
    pub projection: Option<ProjectionKind>,

    /// Table file name template; `{name}` is the athlete name
    #[arg(long)]
    pub table_name: Option<String>,
}

impl ExportArgs {
    fn apply(self, opts: &mut AppOptions) {
        let export = &mut opts.export;
        // Default derive leaves an empty path
        if !self.out_dir.as_os_str().is_empty() {
            export.out_dir = self.out_dir;
        }
        if let Some(f) = self.format { export.format = f; }
        if let Some(p) = self.projection { export.projection = p; }
        export.table_name = self.table_name.map(FilenameTemplate::new);
    }
}

impl FetchArgs {
    pub fn into_options(self) -> (String, AppOptions) {
        let mut opts = AppOptions::for_fetch();
        opts.fetch.base_url = self.base_url;
        opts.fetch.timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        if let Some(t) = self.archive_name {
            opts.export.archive_name = FilenameTemplate::new(t);
        }
        self.export.apply(&mut opts);
        (self.subject_id, opts)
    }
}

impl ReplayArgs {
    pub fn into_options(self) -> (PathBuf, AppOptions) {
        let mut opts = AppOptions::for_replay();
        self.export.apply(&mut opts);
        (self.archive, opts)
    }
}

/// Prints progress and the final summary to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn file_written(&mut self, what: Output, path: &Path) {
        match what {
            Output::Archive => println!("原始数据已保存至 {}", path.display()),
            Output::Table => println!("数据已保存至 {}", path.display()),
        }
    }

    fn finish(&mut self, summary: &Summary) {
        println!("\n{summary}");
    }
}

/// Run one parsed command line. Parsing stays with the caller so usage
/// errors keep their own exit code.
pub fn run(cli: Cli) -> color_eyre::Result<()> {
    crate::log::init(cli.debug).wrap_err("could not set up logging")?;

    let mut progress = ConsoleProgress;
    match cli.command.unwrap_or_else(|| Command::Fetch(FetchArgs::default())) {
        Command::Fetch(args) => {
            let (subject_id, opts) = args.into_options();
            runner::run_fetch(&subject_id, &opts, Some(&mut progress))?;
        }
        Command::Replay(args) => {
            let (archive, opts) = args.into_options();
            runner::run_replay(&archive, &opts, Some(&mut progress))?;
        }
    }
    Ok(())
}
