use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use pldcli::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Download a playlist as tagged audio files
    Download(DownloadOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Download a playlist as tagged audio files")]
pub struct DownloadOptions {
    /// Playlist URL (prompted for interactively when omitted)
    pub url: Option<String>,

    /// Skip embedding metadata tags into the downloaded files
    #[clap(long)]
    pub no_meta: bool,

    /// Skip writing the playlist manifest
    #[clap(long)]
    pub no_m3u: bool,

    /// Only write the playlist manifest, skip all downloads
    #[clap(long)]
    pub m3u_only: bool,

    /// Number of concurrent download workers
    #[clap(long, default_value_t = 5)]
    pub workers: usize,

    /// Read playlist metadata from a cached snapshot file instead of fetching
    #[clap(long)]
    pub snapshot: Option<PathBuf>,

    /// Playlist title override for snapshot-driven runs
    #[clap(long)]
    pub title: Option<String>,

    /// Directory to place the playlist folder and manifest in
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Download(opt) => {
            cli::download(
                opt.url,
                opt.snapshot,
                opt.title,
                opt.output,
                opt.workers,
                !opt.no_meta,
                !opt.no_m3u,
                opt.m3u_only,
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
