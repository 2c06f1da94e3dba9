//! CLI argument structs for all subcommands.

use clap::{Args, Parser};

/// Where the repository snapshot comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SnapshotArgs {
    /// Directory to load as the snapshot (default: current directory)
    #[arg(short, long, conflicts_with = "snapshot")]
    pub dir: Option<String>,

    /// JSON file holding an array of {name, status, text} entries
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Include hidden files when walking --dir
    #[arg(long)]
    pub hidden: bool,

    /// Also include .gitignore'd files when walking --dir
    #[arg(long)]
    pub no_ignore: bool,

    /// Comma-separated extension filter for --dir (e.g. "rs,md")
    #[arg(short, long)]
    pub ext: Option<String>,
}

/// Output limits. Flags override values from --config.
#[derive(Args, Debug, Clone, Default)]
pub struct LimitArgs {
    /// JSON file with {maxReadLines, maxReadChars, grepMaxPerFile}
    #[arg(long)]
    pub config: Option<String>,

    /// Lines returned by repository_read when no endLine is given
    #[arg(long)]
    pub max_read_lines: Option<usize>,

    /// Character budget for one repository_read result
    #[arg(long)]
    pub max_read_chars: Option<usize>,

    /// Matching lines reported per file by repository_grep
    #[arg(long)]
    pub grep_max_per_file: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct CallArgs {
    /// Tool name (repository_ls, repository_glob, repository_grep, repository_read, repository_search)
    pub tool: String,

    /// Tool arguments as a JSON object
    #[arg(short, long, default_value = "{}")]
    pub args: String,

    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    #[command(flatten)]
    pub limits: LimitArgs,
}

impl SnapshotArgs {
    /// Lowercased extensions from `--ext`, empty when unfiltered.
    pub fn extensions(&self) -> Vec<String> {
        self.ext
            .as_deref()
            .map(|e| {
                e.split(',')
                    .map(|s| s.trim().trim_start_matches('.').to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
