use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, builder::BoolishValueParser};

use crate::domain::types::{PostStatus, StatusFilter};

/// Command-line arguments for the blogdesk binary.
#[derive(Debug, Parser)]
#[command(name = "blogdesk", version, about = "Blog post administration client")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "BLOGDESK_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// API base URL, e.g. <https://api.example.com>
    #[arg(long = "api-url", env = "BLOGDESK_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Path to file containing the API key (takes precedence over env)
    #[arg(
        long = "api-key-file",
        env = "BLOGDESK_API_KEY_FILE",
        value_name = "PATH",
        global = true
    )]
    pub api_key_file: Option<PathBuf>,

    /// API key from env (hidden so it stays out of help output and shell history)
    #[arg(long = "api-key-env", hide = true, env = "BLOGDESK_API_KEY", global = true)]
    pub api_key_env: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List posts, optionally filtered by status
    List {
        #[arg(long, default_value_t = StatusFilterArg::All)]
        status: StatusFilterArg,
    },
    /// List the authors a post can be attributed to
    Authors,
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Author display name, matched against the author list
        #[arg(long)]
        author: Option<String>,
        #[arg(long, default_value_t = PostStatusArg::Unpublished)]
        status: PostStatusArg,
    },
    /// Edit a post; omitted fields keep their current values
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        status: Option<PostStatusArg>,
    },
    /// Delete a post after confirmation
    Delete {
        id: i64,
        /// Skip the interactive confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PostStatusArg {
    Published,
    Unpublished,
}

impl PostStatusArg {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Unpublished => "unpublished",
        }
    }
}

impl fmt::Display for PostStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PostStatusArg> for PostStatus {
    fn from(value: PostStatusArg) -> Self {
        match value {
            PostStatusArg::Published => PostStatus::Published,
            PostStatusArg::Unpublished => PostStatus::Unpublished,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusFilterArg {
    All,
    Published,
    Unpublished,
}

impl StatusFilterArg {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Published => "published",
            Self::Unpublished => "unpublished",
        }
    }
}

impl fmt::Display for StatusFilterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StatusFilterArg> for StatusFilter {
    fn from(value: StatusFilterArg) -> Self {
        match value {
            StatusFilterArg::All => StatusFilter::All,
            StatusFilterArg::Published => StatusFilter::Only(PostStatus::Published),
            StatusFilterArg::Unpublished => StatusFilter::Only(PostStatus::Unpublished),
        }
    }
}
