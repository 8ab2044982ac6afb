use crate::logging::LogLevel;
use crate::output_format::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    author,
    name = "starlint",
    about = "starlint: Find and Fix Documentation Comment Layout in JavaScript Code",
    after_help = "For help with a specific command, see: `starlint help <command>`."
)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[clap(flatten)]
    pub(crate) global_options: GlobalOptions,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Check a set of files or directories
    Check(CheckCommand),
}

#[derive(Clone, Debug, Parser)]
#[command(arg_required_else_help(true))]
pub struct CheckCommand {
    #[arg(
        required = true,
        help = "List of files or directories to check or fix, for example `starlint check .`."
    )]
    pub files: Vec<String>,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Automatically fix issues detected by the linter."
    )]
    pub fix: bool,
    #[arg(
        long,
        default_value = "false",
        help = "Apply fixes to resolve lint violations, but don't report on leftover violations. Implies `--fix`."
    )]
    pub fix_only: bool,
    #[arg(
        long,
        default_value = "false",
        help = "Apply fixes even if the Git branch is not clean, meaning that there are uncommitted files."
    )]
    pub allow_dirty: bool,
    #[arg(
        long,
        default_value = "false",
        help = "Apply fixes even if there is no version control system."
    )]
    pub allow_no_vcs: bool,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Show the time taken by the check."
    )]
    pub with_timing: bool,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Show the number of violations of each kind instead of the individual diagnostics."
    )]
    pub statistics: bool,
    #[arg(
        long,
        default_value = "false",
        help = "Do not apply the default exclude patterns (node_modules/, dist/, *.min.js, ...)."
    )]
    pub no_default_exclude: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        help="Output serialization format for violations."
    )]
    pub output_format: OutputFormat,
}

/// All configuration options that can be passed "globally"
#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Global options")]
pub(crate) struct GlobalOptions {
    /// The log level. One of: `error`, `warn`, `info`, `debug`, or `trace`. Defaults
    /// to `warn`.
    #[arg(long, global = true)]
    pub(crate) log_level: Option<LogLevel>,

    /// Disable colored output. To turn colored output off, either set this option or set
    /// the environment variable `NO_COLOR` to any non-zero value.
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}
