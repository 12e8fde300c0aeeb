//! # Command-line configuration
//!
//! Parsed arguments and the validated configuration the commands run with.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

/// Output path used when `compile` is given none
pub const DEFAULT_OUTPUT: &str = "sample.bin";

/// Listing compiled when none is supplied: r0 = r1 + 33, then print r0
pub const DEFAULT_LISTING: &str = "9,32768,32769,33,19,32768";

#[derive(Parser, Debug)]
#[command(name = "vm16", version, about = "Compile and inspect VM16 program images")]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble a listing and write the program image.
    Compile(CompileArgs),
    /// Decode a program image and print it.
    Dump(DumpArgs),
    /// Check that a program image holds exactly the given listing.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct ListingArgs {
    /// Comma-separated decimal words, e.g. "9,32768,32769,4,19,32768".
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub listing: Option<String>,

    /// Read the listing from a file.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Where to write the program image.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub listing: ListingArgs,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Program image to decode.
    #[arg(value_name = "FILE")]
    pub image: PathBuf,

    /// Print only the comma-separated listing.
    #[arg(long)]
    pub listing_only: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Program image to check.
    #[arg(value_name = "FILE")]
    pub image: PathBuf,

    #[command(flatten)]
    pub expected: ExpectedListingArgs,
}

/// Listing `check` compares against; exactly one source must be given
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ExpectedListingArgs {
    /// Comma-separated decimal words the image must hold.
    #[arg(short, long, value_name = "TEXT")]
    pub listing: Option<String>,

    /// Read the expected listing from a file.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Where a listing comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    Inline(String),
    File(PathBuf),
}

impl ListingSource {
    pub fn from_args(args: ListingArgs) -> Self {
        match (args.input, args.listing) {
            (Some(path), _) => ListingSource::File(path),
            (None, Some(text)) => ListingSource::Inline(text),
            (None, None) => ListingSource::Inline(DEFAULT_LISTING.to_string()),
        }
    }

    /// Source for `check`, which has no default listing
    pub fn from_expected(args: ExpectedListingArgs) -> Result<Self> {
        match (args.input, args.listing) {
            (Some(path), _) => Ok(ListingSource::File(path)),
            (None, Some(text)) => Ok(ListingSource::Inline(text)),
            (None, None) => bail!("check needs an expected listing (--listing or --input)"),
        }
    }

    /// Listing text
    pub fn read(&self) -> Result<String> {
        match self {
            ListingSource::Inline(text) => Ok(text.clone()),
            ListingSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read listing {}", path.display())),
        }
    }
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSource::Inline(_) => write!(f, "inline listing"),
            ListingSource::File(path) => write!(f, "listing {}", path.display()),
        }
    }
}

/// Validated configuration for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    Compile {
        source: ListingSource,
        output: PathBuf,
    },
    Dump {
        image: PathBuf,
        listing_only: bool,
    },
    Check {
        image: PathBuf,
        source: ListingSource,
    },
}

impl Config {
    pub fn from_args(command: Command) -> Result<Self> {
        Ok(match command {
            Command::Compile(args) => Config::Compile {
                source: ListingSource::from_args(args.listing),
                output: args.output,
            },
            Command::Dump(args) => Config::Dump {
                image: args.image,
                listing_only: args.listing_only,
            },
            Command::Check(args) => Config::Check {
                image: args.image,
                source: ListingSource::from_expected(args.expected)?,
            },
        })
    }
}
