//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use vm16_assembler::assemble;
use vm16_disassembler::{compare, disassemble, format_listing};
use vm16_spec::Program;

use crate::config::{Config, ListingSource};

pub fn run(config: Config) -> Result<()> {
    match config {
        Config::Compile { source, output } => {
            compile(&source, &output)?;
        }
        Config::Dump {
            image,
            listing_only,
        } => {
            print!("{}", render_dump(&image, listing_only)?);
        }
        Config::Check { image, source } => check(&image, &source)?,
    }
    Ok(())
}

fn load_listing(source: &ListingSource) -> Result<Program> {
    let text = source.read()?;
    let program = assemble(&text).with_context(|| format!("failed to assemble {}", source))?;
    debug!(listing = %program, "assembled {}", source);
    Ok(program)
}

fn read_image(image: &Path) -> Result<Program> {
    let program =
        Program::read_from(image).with_context(|| format!("failed to load {}", image.display()))?;
    debug!(words = program.len(), "decoded {}", image.display());
    Ok(program)
}

/// Assemble `source` and write the image to `output`.
///
/// Nothing is written unless the whole listing assembles.
pub fn compile(source: &ListingSource, output: &Path) -> Result<Program> {
    let program = load_listing(source)?;
    info!(words = program.len(), bytes = program.byte_len(), "compiling program");

    program
        .write_to(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("compiled program is available at {}", output.display());
    Ok(program)
}

/// Decode `image` and render it as a dump or bare listing
pub fn render_dump(image: &Path, listing_only: bool) -> Result<String> {
    let program = read_image(image)?;

    if listing_only {
        Ok(format!("{}\n", format_listing(&program)))
    } else {
        Ok(disassemble(&program))
    }
}

/// Fail unless `image` holds exactly the program assembled from `source`
pub fn check(image: &Path, source: &ListingSource) -> Result<()> {
    let expected = load_listing(source)?;
    let found = read_image(image)?;
    compare(&expected, &found)
        .with_context(|| format!("{} does not match {}", image.display(), source))?;
    info!(words = expected.len(), "{} matches {}", image.display(), source);
    Ok(())
}
