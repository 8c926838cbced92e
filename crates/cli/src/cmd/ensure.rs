//! Author/byline normalization of a single document.

use color_eyre::eyre::{Result, WrapErr};
use mdbyline_core::config::ResolvedConfig;
use mdbyline_core::document::{self, RunOptions};

use crate::EnsureArgs;

pub fn run(args: &EnsureArgs, cfg: &ResolvedConfig) -> Result<()> {
    let options = RunOptions {
        insert_byline: args.byline,
        dry_run: args.dry_run,
        atomic: cfg.write.atomic,
    };

    tracing::debug!(
        input = %args.input.display(),
        author = %args.author,
        byline = args.byline,
        atomic = options.atomic,
        "normalizing author metadata"
    );

    let outcome = document::run(&args.input, &args.author, &options)
        .wrap_err_with(|| format!("could not update {}", args.input.display()))?;

    if args.dry_run {
        print!("{}", outcome.content);
    }

    Ok(())
}
