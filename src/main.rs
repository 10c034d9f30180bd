use anyhow::Context;
use clap::Parser;
use picture_lab::Picture;

use crate::cli::{Cli, Command};

mod cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Apply {
            input,
            transforms,
            output,
            edge_dist,
        } => {
            let mut picture = Picture::open(&input)?;
            log::info!("{picture}");
            for transform in transforms {
                transform
                    .apply(&mut picture, edge_dist)
                    .with_context(|| format!("{transform:?} failed on {}", input.display()))?;
                log::debug!("Applied {transform:?}");
            }
            log::info!("{picture}");
            if let Some(output) = output {
                picture.save(&output)?;
                log::info!("Wrote {}", output.display());
            }
        }
        Command::Collage {
            source,
            output,
            height,
            width,
        } => {
            let mut collage = Picture::try_new(height, width)?;
            collage
                .create_collage(&source)
                .with_context(|| format!("building collage from {}", source.display()))?;
            collage.save(&output)?;
            log::info!("Wrote {} to {}", collage, output.display());
        }
    }
    Ok(())
}
