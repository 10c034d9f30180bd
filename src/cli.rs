use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use picture_lab::{Picture, COLLAGE_HEIGHT, COLLAGE_SOURCE, COLLAGE_WIDTH};

/// Classroom picture manipulation demos
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a picture, apply transforms in order, and optionally save it
    Apply {
        /// Picture to load
        input: PathBuf,

        /// Transform to apply; repeat to chain several
        #[arg(short, long = "transform", value_enum, default_values_t = [Transform::ZeroBlue])]
        transforms: Vec<Transform>,

        /// Where to write the result; the format follows the extension
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Color distance above which edge detection paints a pixel black
        #[arg(long, default_value_t = 10)]
        edge_dist: i32,
    },
    /// Assemble the six-panel collage from the lamb fixture
    Collage {
        /// Fixture photo to build the panels from
        #[arg(short, long, default_value = COLLAGE_SOURCE)]
        source: PathBuf,

        /// Where to write the collage
        #[arg(short, long)]
        output: PathBuf,

        /// Canvas height
        #[arg(long, default_value_t = COLLAGE_HEIGHT)]
        height: usize,

        /// Canvas width
        #[arg(long, default_value_t = COLLAGE_WIDTH)]
        width: usize,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    ZeroBlue,
    KeepOnlyRed,
    KeepOnlyBlue,
    Negate,
    Grayscale,
    MirrorVertical,
    MirrorVerticalRightToLeft,
    MirrorHorizontal,
    MirrorHorizontalBotToTop,
    MirrorTemple,
    MirrorArms,
    MirrorGull,
    TwoHead,
    RandomZero,
    GradientBlue,
    EdgeDetection,
}

impl Transform {
    pub fn apply(self, picture: &mut Picture, edge_dist: i32) -> picture_lab::Result<()> {
        match self {
            Transform::ZeroBlue => picture.zero_blue(),
            Transform::KeepOnlyRed => picture.keep_only_red(),
            Transform::KeepOnlyBlue => picture.keep_only_blue(),
            Transform::Negate => picture.negate(),
            Transform::Grayscale => picture.grayscale(),
            Transform::MirrorVertical => picture.mirror_vertical(),
            Transform::MirrorVerticalRightToLeft => picture.mirror_vertical_right_to_left(),
            Transform::MirrorHorizontal => picture.mirror_horizontal(),
            Transform::MirrorHorizontalBotToTop => picture.mirror_horizontal_bot_to_top(),
            Transform::MirrorTemple => picture.mirror_temple()?,
            Transform::MirrorArms => picture.mirror_arms()?,
            Transform::MirrorGull => picture.mirror_gull()?,
            Transform::TwoHead => picture.two_head()?,
            Transform::RandomZero => picture.random_zero(),
            Transform::GradientBlue => picture.gradient_blue(),
            Transform::EdgeDetection => picture.edge_detection(edge_dist),
        }
        Ok(())
    }
}
