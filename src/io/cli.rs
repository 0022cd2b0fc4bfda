//! Command-line interface for slicing a sheet and rotating its parts

use crate::io::configuration::{
    DEFAULT_ITEM_COUNT, DEFAULT_OUTPUT_ROOT, DEFAULT_PARTS, DEFAULT_SHEET_PATH,
    SUMMARY_RULE_WIDTH,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::layout::catalog::PartCatalog;
use crate::layout::grid::TruncationPolicy;
use crate::layout::sheet::SheetLayout;
use crate::pipeline::rotator::{RotateReport, RotateTarget, Rotation, Rotator};
use crate::pipeline::runner::Pipeline;
use crate::pipeline::slicer::{SliceReport, Slicer};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheetcut")]
#[command(
    author,
    version,
    about = "Slice a sprite sheet into part images and rotate them"
)]
/// Command-line arguments for the sheet slicing tool
pub struct Cli {
    /// Stage to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress and summary output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available stages
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Cut the composite sheet into one image per part and item
    Slice(LayoutArgs),
    /// Rotate every part image previously written by `slice`
    Rotate(RotateArgs),
    /// Slice the sheet, then rotate the resulting part images
    Run(RotateArgs),
}

/// Flags describing the sheet and where its parts live
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Composite sprite sheet to slice
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_SHEET_PATH)]
    pub sheet: PathBuf,

    /// Directory receiving one subdirectory per part
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output: PathBuf,

    /// Number of items side by side on the sheet
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITEM_COUNT)]
    pub items: u32,

    /// Part names from the top band to the bottom band
    #[arg(short, long, value_delimiter = ',', default_values = DEFAULT_PARTS)]
    pub parts: Vec<String>,

    /// Fail instead of dropping pixels when the sheet does not divide evenly
    #[arg(long)]
    pub strict: bool,
}

impl LayoutArgs {
    /// Build the layout shared by both stages
    ///
    /// # Errors
    ///
    /// Returns an error if the item count is zero or the part names are invalid
    pub fn to_layout(&self) -> Result<SheetLayout> {
        let parts = PartCatalog::new(self.parts.iter().cloned())?;
        let truncation = if self.strict {
            TruncationPolicy::Strict
        } else {
            TruncationPolicy::Truncate
        };

        Ok(
            SheetLayout::new(&self.sheet, &self.output, self.items, parts)?
                .with_truncation(truncation),
        )
    }
}

/// Layout flags plus rotation settings
#[derive(Args, Debug, Clone)]
pub struct RotateArgs {
    /// Sheet and part locations
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Clockwise rotation to apply
    #[arg(short, long, value_enum, default_value_t = Rotation::Clockwise90)]
    pub turn: Rotation,

    /// Write rotated copies under this directory instead of overwriting
    #[arg(long, value_name = "DIR")]
    pub into: Option<PathBuf>,
}

impl RotateArgs {
    /// Destination for rotated images
    pub fn target(&self) -> RotateTarget {
        self.into
            .as_ref()
            .map_or(RotateTarget::InPlace, |dir| RotateTarget::CopyTo(dir.clone()))
    }
}

/// Dispatches the parsed command to the pipeline stages
pub struct CommandRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or any stage fails
    pub fn run(&mut self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Slice(args) => {
                let layout = args.to_layout()?;
                let report = Slicer::new(&layout).slice_observed(&mut self.progress_manager)?;
                self.report_slice(&layout, &report);
            }
            Command::Rotate(args) => {
                let layout = args.layout.to_layout()?;
                let report = Rotator::new(&layout)
                    .with_rotation(args.turn)
                    .with_target(args.target())
                    .rotate_observed(&mut self.progress_manager)?;
                self.report_rotate(&layout, args.turn, &report);
            }
            Command::Run(args) => {
                let layout = args.layout.to_layout()?;
                let report = Pipeline::new(&layout)
                    .with_rotation(args.turn)
                    .with_target(args.target())
                    .run_observed(&mut self.progress_manager)?;
                self.report_slice(&layout, &report.slice);
                self.report_rotate(&layout, args.turn, &report.rotate);
            }
        }

        Ok(())
    }

    // Allow print for user feedback once a stage completes
    #[allow(clippy::print_stderr)]
    fn report_slice(&self, layout: &SheetLayout, report: &SliceReport) {
        if self.cli.quiet {
            return;
        }

        eprintln!(
            "Sliced {} part images into {}",
            report.written.len(),
            layout.output_root().display()
        );
        let (columns, rows) = report.dropped();
        if columns > 0 || rows > 0 {
            eprintln!(
                "Dropped {columns} pixel column(s) on the right and {rows} pixel row(s) at the bottom"
            );
        }
        eprintln!("{}", "-".repeat(SUMMARY_RULE_WIDTH));
    }

    // Allow print for user feedback once a stage completes
    #[allow(clippy::print_stderr)]
    fn report_rotate(&self, layout: &SheetLayout, turn: Rotation, report: &RotateReport) {
        if self.cli.quiet {
            return;
        }

        if report.found_nothing() {
            eprintln!(
                "No part images found under {} (run `slice` first?)",
                layout.output_root().display()
            );
        } else {
            eprintln!(
                "Rotated {} part images {turn} ({} missing, skipped)",
                report.rotated.len(),
                report.skipped.len()
            );
        }
        eprintln!("{}", "-".repeat(SUMMARY_RULE_WIDTH));
    }
}
