//! Command-line interface for building a collage from files and directories

use crate::builder::build::assemble;
use crate::builder::request::CollageRequest;
use crate::io::configuration::{
    DEFAULT_MARGIN, DEFAULT_OUTPUT_PATH, DEFAULT_TARGET_WIDTH, MAX_CLI_WIDTH, MIN_CLI_WIDTH,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::{load_source, save_collage};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridcollage")]
#[command(
    author,
    version,
    about = "Arrange images into a single grid collage"
)]
/// Command-line arguments for the collage builder
pub struct Cli {
    /// Image files or directories to include, in placement order
    #[arg(value_name = "IMAGES", required = true)]
    pub targets: Vec<PathBuf>,

    /// Output file path; the extension selects the format
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Gap between tiles and around the border, in pixels
    #[arg(short, long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Nominal tile width, in pixels
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_TARGET_WIDTH,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_CLI_WIDTH)..=i64::from(MAX_CLI_WIDTH))
    )]
    pub width: u32,

    /// Size the canvas from actual tile widths instead of the nominal width
    #[arg(short = 's', long)]
    pub strict_width: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Turn the parsed arguments into a build request
    pub fn to_request(&self, image_paths: Vec<PathBuf>) -> CollageRequest {
        CollageRequest {
            image_paths,
            output_path: self.output.clone(),
            margin: self.margin,
            target_width: self.width,
            strict_width: self.strict_width,
        }
    }
}

/// Expand CLI targets into an ordered list of image paths
///
/// File targets are taken as given, in command-line order. Directory
/// targets expand to their image files sorted by name. A file target
/// without a supported image extension is rejected up front rather than
/// at decode time.
///
/// # Errors
///
/// Returns `InvalidParameter` for a file target with an unsupported
/// extension or a target that is neither file nor directory, and
/// `FileSystem` if a directory cannot be read.
pub fn collect_image_paths(targets: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for target in targets {
        if target.is_file() {
            if has_supported_extension(target) {
                paths.push(target.clone());
            } else {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file extension is not a supported image format",
                ));
            }
        } else if target.is_dir() {
            let mut entries = Vec::new();
            for entry in
                std::fs::read_dir(target).with_operation("read directory", target)?
            {
                let path = entry.with_operation("read directory", target)?.path();
                if path.is_file() && has_supported_extension(&path) {
                    entries.push(path);
                }
            }
            entries.sort();
            paths.extend(entries);
        } else {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"not a readable file or directory",
            ));
        }
    }

    Ok(paths)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|supported| *supported == lowered)
        })
}

/// Orchestrates one collage build with progress reporting
pub struct CollageProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CollageProcessor {
    /// Create a processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Collect sources, build the collage, and write it out
    ///
    /// The load stage is driven here rather than through
    /// [`crate::builder::build()`] so each decoded image can tick the
    /// progress bar.
    ///
    /// # Errors
    ///
    /// Returns an error if target collection, validation, decoding,
    /// layout, or the final write fails.
    pub fn process(&mut self) -> Result<()> {
        let paths = collect_image_paths(&self.cli.targets)?;
        let request = self.cli.to_request(paths);
        request.validate()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_loading(request.image_paths.len());
        }

        let mut sources = Vec::with_capacity(request.image_paths.len());
        for path in &request.image_paths {
            let source = load_source(path)?;
            if let Some(ref pm) = self.progress_manager {
                pm.image_loaded(path);
            }
            sources.push(source);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.start_compositing();
        }

        let (plan, canvas) = assemble(
            &sources,
            request.margin,
            request.target_width,
            request.strict_width,
        )?;
        save_collage(&canvas, &request.output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        // Allow print for user feedback on the saved collage
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!(
                "Collage saved to: {} ({}x{}, {} images on a {}x{} grid)",
                request.output_path.display(),
                plan.canvas_width(),
                plan.canvas_height(),
                sources.len(),
                plan.shape().rows,
                plan.shape().cols,
            );
        }

        Ok(())
    }
}
