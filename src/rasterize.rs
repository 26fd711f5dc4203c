use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use iconsetgen_core::{IconsetError, RasterResult, Result, SizeSpec};
use thiserror::Error;

use crate::logger::{log_command, log_error};

/// Why one rendition was not produced. Never fatal for the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("converter `{0}` not found")]
    NotFound(String),
    #[error("failed to run converter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("converter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("no converter command configured")]
    Empty,
}

/// Renders `svg` into a square PNG of `pixels` edge length at `out`.
pub trait Rasterizer {
    fn rasterize(
        &self,
        svg: &Path,
        out: &Path,
        pixels: u32,
    ) -> std::result::Result<(), ConvertError>;
}

/// Runs an external converter with `-w <px> -h <px> -o <out> <svg>` appended.
#[derive(Debug, Clone)]
pub struct CommandRasterizer {
    program: String,
    leading_args: Vec<String>,
}

impl CommandRasterizer {
    /// `command` may carry leading arguments, e.g. `sh ./convert.sh`.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(|s| s.to_string());
        let program = parts.next().unwrap_or_default();
        Self {
            program,
            leading_args: parts.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    // Paths go through as OS strings so non-UTF-8 names reach the converter intact.
    fn args_for(&self, svg: &Path, out: &Path, pixels: u32) -> Vec<OsString> {
        let px = OsString::from(pixels.to_string());
        let mut args: Vec<OsString> = self.leading_args.iter().map(OsString::from).collect();
        args.extend([
            OsString::from("-w"),
            px.clone(),
            OsString::from("-h"),
            px,
            OsString::from("-o"),
            out.as_os_str().to_os_string(),
            svg.as_os_str().to_os_string(),
        ]);
        args
    }
}

impl Rasterizer for CommandRasterizer {
    fn rasterize(
        &self,
        svg: &Path,
        out: &Path,
        pixels: u32,
    ) -> std::result::Result<(), ConvertError> {
        if self.program.is_empty() {
            return Err(ConvertError::Empty);
        }
        let args = self.args_for(svg, out, pixels);
        log_command(&self.program, &args);
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    ConvertError::NotFound(self.program.clone())
                } else {
                    ConvertError::Spawn {
                        program: self.program.clone(),
                        source: e,
                    }
                }
            })?;
        if !output.stdout.is_empty() {
            tracing::debug!(
                "converter stdout: {}",
                String::from_utf8_lossy(&output.stdout).trim_end()
            );
        }
        if output.status.success() {
            Ok(())
        } else {
            Err(ConvertError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Converts every size in order. Per-size failures become `Missing`; only
/// failing to create `out_dir` aborts.
pub fn rasterize_all(
    specs: &[SizeSpec],
    svg: &Path,
    out_dir: &Path,
    rasterizer: &dyn Rasterizer,
    install_hint: &str,
) -> Result<Vec<RasterResult>> {
    fs::create_dir_all(out_dir).map_err(|source| IconsetError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut results = Vec::with_capacity(specs.len());
    for spec in specs {
        let filename = spec.filename();
        let out = out_dir.join(&filename);
        match rasterizer.rasterize(svg, &out, spec.pixels()) {
            Ok(()) => {
                check_dimensions(&out, spec.pixels());
                println!("Generated {}", filename);
                results.push(RasterResult::produced(*spec));
            }
            Err(e) => {
                match &e {
                    ConvertError::NotFound(_) => tracing::warn!("{}", e),
                    _ => log_error(&format!("converting {}", filename), &e),
                }
                println!("Skipped {} - {}", filename, install_hint);
                results.push(RasterResult::missing(*spec));
            }
        }
    }
    Ok(results)
}

// The exit status decides success; a wrong-sized PNG is only reported.
fn check_dimensions(path: &Path, expected: u32) {
    match image::image_dimensions(path) {
        Ok((w, h)) if w == expected && h == expected => {}
        Ok((w, h)) => tracing::warn!(
            "{} is {}x{}, expected {}x{}",
            path.display(),
            w,
            h,
            expected,
            expected
        ),
        Err(e) => tracing::warn!("could not read back {}: {}", path.display(), e),
    }
}
