//! Placeholder image generator.
//!
//! Renders the full-size placeholder artwork for every project in the
//! catalog and writes the files to an output directory. WebP is attempted
//! first and PNG used as a fallback, matching what the viewer does for
//! single-card exports.
//!
//! Usage: orgview-placegen [output_dir] [WIDTHxHEIGHT]

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use orgview::{encode_placeholder, project_catalog, render_placeholder, PlaceholderSpec};

const DEFAULT_SIZE: (u32, u32) = (640, 360);

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let out_dir = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("placeholders"));
    let (width, height) = match args.get(2) {
        Some(spec) => parse_size(spec)?,
        None => DEFAULT_SIZE,
    };

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut written = 0usize;
    for (index, project) in project_catalog().iter().enumerate() {
        let spec = PlaceholderSpec {
            width,
            height,
            seed: index as u64,
        };
        let img = render_placeholder(&spec);
        let (bytes, format) = encode_placeholder(&img)?;

        let file = out_dir.join(format!("{}.{}", slug(project.name), format.extension()));
        fs::write(&file, bytes).with_context(|| format!("writing {}", file.display()))?;
        println!("{:>10}  {}x{}  {}", project.caption, width, height, file.display());
        written += 1;
    }

    println!("Wrote {} placeholder(s) to {}", written, out_dir.display());
    Ok(())
}

/// Parses "WIDTHxHEIGHT" (e.g. "640x360").
fn parse_size(spec: &str) -> Result<(u32, u32)> {
    let Some((w, h)) = spec.split_once('x') else {
        bail!("size must look like 640x360, got '{spec}'");
    };
    let width: u32 = w.parse().with_context(|| format!("bad width '{w}'"))?;
    let height: u32 = h.parse().with_context(|| format!("bad height '{h}'"))?;
    if width == 0 || height == 0 {
        bail!("size must be non-zero, got {width}x{height}");
    }
    Ok((width, height))
}

/// Lowercase-hyphen file stem from a project name.
fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
