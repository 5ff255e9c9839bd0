/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Parses visualization parameters, runs the sampling pipeline, and
//! optionally exports the normalized field as JSON for an external
//! renderer.

use crate::field::{presets, NormalizedField};
use crate::grid::{GridSpec, SurfaceSpec};
use crate::orbital::QuantumNumbers;
use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Top-level command line
#[derive(Parser, Debug)]
#[command(
    name = "orbitals-rs",
    version,
    about = "Hydrogen orbital density fields for visualization"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available sampling pipelines
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sample |ψ(n,l,m)|² over a centered cubic grid
    Hydrogen {
        /// Principal quantum number
        #[arg(short, long, default_value_t = 2)]
        n: i32,

        /// Orbital angular-momentum quantum number
        #[arg(short, long, default_value_t = 1)]
        l: i32,

        /// Magnetic quantum number
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        m: i32,

        /// Half-extent of the cubic grid, in Bohr radii
        #[arg(long, default_value_t = 20.0)]
        extent: f64,

        /// Grid steps per axis
        #[arg(long, default_value_t = 50)]
        resolution: usize,

        /// Write the normalized field to this path as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sample the analytic ripple surface z = sin(√(x² + y²))
    Surface {
        /// Half-extent of the square grid
        #[arg(long, default_value_t = 5.0)]
        extent: f64,

        /// Grid steps per axis
        #[arg(long, default_value_t = 100)]
        resolution: usize,

        /// Write the normalized field to this path as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run a parsed command to completion.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Hydrogen {
            n,
            l,
            m,
            extent,
            resolution,
            output,
        } => {
            let state = QuantumNumbers::new(n, l, m);
            let spec = GridSpec::cube(extent, resolution)?;
            info!(
                "sampling |psi({n},{l},{m})|^2 on a {resolution}^3 grid, half-extent {extent}"
            );

            let field = crate::sample_and_normalize(state, &spec);
            report(&field);
            if let Some(path) = output {
                write_field_json(&path, &field)?;
            }
        }
        Command::Surface {
            extent,
            resolution,
            output,
        } => {
            let spec = SurfaceSpec::square(extent, resolution)?;
            info!("sampling ripple surface on a {resolution}^2 grid, half-extent {extent}");

            let field = crate::sample_and_normalize_surface(&spec, presets::ripple);
            report(&field);
            if let Some(path) = output {
                write_field_json(&path, &field)?;
            }
        }
    }

    Ok(())
}

fn report(field: &NormalizedField) {
    println!(
        "{} samples, raw extrema [{:.6e}, {:.6e}]",
        field.len(),
        field.min,
        field.max
    );
}

/// Serialize a normalized field to a JSON file.
pub fn write_field_json(path: &Path, field: &NormalizedField) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), field)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} samples to {}", field.len(), path.display());
    Ok(())
}
