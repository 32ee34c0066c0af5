//! # Mesh Report
//!
//! Generates a volume, meshes it and prints what came out.
//!
//! ```text
//! mesh_report [config.toml]
//! ```
//!
//! Without an argument the reference 16³ terrain chunk is used.

use std::process::ExitCode;

use voxel_ao::{AppConfig, AppResult, Pipeline};

fn run() -> AppResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            println!("config     {path}");
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    };

    let pipeline = Pipeline::new(config)?;
    let generator = &pipeline.config().generator;
    println!("pattern    {:?} (seed {})", generator.pattern, generator.seed);

    let output = pipeline.run()?;
    println!("{}", output.report);

    if output.report.occupied > 0 && output.report.faces == 0 {
        println!("warning    volume has occupied cells but no visible faces");
    }
    if let Some(path) = &pipeline.config().output.vertex_dump {
        println!("dump       {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
