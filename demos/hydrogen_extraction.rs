//! Extract an iso-surface of the hydrogen 3d_z² orbital density
//!
//! ```text
//! RUST_LOG=debug cargo run --bin hydrogen_extraction -- --size 96 --iso 0.05 --normalized --parallel -o orbital.ply
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use isocrate_core::Drawable;
use isocrate_extraction::fields::HydrogenOrbital;
use isocrate_extraction::{ExtractionConfig, MarchingTetrahedra, ParallelConfig};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Samples per axis of the generated volume (4..=256)
    #[arg(long, default_value_t = 64)]
    size: usize,

    /// Iso value; a fraction of the value range with `--normalized`
    #[arg(long, default_value_t = 0.05)]
    iso: f32,

    /// Interpret `--iso` relative to the field's value range
    #[arg(long)]
    normalized: bool,

    /// Use the sharded parallel traversal
    #[arg(long)]
    parallel: bool,

    /// Worker threads for the sharded traversal
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Write the mesh to a `.ply` or `.obj` file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let orbital = HydrogenOrbital::new(args.size).context("invalid orbital size")?;

    let start = Instant::now();
    let volume = orbital.generate();
    info!("Generated {}³ volume in {:?}", args.size, start.elapsed());

    let mut config = if args.normalized {
        ExtractionConfig::normalized(args.iso)
    } else {
        ExtractionConfig::absolute(args.iso)
    };
    if args.parallel {
        let mut parallel = ParallelConfig::default();
        if let Some(threads) = args.threads {
            parallel = parallel.with_threads(threads);
        }
        config = config.with_parallel(parallel);
    }

    let extractor = MarchingTetrahedra::new(config);
    let iso = extractor.resolve_iso(&volume);

    let start = Instant::now();
    let mesh = extractor.extract(&volume)?;
    let elapsed = start.elapsed();

    println!("Hydrogen 3d_z² orbital, {}³ samples, iso {}", args.size, iso);
    println!("  - Vertices:  {}", mesh.vertex_count());
    println!("  - Triangles: {}", mesh.triangle_count());
    println!("  - Time:      {:?}", elapsed);
    if !mesh.is_empty() {
        let (min, max) = mesh.bounding_box();
        println!("  - Bounds:    {:?} .. {:?}", min, max);
    }

    if let Some(path) = args.output {
        isocrate_io::write_mesh(&mesh, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
