use std::{error::Error, path::PathBuf};

use clap::Parser;
use inertia::{Axis, PointSet, Vec3, align};
use pdbio::Structure;

use crate::config::Config;

mod config;

/// align the principal axis of a PDB structure with a Cartesian axis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// the PDB file to align
    #[arg(short, long)]
    file: PathBuf,

    /// the axis to align the principal axis with: x, y, or z
    #[arg(short, long, default_value_t = Axis::Z)]
    axis: Axis,

    /// the output filename
    #[arg(short, long, default_value = "aligned.pdb")]
    out: PathBuf,

    /// TOML file with a [tolerances] table overriding the numerical
    /// tolerances
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON summary of the alignment to stdout
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// align the structure in `args.file` and write it to `args.out`. nothing is
/// written if any step fails
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut pdb = Structure::load(&args.file)?;
    log::info!(
        "read {} atoms in {} residues from {}",
        pdb.atoms.len(),
        pdb.residues().len(),
        args.file.display()
    );

    let positions = pdb.positions().into_iter().map(Vec3::from).collect();
    let points = PointSet::new(positions, pdb.masses())?;
    let alignment = align(&points, args.axis, &config.tolerances)?;

    let aligned: Vec<_> = alignment
        .points
        .positions()
        .iter()
        .map(|p| [p.x, p.y, p.z])
        .collect();
    pdb.set_positions(&aligned)?;
    pdb.write(&args.out)?;
    log::info!("wrote aligned structure to {}", args.out.display());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&alignment)?);
    }

    Ok(())
}
