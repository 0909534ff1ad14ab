//! sphere-mesh CLI - write a triangulated sphere to a mesh file.
//!
//! Usage: sphere-mesh [OPTIONS] <FILE>
//!
//! The output format follows the file extension (.obj, .stl, .ply, .vtk).
//! Run `sphere-mesh --help` for all options.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;

use sphere_mesh::io;
use sphere_mesh::mesh::TriangleMesh;
use sphere_mesh::progress::Progress;
use sphere_mesh::sphere::{generate_with_progress, SphereOptions};

#[derive(Parser)]
#[command(name = "sphere-mesh")]
#[command(author, version, about = "Construct a triangulation of a sphere", long_about = None)]
struct Cli {
    /// File to be written to
    #[arg(value_name = "FILE")]
    filename: PathBuf,

    /// Radius of the sphere
    #[arg(short, long, default_value = "1.0")]
    radius: f64,

    /// Number of circles of latitude in the discretization, poles included
    #[arg(short = 'c', long, default_value = "10")]
    num_circles: usize,

    /// Number of discretization points per circle of latitude
    #[arg(short = 'p', long, default_value = "20")]
    num_points_per_circle: usize,

    /// Use single-threaded execution (for benchmarking)
    #[arg(long)]
    sequential: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = SphereOptions::new(cli.num_circles, cli.num_points_per_circle)
        .with_radius(cli.radius)
        .with_parallel(!cli.sequential);

    let progress = if cli.quiet {
        Progress::none()
    } else {
        create_progress()
    };

    let mesh = generate_with_progress(&options, &progress)?;

    if !cli.quiet {
        println!("\n{} nodes, {} elements\n", mesh.num_vertices(), mesh.num_faces());
        print_summary(&mesh);
    }

    write_mesh(&mesh, &cli.filename, cli.quiet)?;

    Ok(())
}

/// Create a progress reporter that prints each generation stage with its
/// duration, e.g. `Creating nodes... done. (1.2ms)`.
fn create_progress() -> Progress {
    let started = Mutex::new(None::<Instant>);

    Progress::new(move |current, total, message| {
        let Ok(mut started) = started.lock() else {
            return;
        };

        if let Some(start) = started.take() {
            println!("done. ({:.2?})", start.elapsed());
        }

        if current < total {
            print!("{}... ", message);
            let _ = std::io::stdout().flush();
            *started = Some(Instant::now());
        }
    })
}

fn print_summary(mesh: &TriangleMesh) {
    println!("Surface area: {:.6}", mesh.surface_area());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    let topology = mesh.topology();
    println!("Edges: {}", topology.num_edges());
    println!("Euler characteristic: {}", topology.euler_characteristic());
    if topology.is_closed() {
        println!("Topology: Closed (no boundary)");
    } else {
        println!(
            "Topology: Open ({} boundary edges)",
            topology.boundary_edges().len()
        );
    }
}

fn write_mesh(
    mesh: &TriangleMesh,
    path: &Path,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if quiet {
        io::save(mesh, path)?;
        return Ok(());
    }

    print!("Writing mesh... ");
    let _ = std::io::stdout().flush();
    let start = Instant::now();
    io::save(mesh, path)?;
    println!("done. ({:.2?})", start.elapsed());
    println!("Saved: {}", path.display());

    Ok(())
}
