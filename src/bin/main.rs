use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use utmatrix::data::linear_algebra::TriangularMatrix;
use utmatrix::data::linear_algebra::traits::ElementWise;
use utmatrix::io::Tokens;

/// Add or subtract two upper-triangular matrices.
///
/// The input file contains the size `n` of both matrices, followed by the first and the second
/// matrix. Each matrix is given row by row, row `i` consisting of `n - i` values.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the size and both matrices
    input_file: PathBuf,
    /// Compute the first matrix minus the second, instead of their sum
    #[arg(short, long)]
    subtract: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("UTMATRIX_LOG", "warn"))
        .init();

    let opts = Opts::parse();

    log::info!("Reading input file: \"{}\"", opts.input_file.display());
    let file = File::open(&opts.input_file)
        .with_context(|| format!("Couldn't open \"{}\"", opts.input_file.display()))?;
    let mut tokens = Tokens::new(BufReader::new(file));

    let size = tokens.next_value::<usize>().context("Couldn't read the matrix size")?;
    let mut left = TriangularMatrix::<f64>::new(size)?;
    left.read_from(&mut tokens).context("Couldn't read the first matrix")?;
    let mut right = TriangularMatrix::<f64>::new(size)?;
    right.read_from(&mut tokens).context("Couldn't read the second matrix")?;
    log::debug!("Read two matrices of size {} ({} values)", size, tokens.position() - 1);

    let result = if opts.subtract {
        left.try_sub(&right)?
    } else {
        left.try_add(&right)?
    };
    print!("{}", result);

    Ok(())
}
