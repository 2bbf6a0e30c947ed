use clap::Parser;
use mat22::{Mat22, MatError, Vec2};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect a 2x2 matrix")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    /// Parse the matrix from text (e.g. "1, 2, 3, 4") instead of positional values
    #[arg(short, long, conflicts_with = "values")]
    parse: Option<String>,
    /// Also transform this vector
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    vector: Option<Vec<f32>>,
    /// Digits after the decimal point
    #[arg(long, default_value_t = 3)]
    precision: usize,
    /// Matrix elements, in row-major order (a b c d)
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

fn read_matrix(args: &Args) -> Result<Mat22, MatError> {
    let text = match &args.parse {
        Some(text) => text.clone(),
        None => args.values.join(" "),
    };
    Mat22::parse(&text).map_err(MatError::from)
}

fn main() -> Result<(), MatError> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let m = read_matrix(&args)?;
    log::debug!("Read matrix {m:?}");
    let precision = args.precision;

    println!("M =\n{m:.precision$}");
    println!("det(M)   = {:.precision$}", m.det());
    println!("trace(M) = {:.precision$}", m.trace());
    println!("M^T =\n{:.precision$}", m.transposed());

    match m.try_inverse() {
        Ok(inv) => println!("M^-1 =\n{inv:.precision$}"),
        Err(e) => {
            log::warn!("{e}");
            println!("M^-1 = (singular)");
        },
    }

    if let Some(v) = &args.vector {
        let v = Vec2::new(v[0], v[1]);
        let w = m * v;
        println!("M * ({v}) = ({w})");
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use mat22::{Mat22, MatError, ParseMatError};

    use super::{Args, read_matrix};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mat22").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn positional_values() {
        let args = args(&["1", "-2", "3", "4", "--vector", "1", "-1"]);
        assert_eq!(read_matrix(&args), Ok(Mat22::new(1., -2., 3., 4.)));
        assert_eq!(args.vector, Some(vec![1., -1.]));
    }

    #[test]
    fn parse_text() {
        let args = args(&["--parse", "1, 2\n3, 4"]);
        assert_eq!(read_matrix(&args), Ok(Mat22::new(1., 2., 3., 4.)));
    }

    #[test]
    fn missing_values() {
        let args = args(&["1", "2"]);
        assert_eq!(read_matrix(&args), Err(MatError::Parse(ParseMatError::TooFewValues { found: 2 })));
    }

    #[test]
    fn parse_conflicts_with_values() {
        let argv = ["mat22", "--parse", "1 2 3 4", "5"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
