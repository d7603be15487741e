//! herk-tester CLI
//!
//! Runs the Hermitian rank-k update test over the cartesian product of the
//! given types, layouts, triangles, transposes and dimensions.
//!
//! # Examples
//!
//! ```text
//! herk-tester --type s,d,c,z --dim 100,250x50 --check y
//! herk-tester --type z --layout r,c --trans n,c --align 32 --ref --format json
//! RUST_LOG=debug herk-tester --dim 8x3 --verbose 2
//! ```

use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use herkbench_core::{Idist, Layout, Transpose, Uplo};
use herkbench_tester::params::{parse_idist, parse_real_scalar, parse_seed};
use herkbench_tester::report::{render_json, render_table};
use herkbench_tester::{test_herk, CaseResult, DataType, Dim, Params};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// herk-tester - correctness and throughput test for C := alpha A A^H + beta C
#[derive(Parser)]
#[command(name = "herk-tester")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Data types: s, d, c, z (i is accepted and reported as unsupported)
    #[arg(long = "type", value_delimiter = ',', default_value = "d")]
    datatype: Vec<DataType>,

    /// Layouts: c (column-major), r (row-major)
    #[arg(long, value_delimiter = ',', default_value = "c")]
    layout: Vec<Layout>,

    /// Triangles: l, u
    #[arg(long, value_delimiter = ',', default_value = "l")]
    uplo: Vec<Uplo>,

    /// Transposes: n, t, c
    #[arg(long, value_delimiter = ',', default_value = "n")]
    trans: Vec<Transpose>,

    /// Dimensions as NxK, or N for k = n
    #[arg(long, value_delimiter = ',', default_value = "100")]
    dim: Vec<Dim>,

    /// Scalar alpha; must be real
    #[arg(long, default_value = "3.141592653589793", value_parser = parse_real_scalar, allow_hyphen_values = true)]
    alpha: f64,

    /// Scalar beta; must be real
    #[arg(long, default_value = "2.718281828459045", value_parser = parse_real_scalar, allow_hyphen_values = true)]
    beta: f64,

    /// Round leading dimensions up to a multiple of this
    #[arg(long, default_value_t = 1)]
    align: usize,

    /// 1 = shape/norm summary, 2 = also dump matrices
    #[arg(short, long, default_value_t = 0)]
    verbose: u8,

    /// Cache flush size in MiB before each timed call (0 disables, at most 4096)
    #[arg(long, default_value_t = 20)]
    cache: usize,

    /// Also time the reference kernel
    #[arg(long = "ref")]
    run_ref: bool,

    /// Score against the reference (y/n)
    #[arg(long, action = ArgAction::Set, default_value = "y", value_parser = BoolishValueParser::new())]
    check: bool,

    /// Error threshold in units of the unit roundoff
    #[arg(long, default_value_t = 3.0)]
    tol: f64,

    /// LAPACK seed a,b,c,d (entries 0..=4095, last odd)
    #[arg(long, default_value = "0,0,0,1", value_parser = parse_seed)]
    seed: [i32; 4],

    /// Distribution: 1 = uniform (0,1), 2 = uniform (-1,1), 3 = normal
    #[arg(long, default_value = "1", value_parser = parse_idist)]
    idist: Idist,

    /// Run each case this many times
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Cli {
    /// One `Params` per point of the cartesian product, dimensions innermost.
    fn cases(&self) -> Vec<Params> {
        let mut cases = Vec::new();
        for &datatype in &self.datatype {
            for &layout in &self.layout {
                for &uplo in &self.uplo {
                    for &trans in &self.trans {
                        for &dim in &self.dim {
                            cases.push(Params {
                                datatype,
                                layout,
                                uplo,
                                trans,
                                dim,
                                alpha: self.alpha,
                                beta: self.beta,
                                align: self.align,
                                verbose: self.verbose,
                                cache: self.cache,
                                run_ref: self.run_ref,
                                check: self.check,
                                tol: self.tol,
                                seed: self.seed,
                                idist: self.idist,
                            });
                        }
                    }
                }
            }
        }
        cases
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut results = Vec::new();
    for params in cli.cases() {
        for _ in 0..cli.repeat {
            let (report, failure) = match test_herk(&params) {
                Ok(report) => (Some(report), None),
                Err(e) => {
                    log::error!("{}herk n={} k={}: {}", params.datatype, params.dim.n, params.dim.k, e);
                    (None, Some(e.to_string()))
                }
            };
            results.push(CaseResult {
                params: params.clone(),
                report,
                failure,
            });
        }
    }

    match cli.format {
        OutputFormat::Table => print!("{}", render_table(&results)),
        OutputFormat::Json => match render_json(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: serializing results: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if results.iter().all(CaseResult::passed) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
