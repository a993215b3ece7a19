use clap::Parser;
use lanewise::{
    bench::{
        BenchError, BenchOp, BenchRecord, ElementKind, Sample, Timings, Workload,
        checksums_agree, load_npy_buffer, run_case,
    },
    catalog::{AddOp, MultiplyAddOp, NegateOp, SumOp, SumPairsOp},
    engine::Engine,
    numerics::LaneWidth,
    operators::{AggregateKernel, BinaryKernel, PairAggregateKernel, TernaryKernel, UnaryKernel},
};
use std::path::PathBuf;
use tqdm::tqdm;
use tracing_subscriber::EnvFilter;

/// Throughput sweep of the lane-parallel engine
#[derive(Parser, Debug)]
#[command(name = "lanewise-bench")]
#[command(about = "Benchmarks elementwise and aggregate kernels across lane widths", long_about = None)]
struct Args {
    /// Element type of the buffers (f32, f64, i32, i64)
    #[arg(short, long, default_value = "f32")]
    element: ElementKind,

    /// Buffer lengths to sweep (comma-separated list, e.g., "0,17,1024")
    #[arg(short, long, value_delimiter = ',', default_value = "0,1,15,16,17,1024,1048576")]
    lengths: Vec<usize>,

    /// Lane widths to sweep (comma-separated list of scalar, narrow, mid, wide).
    /// Defaults to scalar plus the widest width of this host.
    #[arg(short, long, value_delimiter = ',')]
    widths: Vec<LaneWidth>,

    /// Operations to sweep (comma-separated list). Defaults to all of them.
    #[arg(short, long, value_delimiter = ',')]
    ops: Vec<BenchOp>,

    /// Timed calls per case
    #[arg(short, long, default_value_t = 100)]
    repetitions: usize,

    /// Seed of the random operands
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Use this `.npy` array as first operand instead of random data (floats only).
    /// Replaces the --lengths sweep.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print one JSON line per case instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), BenchError> {
    const {
        assert!(cfg!(target_endian = "little"));
        // .npy inputs are read as little endian.
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = Args::parse();
    if args.widths.is_empty() {
        args.widths.push(LaneWidth::Scalar);
        let host = LaneWidth::detect();
        if host != LaneWidth::Scalar {
            args.widths.push(host);
        }
    }
    if args.ops.is_empty() {
        args.ops = BenchOp::ALL.to_vec();
    }

    if args.input.is_some() {
        args.element.ensure_loadable()?;
    }

    match args.element {
        ElementKind::F32 => {
            let workloads = float_workloads::<f32>(&args)?;
            sweep(&args, workloads)
        }
        ElementKind::F64 => {
            let workloads = float_workloads::<f64>(&args)?;
            sweep(&args, workloads)
        }
        ElementKind::I32 => {
            let workloads = random_workloads::<i32>(&args);
            sweep(&args, workloads)
        }
        ElementKind::I64 => {
            let workloads = random_workloads::<i64>(&args);
            sweep(&args, workloads)
        }
    }
}

fn random_workloads<T: Sample>(args: &Args) -> Vec<Workload<T>> {
    args.lengths
        .iter()
        .map(|&len| Workload::generate(len, args.seed))
        .collect()
}

fn float_workloads<T>(args: &Args) -> Result<Vec<Workload<T>>, BenchError>
where
    T: Sample + npyz::Deserialize,
{
    match &args.input {
        Some(path) => {
            println!("Loading {}...", path.display());
            let buffer = load_npy_buffer::<T>(path)?;
            println!("Loaded {} elements", buffer.len());
            Ok(vec![Workload::from_buffer(buffer, args.seed)])
        }
        None => Ok(random_workloads(args)),
    }
}

fn sweep<T>(args: &Args, workloads: Vec<Workload<T>>) -> Result<(), BenchError>
where
    T: Sample,
    AddOp: BinaryKernel<T>,
    NegateOp: UnaryKernel<T>,
    MultiplyAddOp: TernaryKernel<T>,
    SumOp: AggregateKernel<T>,
    SumPairsOp: PairAggregateKernel<T>,
{
    if !args.json {
        println!("\nStarting cartesian product sweep:");
        println!("  Element: {}", args.element);
        println!(
            "  Lengths: {:?}",
            workloads.iter().map(Workload::len).collect::<Vec<_>>()
        );
        println!("  Widths: {:?}", args.widths);
        println!("  Ops: {:?}", args.ops);
        println!(
            "  Total jobs: {}",
            workloads.len() * args.ops.len() * args.widths.len()
        );
    }

    let jobs: Vec<(&Workload<T>, BenchOp)> = workloads
        .iter()
        .flat_map(|workload| args.ops.iter().map(move |&op| (workload, op)))
        .collect();

    let mut records = Vec::with_capacity(jobs.len() * args.widths.len());
    let mut totals = vec![Timings::new(); args.widths.len()];
    for (workload, op) in tqdm(jobs.into_iter()) {
        let reference = run_case(
            &Engine::with_width(LaneWidth::Scalar),
            op,
            workload,
            1,
        )?
        .checksum;

        for (&width, total) in args.widths.iter().zip(totals.iter_mut()) {
            let outcome = run_case(&Engine::with_width(width), op, workload, args.repetitions)?;
            if !checksums_agree(op, workload, reference, outcome.checksum) {
                return Err(BenchError::ChecksumMismatch {
                    op,
                    width,
                    expected: reference,
                    actual: outcome.checksum,
                });
            }
            *total = total.merge(&outcome.timings);
            records.push(BenchRecord::new(
                args.element,
                op,
                width,
                width.lanes::<T>(),
                workload.len(),
                &outcome,
            ));
        }
    }

    if args.json {
        for record in &records {
            println!("{}", record.to_json_line()?);
        }
        return Ok(());
    }

    for record in &records {
        println!(
            "{:>12} len={:<9} width={:<6} ({:>2} lanes): {:>12.1} ns/call, {:>8.1} Melem/s, checksum {:.6e}",
            record.op.as_str(),
            record.len,
            record.width.as_str(),
            record.lanes,
            record.nanos_per_call,
            record.elements_per_second / 1e6,
            record.checksum,
        );
    }

    println!();
    for (width, total) in args.widths.iter().zip(&totals) {
        println!(
            "Total at width={}: {} calls in {:.3}s ({:.1} Melem/s)",
            width,
            total.get_calls(),
            total.get_elapsed().as_secs_f64(),
            total.elements_per_second() / 1e6,
        );
    }

    println!("\n==========");
    println!("All jobs completed!");
    println!("==========");
    Ok(())
}
