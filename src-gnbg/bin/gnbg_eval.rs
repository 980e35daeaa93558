use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use gnbg::{Gnbg, InstanceLocator};

/// CLI arguments for evaluating points on a GNBG instance
#[derive(Parser, Debug)]
#[command(name = "gnbg_eval")]
#[command(about = "Evaluate points on a GNBG benchmark instance and print the bookkeeping summary")]
struct Args {
	/// Directory holding the f<N>.txt instance files
	#[arg(short, long, default_value = ".")]
	dir: PathBuf,

	/// Problem number, loads f<N>.txt
	#[arg(short, long)]
	problem: usize,

	/// Point to evaluate as comma-separated coordinates (repeatable)
	#[arg(long = "point", allow_hyphen_values = true)]
	points: Vec<String>,

	/// Also evaluate the known optimum position
	#[arg(long)]
	optimum: bool,
}

fn parse_point(s: &str) -> Result<Vec<f64>, String> {
	s.split(',')
		.map(|v| {
			let v = v.trim();
			v.parse::<f64>().map_err(|_| format!("invalid coordinate '{}' in point '{}'", v, s))
		})
		.collect()
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();
	let args = Args::parse();

	let locator = InstanceLocator::new(&args.dir);
	let mut f = Gnbg::from_problem(args.problem, &locator)?;
	println!(
		"problem {}: D={} N={} budget={} box=[{}, {}] optimum={}",
		args.problem,
		f.dimension(),
		f.component_count(),
		f.max_evaluations(),
		f.min_coordinate(),
		f.max_coordinate(),
		f.optimum_value()
	);

	let mut points = args
		.points
		.iter()
		.map(|s| parse_point(s))
		.collect::<Result<Vec<_>, _>>()?;
	if args.optimum {
		points.push(f.optimum_position().to_vec());
	}

	for x in &points {
		let value = f.try_fitness(x)?;
		println!("f({:?}) = {:.16e}", x, value);
	}

	println!("{}", f.summary().to_json()?);
	Ok(())
}
