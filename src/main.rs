mod args;
mod config;

use std::{
	fs,
	io::{self, BufReader, prelude::*},
	path::Path,
};

use clap::Parser;
use color_eyre::{Result, eyre::WrapErr as _};
use ron::ser::PrettyConfig;
use serde::Serialize as _;
use tapefrick_c_assembler::CAssembler;
use tapefrick_hlir::{BrainHlir, Parser as BrainParser};
use tapefrick_machine::{Program, TapeMachine};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
	EnvFilter,
	fmt::{self, format::FmtSpan},
	prelude::*,
};

use self::{args::Args, config::Config};

#[cfg(target_os = "windows")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
	color_eyre::install()?;

	let args = match Args::try_parse() {
		Ok(a) => a,
		Err(e) => e.exit(),
	};

	let mut config = Config::load(args.config_path())?;
	config.override_with(args.tape_length(), args.dialect());

	install_tracing(&config)?;

	let raw_data = fs::read_to_string(args.file_path())
		.wrap_err_with(|| format!("failed to read {}", args.file_path().display()))?;

	match &args {
		Args::Run { input_path, .. } => run(&raw_data, &config, input_path.as_deref()),
		Args::Emit { output_path, .. } => emit(&raw_data, &config, output_path),
		Args::Dump { output_path, .. } => dump(&raw_data, output_path),
	}
}

fn run(source: &str, config: &Config, input_path: Option<&Path>) -> Result<()> {
	let program = Program::parse(source)?;

	let mut input: Box<dyn Read> = match input_path {
		Some(path) => Box::new(BufReader::new(
			fs::File::open(path)
				.wrap_err_with(|| format!("failed to open input {}", path.display()))?,
		)),
		None => Box::new(io::stdin().lock()),
	};

	let mut stdout = io::stdout().lock();

	let mut machine = TapeMachine::new(config.tape_length);

	let stats = machine.run(&program, &mut *input, &mut stdout)?;

	machine.finish(&mut stdout)?;

	info!(
		end_of_input_reads = stats.end_of_input_reads,
		"ran {} instructions",
		stats.instructions
	);

	Ok(())
}

fn emit(source: &str, config: &Config, output_path: &Path) -> Result<()> {
	let ops = BrainParser::new(source).parse::<Vec<_>>()?;

	let code = CAssembler::new(config.tape_length)
		.with_dialect(config.dialect)
		.assemble(&ops)?;

	fs::write(output_path, code)
		.wrap_err_with(|| format!("failed to write {}", output_path.display()))?;

	info!("wrote {} source to {}", config.dialect, output_path.display());

	Ok(())
}

fn dump(source: &str, output_path: &Path) -> Result<()> {
	let ops = BrainParser::new(source).parse::<Vec<_>>()?;

	serialize_program(&ops, output_path)
}

fn install_tracing(config: &Config) -> Result<()> {
	let filter_layer =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
	let fmt_layer = fmt::layer()
		.with_target(false)
		.with_writer(io::stderr)
		.with_filter(filter_layer);

	let (file_layer, json_file_layer) = match &config.log_dir {
		Some(log_dir) => {
			fs::create_dir_all(log_dir)?;

			let log_file = fs::OpenOptions::new()
				.create(true)
				.write(true)
				.truncate(true)
				.open(log_dir.join("output.log"))
				.wrap_err("failed to create log file")?;

			let json_log_file = fs::OpenOptions::new()
				.create(true)
				.truncate(true)
				.write(true)
				.open(log_dir.join("output.json"))
				.wrap_err("failed to create json log file")?;

			let file_layer = fmt::layer().with_ansi(false).with_writer(log_file);

			let json_file_layer = fmt::layer()
				.with_ansi(false)
				.json()
				.flatten_event(true)
				.with_span_events(FmtSpan::FULL)
				.with_writer(json_log_file);

			(Some(file_layer), Some(json_file_layer))
		}
		None => (None, None),
	};

	tracing_subscriber::registry()
		.with(json_file_layer)
		.with(file_layer)
		.with(fmt_layer)
		.with(ErrorLayer::default())
		.init();

	Ok(())
}

fn serialize_program(ops: &[BrainHlir], output_path: &Path) -> Result<()> {
	let mut output = String::new();
	let mut serializer = ron::Serializer::with_options(
		&mut output,
		Some(PrettyConfig::new().separate_tuple_members(true)),
		&ron::Options::default(),
	)?;

	ops.serialize(&mut serializer)?;

	fs::write(output_path, output)
		.wrap_err_with(|| format!("failed to write {}", output_path.display()))?;

	Ok(())
}
