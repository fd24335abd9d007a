use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use hookgen::util::{init_logging, log_level};
use hookgen::HookgenError;
use tracing::debug;

const USAGE: &str = "Usage: hookgen <required: function sig>
Example: hookgen \"il2cpp:000000018077F4B0; void __stdcall f_name(ComplexType * this, int a, float* b)\"";

#[derive(Parser, Debug)]
#[command(name = "hookgen")]
#[command(about = "Generate function hook boilerplate from decompiler signature lines", long_about = None)]
#[command(version)]
struct Cli {
	/// Signature lines, e.g. `il2cpp:000000018077F4B0; void __stdcall Foo__Bar(int32_t id, const MethodInfo* method)`
	signatures: Vec<String>,

	/// Module image base subtracted from addresses (hexadecimal)
	#[arg(long, value_parser = parse_hex, default_value = "0x180000000")]
	image_base: u64,

	/// Logging macro called by hook stubs
	#[arg(long, default_value = "LOG")]
	log_macro: String,

	/// Render non-basic parameter types as `void`
	#[arg(long)]
	erase_opaque_types: bool,

	/// Enable debug logging on stderr
	#[arg(short, long)]
	verbose: bool,
}

fn parse_hex(text: &str) -> Result<u64, String> {
	let digits = text
		.strip_prefix("0x")
		.or_else(|| text.strip_prefix("0X"))
		.unwrap_or(text);
	u64::from_str_radix(digits, 16).map_err(|e| format!("`{text}` is not a hexadecimal number: {e}"))
}

fn run(cli: &Cli) -> Result<(), HookgenError> {
	let emitter = hookgen::new()
		.image_base(cli.image_base)
		.log_macro(cli.log_macro.as_str())
		.erase_opaque_types(cli.erase_opaque_types)
		.build()?;
	debug!("Using {:?}", emitter);

	let output = emitter.generate_batch(&cli.signatures)?;

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(output.as_bytes())?;
	stdout.flush()?;
	Ok(())
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	if cli.signatures.is_empty() {
		println!("{USAGE}");
		return ExitCode::SUCCESS;
	}

	init_logging(cli.verbose);
	debug!("Log level: {}", log_level());

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error[{}]: {}", err.kind(), err);
			ExitCode::FAILURE
		},
	}
}
