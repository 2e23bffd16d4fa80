#[macro_use]
extern crate lazy_static;

macro_rules! template_enum {
	(
		$($variant:ident: $filename:expr),*,
	) => {
		#[derive(Clone, Copy, Debug)]
		pub enum Template {
			$($variant),*
		}

		impl Template {
			fn as_array() -> Vec<(&'static str, &'static str)> {
				vec![
					$((stringify!($variant), include_str!(concat!("templates/", $filename, ".tera")))),*
				]
			}

			fn name(&self) -> &'static str {
				match self {
					$(Template::$variant => stringify!($variant)),*
				}
			}
		}
	};
}

mod codec;
mod commands {
	pub mod fetch;
	pub mod generate;
}
mod compiler;
mod configuration;
mod driver;
mod errors;
mod generate;
mod paths;
mod runner;
mod target;
mod toolkit;

use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
enum Command {
	/// Downloads and unpacks the Halide distribution for the host platform.
	Fetch,
	/// Generates the ahead-of-time compiled artifacts for a kernel.
	Generate {
		export_kind_code: String,
		kernel_name: String,
		kernel_source_path: PathBuf,
	},
}

#[derive(Debug, StructOpt)]
#[structopt(about)]
struct Args {
	#[structopt(subcommand)]
	command: Command,
}

fn main() -> Result<(), String> {
	let args = Args::from_args();

	match args.command {
		Command::Fetch => commands::fetch::execute().map_err(|err| err.to_string()),

		Command::Generate {
			export_kind_code,
			kernel_name,
			kernel_source_path,
		} => commands::generate::execute(&commands::generate::Options {
			export_kind_code: &export_kind_code,
			kernel_name: &kernel_name,
			kernel_source_path: &kernel_source_path,
		})
		.map_err(|err| err.to_string()),
	}
}
