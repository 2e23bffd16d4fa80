use crate::errors::Result;
use crate::generate::{self, GenerateEvent, GenerateOptions};
use std::path::Path;

pub struct Options<'a> {
	pub export_kind_code: &'a str,
	pub kernel_name: &'a str,
	pub kernel_source_path: &'a Path,
}

pub fn execute(options: &Options) -> Result<()> {
	let event_listener = |event: GenerateEvent| match event {
		GenerateEvent::CompilingGenerator { name } => {
			println!("Compiling generator for {}...", name);
		}

		GenerateEvent::RunningGenerator { name } => {
			println!("Emitting artifacts for {}...", name);
		}

		GenerateEvent::TargetGenerated { name } => {
			println!("Generated {}.", name);
		}

		GenerateEvent::TargetSkipped { error, name } => {
			eprintln!("Skipped {}: {}", name, error);
		}

		GenerateEvent::TargetUpToDate { name } => {
			println!("{} is up to date.", name);
		}
	};

	let duration = generate::generate_duration(&GenerateOptions {
		event_listener: &event_listener,
		export_kind_code: options.export_kind_code,
		kernel_name: options.kernel_name,
		kernel_source_path: options.kernel_source_path,
	})?;

	println!("Generation duration: {:?}.", duration);
	Ok(())
}
