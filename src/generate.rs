use crate::codec::CodecFlags;
use crate::compiler::GeneratorCompiler;
use crate::configuration::Configuration;
use crate::driver::{DriverRenderer, DriverSources};
use crate::errors::{Error, Result};
use crate::paths;
use crate::runner::{self, RunOptions};
use crate::target::{self, TargetSpec};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

pub enum GenerateEvent<'a> {
	CompilingGenerator { name: &'a str },
	RunningGenerator { name: &'a str },
	TargetGenerated { name: &'a str },
	TargetSkipped { error: Error, name: &'a str },
	TargetUpToDate { name: &'a str },
}

pub struct GenerateOptions<'a> {
	pub event_listener: &'a dyn Fn(GenerateEvent),
	pub export_kind_code: &'a str,
	pub kernel_name: &'a str,
	pub kernel_source_path: &'a Path,
}

enum TargetOutcome {
	Generated,
	Skipped(Error),
	UpToDate,
}

pub fn generate(options: &GenerateOptions) -> Result<()> {
	let targets = target::build_targets(
		options.export_kind_code,
		options.kernel_name,
		options.kernel_source_path,
	)?;

	for directory in &paths::OUTPUT_DIRECTORIES {
		fs::create_dir_all(directory)
			.map_err(|err| Error::failed_to_create_directory(*directory, err))?;
	}

	let configuration = Configuration::load()?;
	let renderer = DriverRenderer::new()?;
	let codec_flags = CodecFlags::detect()?;
	let compiler = GeneratorCompiler::new(&configuration, &codec_flags)?;

	let mut driver_sources = DriverSources::new();

	for spec in &targets {
		let outcome = process_target(
			spec,
			&renderer,
			&compiler,
			&mut driver_sources,
			options.event_listener,
		)?;
		match outcome {
			TargetOutcome::Generated => {
				(options.event_listener)(GenerateEvent::TargetGenerated { name: &spec.name })
			}
			TargetOutcome::Skipped(error) => {
				(options.event_listener)(GenerateEvent::TargetSkipped {
					error,
					name: &spec.name,
				})
			}
			TargetOutcome::UpToDate => {
				(options.event_listener)(GenerateEvent::TargetUpToDate { name: &spec.name })
			}
		}
	}

	Ok(())
}

pub fn generate_duration(options: &GenerateOptions) -> Result<Duration> {
	let start = Instant::now();

	generate(options)?;

	let duration = start.elapsed();
	Ok(duration)
}

fn process_target(
	spec: &TargetSpec,
	renderer: &DriverRenderer,
	compiler: &GeneratorCompiler,
	driver_sources: &mut DriverSources,
	event_listener: &dyn Fn(GenerateEvent),
) -> Result<TargetOutcome> {
	if spec.generator_executable.exists() {
		return Ok(TargetOutcome::UpToDate);
	}

	let contents = renderer.render(spec)?;

	let driver_source = match driver_sources.add(&contents) {
		Ok(path) => path,
		Err(error) => return Ok(TargetOutcome::Skipped(error)),
	};

	event_listener(GenerateEvent::CompilingGenerator { name: &spec.name });
	if let Err(error) = compiler.compile(spec, &driver_source) {
		return Ok(TargetOutcome::Skipped(error));
	}

	event_listener(GenerateEvent::RunningGenerator { name: &spec.name });
	if let Err(error) = runner::run(&RunOptions {
		executable_path: &spec.generator_executable,
	}) {
		return Ok(TargetOutcome::Skipped(error));
	}

	Ok(TargetOutcome::Generated)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::io::Write;
	use std::path::PathBuf;

	fn test_compiler_fixture() -> (Configuration, CodecFlags) {
		let mut paths = HashMap::new();
		paths.insert("halide".to_string(), PathBuf::from("missing-toolkit"));
		paths.insert("jpeg".to_string(), PathBuf::from("missing-jpeg"));
		(Configuration { paths }, CodecFlags::from_raw(""))
	}

	#[test]
	fn test_existing_generator_executable_short_circuits() {
		let generator = tempfile::NamedTempFile::new().unwrap();
		let mut spec = TargetSpec::runtime();
		spec.generator_executable = generator.path().to_path_buf();

		let (configuration, codec_flags) = test_compiler_fixture();
		let renderer = DriverRenderer::new().unwrap();
		let compiler = GeneratorCompiler::new(&configuration, &codec_flags).unwrap();
		let mut driver_sources = DriverSources::new();

		let outcome = process_target(&spec, &renderer, &compiler, &mut driver_sources, &|_| {})
			.unwrap();

		assert!(matches!(outcome, TargetOutcome::UpToDate));
	}

	#[test]
	fn test_up_to_date_target_leaves_artifacts_untouched() {
		let mut generator = tempfile::NamedTempFile::new().unwrap();
		generator.write_all(b"generator").unwrap();
		let mut spec = TargetSpec::runtime();
		spec.generator_executable = generator.path().to_path_buf();

		let (configuration, codec_flags) = test_compiler_fixture();
		let renderer = DriverRenderer::new().unwrap();
		let compiler = GeneratorCompiler::new(&configuration, &codec_flags).unwrap();
		let mut driver_sources = DriverSources::new();

		process_target(&spec, &renderer, &compiler, &mut driver_sources, &|_| {}).unwrap();

		assert_eq!(
			std::fs::read(generator.path()).unwrap(),
			b"generator".to_vec()
		);
	}

	#[test]
	fn test_compile_failure_skips_the_target() {
		let directory = tempfile::tempdir().unwrap();
		let mut spec = TargetSpec::runtime();
		spec.generator_executable = directory.path().join("runtime.out");

		let (configuration, codec_flags) = test_compiler_fixture();
		let renderer = DriverRenderer::new().unwrap();
		let compiler = GeneratorCompiler::new(&configuration, &codec_flags).unwrap();
		let mut driver_sources = DriverSources::new();

		let outcome = process_target(&spec, &renderer, &compiler, &mut driver_sources, &|_| {})
			.unwrap();

		assert!(matches!(outcome, TargetOutcome::Skipped(_)));
		assert!(!spec.generator_executable.exists());
	}
}
