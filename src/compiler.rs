use crate::codec::CodecFlags;
use crate::configuration::Configuration;
use crate::errors::{Error, Result};
use crate::target::TargetSpec;
use crate::toolkit::HostOs;
use std::path::{Path, PathBuf};
use std::process::Command;

const COMPILER: &str = "clang++";

const DEFAULT_JPEG_PATH: &str = "/usr/local/opt/jpeg";

pub struct GeneratorCompiler<'a> {
	codec_flags: &'a CodecFlags,
	jpeg_path: PathBuf,
	toolkit_path: PathBuf,
}

impl<'a> GeneratorCompiler<'a> {
	pub fn new(configuration: &Configuration, codec_flags: &'a CodecFlags) -> Result<Self> {
		let toolkit_path = match configuration.paths.get("halide") {
			Some(path) => path.clone(),
			None => PathBuf::from(HostOs::current()?.distribution_name()),
		};
		let jpeg_path = configuration
			.paths
			.get("jpeg")
			.cloned()
			.unwrap_or_else(|| PathBuf::from(DEFAULT_JPEG_PATH));

		Ok(GeneratorCompiler {
			codec_flags,
			jpeg_path,
			toolkit_path,
		})
	}

	pub fn compile(&self, spec: &TargetSpec, driver_source: &Path) -> Result<()> {
		let mut compilation = Command::new(COMPILER)
			.args(self.arguments(spec, driver_source))
			.spawn()
			.map_err(|err| Error::failed_to_execute(COMPILER, err))?;

		let status = compilation
			.wait()
			.map_err(|err| Error::failed_to_execute(COMPILER, err))?;
		if !status.success() {
			return Err(Error::execution_failed(COMPILER));
		}

		Ok(())
	}

	fn arguments(&self, spec: &TargetSpec, driver_source: &Path) -> Vec<String> {
		let mut arguments = vec![
			"-g".to_string(),
			"-I.".to_string(),
			format!("-I{}", self.toolkit_path.join("include").to_string_lossy()),
			format!(
				"-I{}",
				self.toolkit_path
					.join("share")
					.join("Halide")
					.join("tools")
					.to_string_lossy()
			),
			format!("-L{}", self.toolkit_path.join("lib").to_string_lossy()),
		];
		arguments.extend(self.codec_flags.args().iter().cloned());
		arguments.push(format!("-L{}", self.jpeg_path.join("lib").to_string_lossy()));
		arguments.push(format!(
			"-I{}",
			self.jpeg_path.join("include").to_string_lossy()
		));
		arguments.extend(
			["-ljpeg", "-lHalide", "-lpthread", "-ldl", "-lz", "-std=c++17"]
				.iter()
				.map(|flag| flag.to_string()),
		);
		arguments.push("-o".to_string());
		arguments.push(spec.generator_executable.to_string_lossy().to_string());
		if let Some(kernel_source) = &spec.kernel_source {
			arguments.push(kernel_source.to_string_lossy().to_string());
		}
		arguments.push(driver_source.to_string_lossy().to_string());
		arguments
	}
}
