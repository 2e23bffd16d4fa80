use crate::errors::{Error, Result};
use encoding::all::UTF_8;
use encoding::{DecoderTrap, Encoding};
use std::process::Command;

const CONFIG_PROGRAM: &str = "libpng-config";

pub struct CodecFlags {
	flags: Vec<String>,
}

impl CodecFlags {
	pub fn detect() -> Result<Self> {
		let output = Command::new(CONFIG_PROGRAM)
			.arg("--cflags")
			.arg("--ldflags")
			.output()
			.map_err(|err| Error::failed_to_execute(CONFIG_PROGRAM, err))?;
		if !output.status.success() {
			return Err(Error::execution_failed(CONFIG_PROGRAM));
		}

		let raw = UTF_8
			.decode(&output.stdout, DecoderTrap::Ignore)
			.map_err(|err| Error::failed_to_convert_utf8(&output.stdout, err))?;
		Ok(CodecFlags::from_raw(&raw))
	}

	pub fn from_raw(raw: &str) -> Self {
		CodecFlags {
			flags: raw.split_whitespace().map(str::to_string).collect(),
		}
	}

	pub fn args(&self) -> &[String] {
		&self.flags
	}
}
