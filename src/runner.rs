use crate::errors::{Error, Result};
use std::path::Path;
use std::process::Command;

pub struct RunOptions<'a> {
	pub executable_path: &'a Path,
}

pub fn run(options: &RunOptions) -> Result<()> {
	let mut process = Command::new(options.executable_path)
		.spawn()
		.map_err(|err| Error::failed_to_execute(options.executable_path, err))?;

	let status = process
		.wait()
		.map_err(|err| Error::failed_to_execute(options.executable_path, err))?;
	if !status.success() {
		return Err(Error::execution_failed(options.executable_path));
	}

	Ok(())
}
