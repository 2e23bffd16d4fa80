use crate::errors::{Error, Result};
use flate2::read::GzDecoder;
use std::env;
use std::path::Path;
use tar::Archive;

pub const TOOLKIT_VERSION: &str = "14.0.0";

const RELEASE_COMMIT: &str = "6b9ed2afd1d6d0badf04986602c943e287d44e46";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostOs {
	Darwin,
	Linux,
}

impl HostOs {
	pub fn current() -> Result<Self> {
		match env::consts::OS {
			"linux" => Ok(HostOs::Linux),
			"macos" => Ok(HostOs::Darwin),
			other => Err(Error::unsupported_host(other)),
		}
	}

	pub fn distribution_name(self) -> String {
		format!("Halide-{}-x86-64-{}", TOOLKIT_VERSION, self.archive_label())
	}

	pub fn archive_url(self) -> String {
		format!(
			"https://github.com/halide/Halide/releases/download/v{}/{}-{}.tar.gz",
			TOOLKIT_VERSION,
			self.distribution_name(),
			RELEASE_COMMIT,
		)
	}

	fn archive_label(self) -> &'static str {
		match self {
			HostOs::Darwin => "osx",
			HostOs::Linux => "linux",
		}
	}
}

pub fn is_installed(os: HostOs) -> bool {
	Path::new(&os.distribution_name()).is_dir()
}

pub fn fetch(os: HostOs) -> Result<()> {
	let url = os.archive_url();
	let response = ureq::get(&url)
		.call()
		.map_err(|err| Error::failed_to_download(&url, err))?;

	let mut archive = Archive::new(GzDecoder::new(response.into_reader()));
	archive
		.unpack(".")
		.map_err(|err| Error::failed_to_unpack(&url, err))?;

	Ok(())
}
