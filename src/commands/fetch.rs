use crate::errors::Result;
use crate::toolkit::{self, HostOs};

pub fn execute() -> Result<()> {
	let os = HostOs::current()?;

	if toolkit::is_installed(os) {
		println!("{} is already installed.", os.distribution_name());
		return Ok(());
	}

	println!("Downloading {}...", os.archive_url());
	toolkit::fetch(os)?;
	println!("Installed {}.", os.distribution_name());

	Ok(())
}
