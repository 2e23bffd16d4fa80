use std::fs;
use std::path::PathBuf;

pub const GEN_DIRECTORY: &str = "gen";
pub const INCLUDE_DIRECTORY: &str = "include";
pub const LIB_DIRECTORY: &str = "lib";

pub const OUTPUT_DIRECTORIES: [&str; 3] = [GEN_DIRECTORY, INCLUDE_DIRECTORY, LIB_DIRECTORY];

lazy_static! {
	pub static ref USER_SETTINGS_DIRECTORY: PathBuf = {
		let p = dirs::home_dir().unwrap().join(".halide-gen");
		fs::create_dir_all(&p).unwrap();
		p
	};
}
