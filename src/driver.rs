use crate::errors::{Error, Result};
use crate::target::TargetSpec;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile};
use tera::{Context, Tera};

template_enum! {
	Export: "export",
	Runtime: "runtime",
}

pub struct DriverRenderer {
	tera: Tera,
}

impl DriverRenderer {
	pub fn new() -> Result<Self> {
		let mut tera = Tera::default();

		tera.add_raw_templates(Template::as_array())
			.map_err(|err| Error::failed_to_parse(err))?;

		Ok(DriverRenderer { tera })
	}

	pub fn render(&self, spec: &TargetSpec) -> Result<String> {
		let name = spec.template.name();
		let context = Context::from_serialize(spec)
			.map_err(|err| Error::failed_to_render_template(name, err))?;
		self.tera
			.render(name, &context)
			.map_err(|err| Error::failed_to_render_template(name, err))
	}
}

pub struct DriverSources {
	files: Vec<NamedTempFile>,
}

impl DriverSources {
	pub fn new() -> Self {
		DriverSources { files: Vec::new() }
	}

	pub fn add(&mut self, contents: &str) -> Result<PathBuf> {
		let mut file = Builder::new()
			.prefix("driver")
			.suffix(".cpp")
			.tempfile()
			.map_err(Error::failed_to_create_temporary_file)?;
		file.write_all(contents.as_bytes())
			.map_err(|err| Error::failed_to_write(file.path(), err))?;

		let path = file.path().to_path_buf();
		self.files.push(file);
		Ok(path)
	}
}
