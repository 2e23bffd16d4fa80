use crate::driver::Template;
use crate::errors::{Error, Result};
use crate::paths;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const RUNTIME_TARGET_NAME: &str = "runtime";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ExportKind {
	Func,
	Pipeline,
}

impl ExportKind {
	pub fn from_code(code: &str) -> Result<Self> {
		match code {
			"f" | "func" => Ok(ExportKind::Func),
			"p" | "pipeline" => Ok(ExportKind::Pipeline),
			_ => Err(Error::unknown_export_kind(code)),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct TargetSpec {
	pub assembly_darwin: String,
	pub assembly_linux: String,
	pub bitcode_darwin: String,
	pub bitcode_linux: String,
	pub export_kind: Option<ExportKind>,
	pub generator_executable: PathBuf,
	pub header: String,
	pub interface_header: Option<PathBuf>,
	pub kernel_source: Option<PathBuf>,
	pub name: String,
	pub object_darwin: String,
	pub object_linux: String,
	#[serde(skip)]
	pub template: Template,
}

impl TargetSpec {
	pub fn runtime() -> Self {
		TargetSpec::new(RUNTIME_TARGET_NAME, Template::Runtime, None, None, None)
	}

	pub fn kernel(name: &str, source_path: &Path, export_kind: ExportKind) -> Result<Self> {
		let interface_header = interface_header_path(source_path)?;
		Ok(TargetSpec::new(
			name,
			Template::Export,
			Some(export_kind),
			Some(interface_header),
			Some(source_path.to_path_buf()),
		))
	}

	fn new(
		name: &str,
		template: Template,
		export_kind: Option<ExportKind>,
		interface_header: Option<PathBuf>,
		kernel_source: Option<PathBuf>,
	) -> Self {
		TargetSpec {
			assembly_darwin: format!("{}/lib{}_darwin.s", paths::LIB_DIRECTORY, name),
			assembly_linux: format!("{}/lib{}_linux.s", paths::LIB_DIRECTORY, name),
			bitcode_darwin: format!("{}/lib{}_darwin.bc", paths::LIB_DIRECTORY, name),
			bitcode_linux: format!("{}/lib{}_linux.bc", paths::LIB_DIRECTORY, name),
			export_kind,
			generator_executable: PathBuf::from(format!("{}/{}.out", paths::GEN_DIRECTORY, name)),
			header: format!("{}/{}.h", paths::INCLUDE_DIRECTORY, name),
			interface_header,
			kernel_source,
			name: name.to_string(),
			object_darwin: format!("{}/lib{}_darwin.dylib", paths::LIB_DIRECTORY, name),
			object_linux: format!("{}/lib{}_linux.o", paths::LIB_DIRECTORY, name),
			template,
		}
	}
}

pub fn build_targets(
	export_kind_code: &str,
	kernel_name: &str,
	kernel_source_path: &Path,
) -> Result<Vec<TargetSpec>> {
	let export_kind = ExportKind::from_code(export_kind_code)?;

	if kernel_name == RUNTIME_TARGET_NAME {
		return Err(Error::message(format!(
			"Kernel name '{}' collides with the runtime support target.",
			kernel_name
		)));
	}

	let kernel = TargetSpec::kernel(kernel_name, kernel_source_path, export_kind)?;
	Ok(vec![TargetSpec::runtime(), kernel])
}

fn interface_header_path(source_path: &Path) -> Result<PathBuf> {
	if source_path.file_stem().is_none() {
		return Err(Error::path_has_invalid_file_name(source_path));
	}
	Ok(source_path.with_extension("hpp"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::errors::ErrorKind;

	#[test]
	fn test_export_kind_codes_resolve() {
		assert_eq!(ExportKind::from_code("f").unwrap(), ExportKind::Func);
		assert_eq!(ExportKind::from_code("func").unwrap(), ExportKind::Func);
		assert_eq!(ExportKind::from_code("p").unwrap(), ExportKind::Pipeline);
		assert_eq!(
			ExportKind::from_code("pipeline").unwrap(),
			ExportKind::Pipeline
		);
	}

	#[test]
	fn test_unknown_export_kind_code_is_rejected() {
		let error = ExportKind::from_code("x").unwrap_err();
		match error.kind {
			ErrorKind::UnknownExportKind(code) => assert_eq!(code, "x"),
			kind => panic!("unexpected error kind: {:?}", kind),
		}
	}

	#[test]
	fn test_build_targets_produces_runtime_then_kernel() {
		let targets = build_targets("f", "rotate90", Path::new("rotate.cpp")).unwrap();

		assert_eq!(targets.len(), 2);
		assert_eq!(targets[0].name, "runtime");
		assert_eq!(targets[1].name, "rotate90");
	}

	#[test]
	fn test_kernel_artifact_names() {
		let targets = build_targets("f", "rotate90", Path::new("rotate.cpp")).unwrap();
		let kernel = &targets[1];

		assert_eq!(kernel.object_darwin, "lib/librotate90_darwin.dylib");
		assert_eq!(kernel.object_linux, "lib/librotate90_linux.o");
		assert_eq!(kernel.assembly_darwin, "lib/librotate90_darwin.s");
		assert_eq!(kernel.assembly_linux, "lib/librotate90_linux.s");
		assert_eq!(kernel.bitcode_darwin, "lib/librotate90_darwin.bc");
		assert_eq!(kernel.bitcode_linux, "lib/librotate90_linux.bc");
		assert_eq!(kernel.header, "include/rotate90.h");
		assert_eq!(
			kernel.generator_executable,
			PathBuf::from("gen/rotate90.out")
		);
		assert_eq!(kernel.interface_header, Some(PathBuf::from("rotate.hpp")));
		assert_eq!(kernel.kernel_source, Some(PathBuf::from("rotate.cpp")));
		assert_eq!(kernel.export_kind, Some(ExportKind::Func));
	}

	#[test]
	fn test_runtime_artifact_names() {
		let runtime = TargetSpec::runtime();

		assert_eq!(runtime.object_darwin, "lib/libruntime_darwin.dylib");
		assert_eq!(runtime.object_linux, "lib/libruntime_linux.o");
		assert_eq!(runtime.header, "include/runtime.h");
		assert_eq!(
			runtime.generator_executable,
			PathBuf::from("gen/runtime.out")
		);
		assert_eq!(runtime.export_kind, None);
		assert_eq!(runtime.interface_header, None);
		assert_eq!(runtime.kernel_source, None);
	}

	#[test]
	fn test_naming_is_deterministic() {
		let first = build_targets("p", "blur", Path::new("blur.cpp")).unwrap();
		let second = build_targets("p", "blur", Path::new("blur.cpp")).unwrap();

		assert_eq!(first[1].object_darwin, second[1].object_darwin);
		assert_eq!(first[1].object_linux, second[1].object_linux);
		assert_eq!(first[1].header, second[1].header);
		assert_eq!(first[1].generator_executable, second[1].generator_executable);
	}

	#[test]
	fn test_interface_header_is_derived_beside_source() {
		let targets = build_targets("f", "rotate90", Path::new("kernels/rotate.cpp")).unwrap();
		assert_eq!(
			targets[1].interface_header,
			Some(PathBuf::from("kernels/rotate.hpp"))
		);
	}

	#[test]
	fn test_build_targets_rejects_unknown_export_kind() {
		assert!(build_targets("x", "rotate90", Path::new("rotate.cpp")).is_err());
	}

	#[test]
	fn test_build_targets_rejects_runtime_name_collision() {
		assert!(build_targets("f", "runtime", Path::new("runtime.cpp")).is_err());
	}
}
