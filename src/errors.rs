use std::convert::Into;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use tera;

#[derive(Debug)]
pub enum ErrorKind {
	ExecutionFailed(PathBuf),
	FailedToConvertUTF8(Vec<u8>),
	FailedToCreateDirectory(PathBuf),
	FailedToCreateTemporaryFile,
	FailedToDeserialize(String),
	FailedToDownload(String),
	FailedToExecute(PathBuf),
	FailedToParse(String),
	FailedToRead(PathBuf),
	FailedToRenderTemplate(String),
	FailedToUnpack(String),
	FailedToWrite(PathBuf),
	Message(String),
	PathHasInvalidFileName(PathBuf),
	UnknownExportKind(String),
	UnsupportedHost(String),
}

#[derive(Debug)]
pub struct Error {
	pub kind: ErrorKind,
	source: Option<Box<dyn StdError + Sync + Send>>,
}

impl Error {
	pub fn execution_failed(path: impl Into<PathBuf>) -> Self {
		Error {
			kind: ErrorKind::ExecutionFailed(path.into()),
			source: None,
		}
	}

	pub fn failed_to_convert_utf8(
		contents: &[u8],
		source: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self {
		Error {
			kind: ErrorKind::FailedToConvertUTF8(contents.to_vec()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_create_directory(path: impl Into<PathBuf>, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToCreateDirectory(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_create_temporary_file(source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToCreateTemporaryFile,
			source: Some(source.into()),
		}
	}

	pub fn failed_to_deserialize(
		contents: &str,
		source: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self {
		Error {
			kind: ErrorKind::FailedToDeserialize(contents.to_string()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_download(
		url: impl ToString,
		source: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self {
		Error {
			kind: ErrorKind::FailedToDownload(url.to_string()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_execute(path: impl Into<PathBuf>, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToExecute(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_parse(contents: impl ToString) -> Self {
		Self {
			kind: ErrorKind::FailedToParse(contents.to_string()),
			source: None,
		}
	}

	pub fn failed_to_read(path: impl Into<PathBuf>, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToRead(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_render_template(name: &str, source: tera::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToRenderTemplate(name.to_string()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_unpack(url: impl ToString, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToUnpack(url.to_string()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_write(path: impl Into<PathBuf>, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToWrite(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn message(text: impl ToString) -> Self {
		Self {
			kind: ErrorKind::Message(text.to_string()),
			source: None,
		}
	}

	pub fn path_has_invalid_file_name(path: impl Into<PathBuf>) -> Self {
		Error {
			kind: ErrorKind::PathHasInvalidFileName(path.into()),
			source: None,
		}
	}

	pub fn unknown_export_kind(code: impl ToString) -> Self {
		Error {
			kind: ErrorKind::UnknownExportKind(code.to_string()),
			source: None,
		}
	}

	pub fn unsupported_host(os: impl ToString) -> Self {
		Error {
			kind: ErrorKind::UnsupportedHost(os.to_string()),
			source: None,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match &self.kind {
			ErrorKind::ExecutionFailed(path) => {
				write!(f, "Execution of '{}' failed.", path.to_string_lossy())
			}
			ErrorKind::FailedToConvertUTF8(data) => {
				write!(f, "Failed to convert UTF8 from '{:x?}'.", data)
			}
			ErrorKind::FailedToCreateDirectory(path) => write!(
				f,
				"Failed to create directory '{}'.",
				path.to_string_lossy(),
			),
			ErrorKind::FailedToCreateTemporaryFile => {
				write!(f, "Failed to create temporary file.")
			}
			ErrorKind::FailedToDeserialize(contents) => {
				write!(f, "Failed to deserialize '{}'.", contents)
			}
			ErrorKind::FailedToDownload(url) => write!(f, "Failed to download '{}'.", url),
			ErrorKind::FailedToExecute(path) => {
				write!(f, "Failed to execute '{}'.", path.to_string_lossy())
			}
			ErrorKind::FailedToParse(contents) => write!(f, "Failed to parse '{}'.", contents),
			ErrorKind::FailedToRead(path) => {
				write!(f, "Failed to read '{}'.", path.to_string_lossy())
			}
			ErrorKind::FailedToRenderTemplate(name) => {
				write!(f, "Failed to render template '{}'.", name)
			}
			ErrorKind::FailedToUnpack(url) => write!(f, "Failed to unpack '{}'.", url),
			ErrorKind::FailedToWrite(path) => {
				write!(f, "Failed to write '{}'.", path.to_string_lossy())
			}
			ErrorKind::Message(message) => write!(f, "{}", message),
			ErrorKind::PathHasInvalidFileName(path) => {
				write!(f, "Path '{}' has invalid filename.", path.to_string_lossy())
			}
			ErrorKind::UnknownExportKind(code) => {
				write!(f, "Unknown export kind '{}'.", code)
			}
			ErrorKind::UnsupportedHost(os) => {
				write!(f, "Unsupported host operating system '{}'.", os)
			}
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		self.source
			.as_ref()
			.map(|c| &**c as &(dyn StdError + 'static))
	}
}

impl From<&str> for Error {
	fn from(text: &str) -> Self {
		Self::message(text)
	}
}

impl From<String> for Error {
	fn from(text: String) -> Self {
		Self::message(text)
	}
}

pub type Result<T> = ::std::result::Result<T, Error>;
