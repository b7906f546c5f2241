//! Chainloader configuration.

use std::path::{ Path, PathBuf };
use thiserror::Error ;

use crate::ConfigVariants ;



/// Failure to determine the name of the running process.
#[derive( Debug, Error )]
pub enum HostProcessError {
	#[error( "Failed to locate the current executable: {0}" )]
	CurrentExe( #[from] std::io::Error ),
	#[error( "Executable path {} has no file name", .0.display() )]
	NoFileName( PathBuf ),
}

/// Name of the host process plugins are being loaded into, e.g. `game.exe`.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct HostProcess( String );

impl HostProcess {

	pub fn new( name: impl Into<String> ) -> Self { Self( name.into() )}

	/// The file name of the running executable.
	///
	/// # Errors
	/// Fails if the executable path can't be determined.
	pub fn current() -> Result<Self, HostProcessError> {
		let exe = std::env::current_exe()?;
		match exe.file_name() {
			Some( name ) => Ok( Self( name.to_string_lossy().into_owned() )),
			None => Err( HostProcessError::NoFileName( exe )),
		}
	}

	#[inline] pub fn name( &self ) -> &str { &self.0 }

}

impl std::fmt::Display for HostProcess {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.write_str( &self.0 )
	}
}

/// Settings for a [`Chainloader`]( crate::Chainloader ) run.
#[derive( Debug )]
pub struct ChainloaderConfig {
	host_process: HostProcess,
	config_root: PathBuf,
	config_variants: ConfigVariants,
}

impl ChainloaderConfig {

	/// Directory config stores are placed in unless configured otherwise.
	pub const DEFAULT_CONFIG_ROOT: &'static str = "config" ;

	pub fn new( host_process: HostProcess ) -> Self {
		Self {
			host_process,
			config_root: PathBuf::from( Self::DEFAULT_CONFIG_ROOT ),
			config_variants: ConfigVariants::new(),
		}
	}

	/// Places plugin config stores under `root`.
	pub fn with_config_root( mut self, root: impl Into<PathBuf> ) -> Self {
		self.config_root = root.into();
		self
	}

	/// Registers the config store variants plugins may ask for.
	pub fn with_config_variants( mut self, variants: ConfigVariants ) -> Self {
		self.config_variants = variants ;
		self
	}

	#[inline] pub fn host_process( &self ) -> &HostProcess { &self.host_process }
	#[inline] pub fn config_root( &self ) -> &Path { &self.config_root }
	#[inline] pub fn config_variants( &self ) -> &ConfigVariants { &self.config_variants }

}
