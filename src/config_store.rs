//! Per-plugin configuration stores.
//!
//! Every plugin gets its own store at `<config root>/<GUID>.cfg`. Stores are lazy:
//! constructing one touches nothing on disk, an existing file is read on first
//! access, and a file is only written when [`ConfigStore::save`] is called.
//!
//! Plugins that want something other than the default [`ConfigFile`] declare a
//! config type by name; the name is looked up in the [`ConfigVariants`] registry.

use std::collections::{ BTreeMap, HashMap };
use std::path::{ Path, PathBuf };
use serde::{ Deserialize, Serialize };
use thiserror::Error ;

use crate::{ PluginInfo, PluginMetadata };



/// Errors raised while reading or writing a config store.
#[derive( Debug, Error )]
pub enum ConfigError {
	#[error( "Failed to read {}: {source}", .path.display() )]
	Read { path: PathBuf, source: std::io::Error },
	#[error( "Failed to write {}: {source}", .path.display() )]
	Write { path: PathBuf, source: std::io::Error },
	#[error( "Malformed config file {}: {source}", .path.display() )]
	Parse { path: PathBuf, source: toml::de::Error },
	#[error( "Failed to serialise config: {0}" )]
	Serialise( #[from] toml::ser::Error ),
}

/// Settings storage bound to a single plugin.
pub trait ConfigStore: std::fmt::Debug {

	/// Where this store persists its settings.
	fn path( &self ) -> &Path ;

	/// Reads a value.
	///
	/// # Errors
	/// Fails if an existing backing file can't be read or parsed.
	fn get( &mut self, section: &str, key: &str ) -> Result<Option<String>, ConfigError> ;

	/// Sets a value in memory. Nothing is persisted until [`save`]( Self::save ).
	///
	/// # Errors
	/// Fails if an existing backing file can't be read or parsed.
	fn set( &mut self, section: &str, key: &str, value: String ) -> Result<(), ConfigError> ;

	/// Persists the current settings, creating the file and its directory if needed.
	///
	/// # Errors
	/// Fails on I/O or serialisation errors.
	fn save( &mut self ) -> Result<(), ConfigError> ;

}

#[derive( Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize )]
#[serde( transparent )]
struct Sections( BTreeMap<String, BTreeMap<String, String>> );

/// The default store: a TOML file of string values grouped in sections.
#[derive( Debug )]
pub struct ConfigFile {
	path: PathBuf,
	owner: PluginMetadata,
	sections: Option<Sections>,
}

impl ConfigFile {

	/// Creates a store for `owner` at `path` without touching the filesystem.
	pub fn new( path: impl Into<PathBuf>, owner: PluginMetadata ) -> Self {
		Self { path: path.into(), owner, sections: None }
	}

	/// The plugin this store belongs to.
	#[inline] pub fn owner( &self ) -> &PluginMetadata { &self.owner }

	fn sections( &mut self ) -> Result<&mut Sections, ConfigError> {
		if self.sections.is_none() {
			self.sections = Some( load( &self.path )? );
		}
		Ok( self.sections.get_or_insert_with( Sections::default ))
	}

}

fn load( path: &Path ) -> Result<Sections, ConfigError> {
	match std::fs::read_to_string( path ) {
		Ok( contents ) => toml::from_str( &contents )
			.map_err(| source | ConfigError::Parse { path: path.to_path_buf(), source }),
		Err( err ) if err.kind() == std::io::ErrorKind::NotFound => Ok( Sections::default() ),
		Err( source ) => Err( ConfigError::Read { path: path.to_path_buf(), source }),
	}
}

impl ConfigStore for ConfigFile {

	fn path( &self ) -> &Path { &self.path }

	fn get( &mut self, section: &str, key: &str ) -> Result<Option<String>, ConfigError> {
		Ok( self.sections()?.0.get( section ).and_then(| entries | entries.get( key )).cloned() )
	}

	fn set( &mut self, section: &str, key: &str, value: String ) -> Result<(), ConfigError> {
		self.sections()?.0.entry( section.to_string() ).or_default().insert( key.to_string(), value );
		Ok(())
	}

	fn save( &mut self ) -> Result<(), ConfigError> {

		let body = toml::to_string( &*self.sections()? )?;
		let contents = format!(
			"## Settings file was created by plugin {} v{}\n## Plugin GUID: {}\n\n{}",
			self.owner.name(), self.owner.version(), self.owner.guid(), body,
		);

		if let Some( parent ) = self.path.parent().filter(| parent | !parent.as_os_str().is_empty() ) {
			std::fs::create_dir_all( parent )
				.map_err(| source | ConfigError::Write { path: self.path.clone(), source })?;
		}
		std::fs::write( &self.path, contents )
			.map_err(| source | ConfigError::Write { path: self.path.clone(), source })

	}

}

/// Builds a config store for a plugin from its path and identity.
pub type ConfigConstructor = Box<dyn Fn( PathBuf, &PluginMetadata ) -> Box<dyn ConfigStore>>;

/// Registry of named config store variants.
///
/// Plugins that declare no config type, or one that isn't registered, get a
/// [`ConfigFile`].
#[derive( Default )]
pub struct ConfigVariants {
	variants: HashMap<String, ConfigConstructor>,
}

impl ConfigVariants {

	pub fn new() -> Self { Self::default() }

	/// Registers `constructor` under `name`, replacing any earlier registration.
	pub fn register(
		mut self,
		name: impl Into<String>,
		constructor: impl Fn( PathBuf, &PluginMetadata ) -> Box<dyn ConfigStore> + 'static,
	) -> Self {
		self.variants.insert( name.into(), Box::new( constructor ));
		self
	}

	pub fn contains( &self, name: &str ) -> bool { self.variants.contains_key( name ) }

	/// Opens the store for `info` under `root`.
	pub fn open( &self, root: &Path, info: &PluginInfo ) -> Box<dyn ConfigStore> {

		let path = root.join( format!( "{}.cfg", info.guid() ));
		let metadata = info.metadata().clone();

		match info.config_variant().map(| name | ( name, self.variants.get( name ))) {
			None => Box::new( ConfigFile::new( path, metadata )),
			Some(( _, Some( constructor ))) => constructor( path, &metadata ),
			Some(( name, None )) => {
				tracing::warn!( plugin = %info.guid(), variant = name, "Unknown config type, using the default config file" );
				Box::new( ConfigFile::new( path, metadata ))
			},
		}

	}

}

impl std::fmt::Debug for ConfigVariants {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		let mut names = self.variants.keys().collect::<Vec<_>>();
		names.sort();
		f.debug_struct( "ConfigVariants" ).field( "variants", &names ).finish()
	}
}

#[cfg( test )]
mod tests {

	use super::* ;
	use semver::Version ;

	fn owner() -> PluginMetadata {
		PluginMetadata::new( "com.example.config", "Config Test", Version::new( 1, 2, 0 ))
	}

	#[test]
	fn nothing_is_written_until_saved() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join( "nested" ).join( "com.example.config.cfg" );

		let mut store = ConfigFile::new( &path, owner() );
		store.set( "General", "Enabled", "true".to_string() ).unwrap();
		assert!( !path.exists() );

		store.save().unwrap();
		assert!( path.exists() );
		let contents = std::fs::read_to_string( &path ).unwrap();
		assert!( contents.starts_with( "## Settings file was created by plugin Config Test v1.2.0" ));
	}

	#[test]
	fn saved_values_are_read_back() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join( "com.example.config.cfg" );

		let mut store = ConfigFile::new( &path, owner() );
		store.set( "General", "Greeting", "hello world".to_string() ).unwrap();
		store.save().unwrap();

		let mut reopened = ConfigFile::new( &path, owner() );
		assert_eq!( reopened.get( "General", "Greeting" ).unwrap().as_deref(), Some( "hello world" ));
		assert_eq!( reopened.get( "General", "Missing" ).unwrap(), None );
		assert_eq!( reopened.get( "Other", "Greeting" ).unwrap(), None );
	}

	#[test]
	fn malformed_file_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join( "broken.cfg" );
		std::fs::write( &path, "[General\nkey = " ).unwrap();

		let mut store = ConfigFile::new( &path, owner() );
		assert!( matches!( store.get( "General", "key" ), Err( ConfigError::Parse { .. })));
	}

}
