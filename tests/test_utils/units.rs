#[allow( dead_code )]
mod units {

	use std::path::Path ;
	use chainload::{ Chainloader, ChainloaderConfig, Declared, HostProcess, PluginInit };

	pub const HOST: &str = "game.exe" ;

	/// A boxed constructor, so differently-behaving plugins share one unit type.
	pub type Constructor = Box<dyn FnOnce( PluginInit<'_, String> ) -> Result<String, String>>;

	pub fn unit( constructor: impl FnOnce( PluginInit<'_, String> ) -> Result<String, String> + 'static ) -> Constructor {
		Box::new( constructor )
	}

	/// Constructs into the plugin's own GUID.
	pub fn named() -> Constructor {
		unit(| init | Ok( init.info.guid().to_string() ))
	}

	pub fn failing( cause: &'static str ) -> Constructor {
		unit( move | _ | Err( cause.to_string() ))
	}

	pub fn panicking( message: &'static str ) -> Constructor {
		unit( move | _ | panic!( "{}", message ))
	}

	pub fn candidate( guid: &str, constructor: Constructor ) -> Declared<Constructor> {
		Declared::new( format!( "plugins/{}.dll", guid ), constructor ).plugin( guid, guid.to_uppercase(), "1.0" )
	}

	pub fn plugin( guid: &str ) -> Declared<Constructor> {
		candidate( guid, named() )
	}

	pub fn loader( config_root: &Path ) -> Chainloader {
		Chainloader::new( ChainloaderConfig::new( HostProcess::new( HOST )).with_config_root( config_root ))
	}

	pub fn instances<I: AsRef<str>>( plugins: &[chainload::LoadedPlugin<I>] ) -> Vec<&str> {
		plugins.iter().map(| plugin | plugin.instance.as_ref() ).collect()
	}

}
