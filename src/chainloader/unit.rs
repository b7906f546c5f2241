use crate::{ ChainloadContext, ConfigStore, LogSource, PluginInfo };



/// Everything a plugin receives when it is constructed.
///
/// `I` is the instance type of the run, so a plugin can reach the instances of
/// the plugins loaded before it through [`context`]( Self::context ).
#[derive( Debug )]
pub struct PluginInit<'a, I> {
	/// The plugin's own metadata.
	pub info: &'a PluginInfo,
	/// Log source named after the plugin.
	pub logger: LogSource,
	/// The plugin's config store. Nothing is written to disk unless it is saved.
	pub config: Box<dyn ConfigStore>,
	/// The run the plugin is being loaded in.
	pub context: &'a ChainloadContext<I>,
}

/// A loadable plugin unit constructing into `I`.
///
/// Implemented for any `FnOnce( PluginInit<I> ) -> Result<I, E>`, so plain
/// closures and boxed constructors work as units.
pub trait PluginUnit<I> {
	/// Constructor failure, reported as the cause of an instantiation failure.
	type Error: std::fmt::Display ;

	/// Constructs the plugin.
	///
	/// # Errors
	/// Any error is contained to this plugin: it is reported and the chainload
	/// continues with the next one. Panics are contained the same way.
	fn instantiate( self, init: PluginInit<'_, I> ) -> Result<I, Self::Error> ;
}

impl<F, I, E> PluginUnit<I> for F
where
	F: FnOnce( PluginInit<'_, I> ) -> Result<I, E>,
	E: std::fmt::Display,
{
	type Error = E ;
	fn instantiate( self, init: PluginInit<'_, I> ) -> Result<I, E> { self( init ) }
}
