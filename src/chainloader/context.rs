use std::collections::BTreeMap ;

use crate::{ Guid, LoadedPlugin, PluginInfo };



/// Read-only view of one chainload run, available to plugins while they are
/// being constructed.
///
/// Holds the metadata of every plugin that entered the dependency graph, whether
/// or not it ends up loading, and owns every plugin instantiated so far. A plugin
/// reaches the dependencies it was loaded after through [`instance`]( Self::instance ).
/// Lives exactly as long as the run that created it.
#[derive( Debug )]
pub struct ChainloadContext<I> {
	plugins: BTreeMap<Guid, PluginInfo>,
	loaded: Vec<LoadedPlugin<I>>,
	positions: BTreeMap<Guid, usize>,
	host_process: String,
}

impl<I> ChainloadContext<I> {

	pub(crate) fn new( plugins: BTreeMap<Guid, PluginInfo>, host_process: impl Into<String> ) -> Self {
		Self { plugins, loaded: Vec::new(), positions: BTreeMap::new(), host_process: host_process.into() }
	}

	/// Metadata of the plugin with `guid`, if it was discovered.
	pub fn plugin( &self, guid: &str ) -> Option<&PluginInfo> { self.plugins.get( guid ) }

	/// Metadata of every discovered plugin, in GUID order.
	pub fn plugins( &self ) -> impl Iterator<Item = &PluginInfo> { self.plugins.values() }

	/// The instance of `guid`, if it has already been constructed in this run.
	pub fn instance( &self, guid: &str ) -> Option<&I> {
		self.positions.get( guid ).map(| &position | &self.loaded[position].instance )
	}

	/// Whether `guid` has already been instantiated in this run.
	pub fn is_loaded( &self, guid: &str ) -> bool { self.positions.contains_key( guid ) }

	/// Instantiated plugins so far, in load order.
	#[inline] pub fn loaded( &self ) -> &[LoadedPlugin<I>] { &self.loaded }

	pub fn loaded_guids( &self ) -> impl Iterator<Item = &Guid> {
		self.loaded.iter().map(| plugin | &plugin.guid )
	}

	#[inline] pub fn host_process( &self ) -> &str { &self.host_process }

	/// Gives up the instantiated plugins, in load order.
	pub fn into_loaded( self ) -> Vec<LoadedPlugin<I>> { self.loaded }

	pub(crate) fn push_loaded( &mut self, guid: Guid, instance: I ) {
		self.positions.insert( guid.clone(), self.loaded.len() );
		self.loaded.push( LoadedPlugin { guid, instance });
	}

}
