//! Per-plugin resolution records.

use crate::{ Guid, PluginInfo, RejectionReason, SkipReason };



/// Where a plugin stands in the resolution process.
///
/// Records start [`Unresolved`]( Self::Unresolved ) unless graph construction
/// already rejected them. Only the resolver moves them into a terminal state.
#[derive( Debug, Clone, PartialEq, Eq, Default )]
pub enum ResolutionState {
	#[default] Unresolved,
	Loadable,
	Rejected( RejectionReason ),
	/// Loadable, but not meant for the current host process.
	Skipped( SkipReason ),
}

impl ResolutionState {
	#[inline] pub fn is_unresolved( &self ) -> bool { matches!( self, Self::Unresolved )}
	#[inline] pub fn is_loadable( &self ) -> bool { matches!( self, Self::Loadable )}

	/// Rejected or skipped: either way the plugin won't be instantiated in this run.
	#[inline] pub fn is_excluded( &self ) -> bool { matches!( self, Self::Rejected( _ ) | Self::Skipped( _ ))}
}

/// An extracted plugin: its validated metadata, its loadable unit, and its state.
#[derive( Debug )]
pub struct PluginRecord<U> {
	info: PluginInfo,
	unit: U,
	state: ResolutionState,
}

impl<U> PluginRecord<U> {

	pub(crate) fn new( info: PluginInfo, unit: U ) -> Self {
		Self { info, unit, state: ResolutionState::Unresolved }
	}

	#[inline] pub fn info( &self ) -> &PluginInfo { &self.info }
	#[inline] pub fn guid( &self ) -> &Guid { self.info.guid() }
	#[inline] pub fn state( &self ) -> &ResolutionState { &self.state }
	#[inline] pub fn unit( &self ) -> &U { &self.unit }

	pub(crate) fn set_state( &mut self, state: ResolutionState ) { self.state = state }

	/// Rejects the record unless it already reached a terminal state.
	///
	/// The first reason recorded is the one that is kept.
	pub(crate) fn reject( &mut self, reason: RejectionReason ) {
		if !self.state.is_excluded() { self.state = ResolutionState::Rejected( reason ) }
	}

	pub fn into_parts( self ) -> ( PluginInfo, U, ResolutionState ) {
		( self.info, self.unit, self.state )
	}

}
