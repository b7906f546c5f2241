//! The outcome of resolution.

use std::collections::BTreeMap ;
use std::sync::Arc ;
use itertools::Itertools ;
use semver::Version ;
use thiserror::Error ;

use crate::Guid ;
use crate::graph::DuplicateIdentity ;



/// Why a plugin was excluded from loading.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum RejectionReason {
	/// A hard dependency is not among the discovered plugins.
	#[error( "Missing hard dependency '{dependency}'" )]
	MissingHardDependency { dependency: Guid },
	/// A hard dependency is present but older than the declared minimum.
	#[error( "Dependency '{dependency}' is version {found}, {required} or newer is required" )]
	IncompatibleVersion { dependency: Guid, required: Version, found: Version },
	/// A plugin this one declared itself incompatible with is present.
	#[error( "Incompatible with '{plugin}'" )]
	Incompatible { plugin: Guid },
	/// Member of a cycle of hard dependencies. Every member shares the same list
	/// of the cycle's GUIDs, sorted.
	#[error( "Dependency cycle between [{}]", join_guids( .cycle ))]
	CyclicDependency { cycle: Arc<[Guid]> },
	/// A hard dependency was itself rejected, skipped, or failed to instantiate.
	#[error( "Dependency '{dependency}' was not loaded" )]
	DependencyRejected { dependency: Guid },
	/// The plugin's own construction failed.
	#[error( "Instantiation failed: {cause}" )]
	InstantiationFailed { cause: String },
}

/// Why a loadable plugin was left out of this run without being rejected.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum SkipReason {
	#[error( "Only runs in [{}], host process is '{host}'", join_names( .required ))]
	ProcessMismatch { required: Vec<String>, host: String },
}

fn join_guids( guids: &[Guid] ) -> String {
	guids.iter().join( ", " )
}

fn join_names( names: &[String] ) -> String {
	names.join( ", " )
}

/// Ordered load sequence plus the reasons for every plugin left out of it.
///
/// Produced once by [`resolve`]( crate::resolve ); immutable afterwards.
#[derive( Debug, Clone, PartialEq, Eq, Default )]
pub struct LoadPlan {
	pub(crate) order: Vec<Guid>,
	pub(crate) rejected: BTreeMap<Guid, RejectionReason>,
	pub(crate) skipped: BTreeMap<Guid, SkipReason>,
	pub(crate) duplicates: Vec<DuplicateIdentity>,
}

impl LoadPlan {

	/// GUIDs to instantiate, dependencies first.
	#[inline] pub fn order( &self ) -> &[Guid] { &self.order }

	#[inline] pub fn rejected( &self ) -> &BTreeMap<Guid, RejectionReason> { &self.rejected }

	#[inline] pub fn skipped( &self ) -> &BTreeMap<Guid, SkipReason> { &self.skipped }

	/// Later candidates that reused an already discovered GUID, in discovery order.
	#[inline] pub fn duplicates( &self ) -> &[DuplicateIdentity] { &self.duplicates }

	pub fn rejection( &self, guid: &str ) -> Option<&RejectionReason> { self.rejected.get( guid ) }

	pub fn skip( &self, guid: &str ) -> Option<&SkipReason> { self.skipped.get( guid ) }

	/// Position of `guid` in the load order, if it is going to be loaded.
	pub fn position( &self, guid: &str ) -> Option<usize> {
		self.order.iter().position(| entry | entry.as_str() == guid )
	}

	pub fn is_loadable( &self, guid: &str ) -> bool { self.position( guid ).is_some() }

}
