//! Dependency graph construction.
//!
//! The [`DependencyGraph`] holds one [`PluginRecord`] per GUID and a list of
//! outgoing edges per record, pointing from the declaring plugin to the plugin it
//! depends on. Building the graph already settles everything that can be decided
//! from presence and versions alone: duplicate identities, missing hard
//! dependencies, outdated hard dependencies, and incompatibilities. What remains
//! is left to the [`resolve`]( crate::resolve ) pass.

use std::collections::BTreeMap ;
use std::collections::btree_map::Entry ;
use semver::Version ;
use thiserror::Error ;

use crate::{ DependencyKind, Guid, PluginRecord, RejectionReason, ResolutionState };
use crate::utils::PartialSuccess ;



/// A candidate that reused a GUID already claimed by an earlier candidate.
///
/// The earlier one is kept; this one never enters the graph.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
#[error( "Duplicate identity '{guid}' at {location}, keeping {kept_location}" )]
pub struct DuplicateIdentity {
	pub guid: Guid,
	pub location: String,
	pub kept_location: String,
}

/// A dependency edge from the declaring plugin to `target`.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Edge {
	target: Guid,
	kind: DependencyKind,
}

impl Edge {
	#[inline] pub fn target( &self ) -> &Guid { &self.target }
	#[inline] pub fn kind( &self ) -> DependencyKind { self.kind }
	#[inline] pub fn is_hard( &self ) -> bool { self.kind == DependencyKind::Hard }
}

/// Directed plugin dependency graph keyed by GUID.
///
/// Nodes are stored in GUID order, so every traversal is independent of the order
/// in which candidates were discovered.
#[derive( Debug )]
pub struct DependencyGraph<U> {
	nodes: BTreeMap<Guid, PluginRecord<U>>,
	edges: BTreeMap<Guid, Vec<Edge>>,
	duplicates: Vec<DuplicateIdentity>,
}

impl<U> DependencyGraph<U> {

	/// Builds the graph from records in discovery order.
	///
	/// # Partial Success
	/// Duplicate GUIDs don't fail the build. The first record with a given GUID is
	/// kept and later ones are dropped and returned as [`DuplicateIdentity`] errors
	/// (they are also remembered by the graph so they end up in the load plan).
	/// Dependents of a duplicated GUID resolve against the kept record.
	pub fn build( records: impl IntoIterator<Item = PluginRecord<U>> ) -> PartialSuccess<Self, DuplicateIdentity> {

		let mut nodes = BTreeMap::new();
		let mut duplicates = Vec::new();

		for record in records {
			match nodes.entry( record.guid().clone() ) {
				Entry::Vacant( entry ) => { entry.insert( record ); },
				Entry::Occupied( entry ) => {
					let duplicate = DuplicateIdentity {
						guid: entry.key().clone(),
						location: record.info().location().to_string(),
						kept_location: entry.get().info().location().to_string(),
					};
					tracing::warn!( "{}", duplicate );
					duplicates.push( duplicate );
				},
			}
		}

		let versions = nodes.iter()
			.map(|( guid, record ): ( &Guid, &PluginRecord<U> )| ( guid.clone(), record.info().metadata().version().clone() ))
			.collect::<BTreeMap<_, _>>();

		let edges = nodes.iter_mut()
			.map(|( guid, record )| ( guid.clone(), connect( record, &versions )))
			.collect();

		let graph = Self { nodes, edges, duplicates: duplicates.clone() };
		tracing::debug!( plugins = graph.len(), duplicates = duplicates.len(), "Built dependency graph" );
		( graph, duplicates )

	}

	#[inline] pub fn len( &self ) -> usize { self.nodes.len() }
	#[inline] pub fn is_empty( &self ) -> bool { self.nodes.is_empty() }

	pub fn get( &self, guid: &str ) -> Option<&PluginRecord<U>> { self.nodes.get( guid ) }

	pub fn contains( &self, guid: &str ) -> bool { self.nodes.contains_key( guid ) }

	/// Records in GUID order.
	pub fn records( &self ) -> impl Iterator<Item = &PluginRecord<U>> { self.nodes.values() }

	/// GUIDs in order.
	pub fn guids( &self ) -> impl Iterator<Item = &Guid> { self.nodes.keys() }

	/// Outgoing edges of `guid`, in declaration order.
	pub fn edges( &self, guid: &str ) -> &[Edge] {
		self.edges.get( guid ).map_or( &[], Vec::as_slice )
	}

	pub fn hard_edges<'a>( &'a self, guid: &str ) -> impl Iterator<Item = &'a Edge> {
		self.edges( guid ).iter().filter(| edge | edge.is_hard() )
	}

	pub fn state( &self, guid: &str ) -> Option<&ResolutionState> {
		self.nodes.get( guid ).map( PluginRecord::state )
	}

	#[inline] pub fn duplicates( &self ) -> &[DuplicateIdentity] { &self.duplicates }

	pub(crate) fn set_state( &mut self, guid: &str, state: ResolutionState ) {
		if let Some( record ) = self.nodes.get_mut( guid ) { record.set_state( state ) }
	}

	/// Consumes the graph, yielding every kept record keyed by GUID.
	pub fn into_records( self ) -> BTreeMap<Guid, PluginRecord<U>> { self.nodes }

}

/// Derives the outgoing edges of `record` and rejects it on the first hard
/// dependency that is missing or too old, or on a present incompatibility.
fn connect<U>( record: &mut PluginRecord<U>, versions: &BTreeMap<Guid, Version> ) -> Vec<Edge> {

	let mut edges = Vec::with_capacity( record.info().dependencies().len() );
	let mut rejection = None ;

	for dependency in record.info().dependencies() {
		let target = dependency.guid();
		match ( versions.get( target ), dependency.kind() ) {
			( None, DependencyKind::Hard ) => if rejection.is_none() {
				rejection = Some( RejectionReason::MissingHardDependency { dependency: target.clone() });
			},
			( None, DependencyKind::Soft ) => {},
			( Some( found ), kind ) => match ( dependency.min_version().filter(| _ | !dependency.accepts( found )), kind ) {
				( None, kind ) => edges.push( Edge { target: target.clone(), kind }),
				( Some( required ), DependencyKind::Hard ) => if rejection.is_none() {
					rejection = Some( RejectionReason::IncompatibleVersion {
						dependency: target.clone(),
						required: required.clone(),
						found: found.clone(),
					});
				},
				( Some( _ ), DependencyKind::Soft ) => tracing::debug!(
					plugin = %record.guid(), dependency = %target,
					"Soft dependency is older than requested, not ordering against it"
				),
			},
		}
	}

	if rejection.is_none() {
		rejection = record.info().incompatibilities().iter()
			.find(| guid | versions.contains_key( *guid ))
			.map(| guid | RejectionReason::Incompatible { plugin: guid.clone() });
	}

	if let Some( reason ) = rejection {
		tracing::warn!( plugin = %record.guid(), "Rejected: {}", reason );
		record.reject( reason );
	}

	edges

}
