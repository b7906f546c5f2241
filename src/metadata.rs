//! Validated plugin metadata.
//!
//! These types are what the rest of the crate works with once a candidate's raw
//! [`Attribute`]( crate::Attribute )s have been extracted. They are immutable after
//! extraction; a plugin receives its own [`PluginInfo`] when it is instantiated.

use semver::Version ;

use crate::Guid ;



/// Identity of a plugin: GUID, display name and version.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PluginMetadata {
	guid: Guid,
	name: String,
	version: Version,
}

impl PluginMetadata {
	/// Creates plugin identity metadata.
	pub fn new( guid: impl Into<Guid>, name: impl Into<String>, version: Version ) -> Self {
		Self { guid: guid.into(), name: name.into(), version }
	}

	#[inline] pub fn guid( &self ) -> &Guid { &self.guid }
	#[inline] pub fn name( &self ) -> &str { &self.name }
	#[inline] pub fn version( &self ) -> &Version { &self.version }
}

impl std::fmt::Display for PluginMetadata {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{} {} ({})", self.name, self.version, self.guid )
	}
}

/// Whether a dependency blocks loading when it can't be satisfied.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum DependencyKind {
	/// The target must be present, recent enough, and load successfully.
	Hard,
	/// The target only has to load first if it is present at all.
	Soft,
}

impl std::fmt::Display for DependencyKind {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		match self {
			Self::Hard => f.write_str( "hard" ),
			Self::Soft => f.write_str( "soft" ),
		}
	}
}

/// A declared dependency on another plugin.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Dependency {
	guid: Guid,
	min_version: Option<Version>,
	kind: DependencyKind,
}

impl Dependency {
	/// Creates a dependency declaration. `None` accepts any version of the target.
	pub fn new( guid: impl Into<Guid>, min_version: Option<Version>, kind: DependencyKind ) -> Self {
		Self { guid: guid.into(), min_version, kind }
	}

	#[inline] pub fn guid( &self ) -> &Guid { &self.guid }
	#[inline] pub fn min_version( &self ) -> Option<&Version> { self.min_version.as_ref() }
	#[inline] pub fn kind( &self ) -> DependencyKind { self.kind }
	#[inline] pub fn is_hard( &self ) -> bool { self.kind == DependencyKind::Hard }

	/// Whether `version` meets this declaration's minimum.
	pub fn accepts( &self, version: &Version ) -> bool {
		self.min_version.as_ref().is_none_or(| min | version >= min )
	}

	/// Folds a second declaration on the same target into this one.
	///
	/// Hard wins over soft and the stricter minimum version is kept.
	pub(crate) fn absorb( &mut self, other: Dependency ) {
		if other.kind == DependencyKind::Hard { self.kind = DependencyKind::Hard }
		self.min_version = match ( self.min_version.take(), other.min_version ) {
			( Some( a ), Some( b )) => Some( a.max( b )),
			( a, b ) => a.or( b ),
		};
	}
}

/// Name of a host process a plugin is willing to run in.
///
/// Matching is case-insensitive, so `Game.exe` matches a host running as `game.exe`.
#[derive( Debug, Clone )]
pub struct ProcessRequirement( String );

impl ProcessRequirement {
	pub fn new( process: impl Into<String> ) -> Self { Self( process.into() )}

	#[inline] pub fn name( &self ) -> &str { &self.0 }

	/// Whether the host process `host` satisfies this requirement.
	pub fn matches( &self, host: &str ) -> bool {
		self.0.to_lowercase() == host.to_lowercase()
	}
}

impl PartialEq for ProcessRequirement {
	fn eq( &self, other: &Self ) -> bool { self.matches( &other.0 ) }
}
impl Eq for ProcessRequirement {}

impl std::fmt::Display for ProcessRequirement {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.write_str( &self.0 )
	}
}

/// Everything a plugin declared about itself, in validated form.
///
/// Handed to the plugin as immutable metadata during instantiation and exposed to
/// other plugins through the [`ChainloadContext`]( crate::ChainloadContext ).
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PluginInfo {
	pub(crate) metadata: PluginMetadata,
	pub(crate) dependencies: Vec<Dependency>,
	pub(crate) processes: Vec<ProcessRequirement>,
	pub(crate) incompatibilities: Vec<Guid>,
	pub(crate) config_variant: Option<String>,
	pub(crate) location: String,
}

impl PluginInfo {
	#[inline] pub fn metadata( &self ) -> &PluginMetadata { &self.metadata }
	#[inline] pub fn guid( &self ) -> &Guid { self.metadata.guid() }

	/// Dependencies in declaration order, one entry per target.
	#[inline] pub fn dependencies( &self ) -> &[Dependency] { &self.dependencies }

	/// Host processes this plugin may run in. Empty means any process.
	#[inline] pub fn processes( &self ) -> &[ProcessRequirement] { &self.processes }

	/// Plugins this one refuses to run alongside.
	#[inline] pub fn incompatibilities( &self ) -> &[Guid] { &self.incompatibilities }

	/// Name of the config store variant this plugin asked for, if any.
	#[inline] pub fn config_variant( &self ) -> Option<&str> { self.config_variant.as_deref() }

	/// Where the candidate was discovered (file path or other discovery-specific label).
	#[inline] pub fn location( &self ) -> &str { &self.location }

	/// Whether this plugin may be instantiated inside `host_process`.
	pub fn runs_in( &self, host_process: &str ) -> bool {
		self.processes.is_empty() || self.processes.iter().any(| process | process.matches( host_process ))
	}
}

#[cfg( test )]
mod tests {

	use super::* ;
	use crate::parse_version ;

	#[test]
	fn dependency_accepts_minimum_and_newer() {
		let dependency = Dependency::new( "lib", Some( Version::new( 1, 2, 0 )), DependencyKind::Hard );
		assert!( dependency.accepts( &Version::new( 1, 2, 0 )));
		assert!( dependency.accepts( &Version::new( 2, 0, 0 )));
		assert!( !dependency.accepts( &Version::new( 1, 1, 9 )));
	}

	#[test]
	fn dependency_without_minimum_accepts_anything() {
		let dependency = Dependency::new( "lib", None, DependencyKind::Soft );
		assert!( dependency.accepts( &Version::new( 0, 0, 1 )));
	}

	#[test]
	fn revision_satisfies_its_three_component_minimum() {
		let dependency = Dependency::new( "lib", Some( Version::new( 1, 2, 3 )), DependencyKind::Hard );
		assert!( dependency.accepts( &parse_version( "1.2.3.7" ).unwrap() ));
		assert!( !dependency.accepts( &parse_version( "1.2.2.9" ).unwrap() ));
	}

	#[test]
	fn absorbed_declaration_keeps_the_stricter_terms() {
		let mut dependency = Dependency::new( "lib", Some( Version::new( 1, 0, 0 )), DependencyKind::Soft );
		dependency.absorb( Dependency::new( "lib", Some( Version::new( 1, 5, 0 )), DependencyKind::Hard ));
		assert_eq!( dependency.kind(), DependencyKind::Hard );
		assert_eq!( dependency.min_version(), Some( &Version::new( 1, 5, 0 )));
	}

}
