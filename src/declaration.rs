//! Raw plugin declarations.
//!
//! A plugin describes itself with a list of [`Attribute`]s, the same way a plugin
//! type would be tagged with declarative attributes in a reflective runtime. Nothing
//! here is validated; that is the job of [`extract`]( crate::extract ). Attributes
//! stack: a candidate may carry any number of dependency, process, and
//! incompatibility attributes, and all of them are collected.

use crate::DependencyKind ;



/// A single raw declaration attached to a plugin candidate.
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Attribute {
	/// Identity of the plugin. Only the first one on a candidate is honoured.
	Plugin { guid: String, name: String, version: String },
	/// Dependency on another plugin, optionally with a minimum version.
	Dependency { guid: String, min_version: Option<String>, kind: DependencyKind },
	/// Host process the plugin is willing to run in.
	Process( String ),
	/// Plugin that must not be present for this one to load.
	Incompatibility( String ),
	/// Config store variant the plugin wants instead of the default one.
	ConfigType( String ),
}

/// A discovered, not yet extracted plugin unit.
///
/// Implement this for whatever the discovery mechanism produces. The chainloader
/// reads the attributes, and only calls [`into_unit`]( Self::into_unit ) once the
/// plugin is known to be loadable.
pub trait Candidate {
	/// The loadable unit, consumed by instantiation.
	type Unit ;

	/// Declarations in the order they were written.
	fn attributes( &self ) -> &[Attribute] ;

	/// Human readable origin of this candidate, used in diagnostics.
	fn location( &self ) -> &str ;

	/// Gives up the declarations and yields the loadable unit.
	fn into_unit( self ) -> Self::Unit ;
}

/// A [`Candidate`] declared in code through builder calls.
///
/// ```
/// use chainload::Declared ;
///
/// let candidate = Declared::new( "plugins/b.dll", () )
/// 	.plugin( "com.example.b", "Plugin B", "1.2" )
/// 	.depends_on_version( "com.example.a", "1.0" )
/// 	.soft_depends_on( "com.example.extras" )
/// 	.process( "game.exe" );
/// # let _ = candidate ;
/// ```
#[derive( Debug, Clone )]
pub struct Declared<U> {
	location: String,
	attributes: Vec<Attribute>,
	unit: U,
}

impl<U> Declared<U> {

	/// Starts an empty declaration for `unit`, discovered at `location`.
	pub fn new( location: impl Into<String>, unit: U ) -> Self {
		Self { location: location.into(), attributes: Vec::new(), unit }
	}

	/// Appends an arbitrary attribute.
	pub fn attribute( mut self, attribute: Attribute ) -> Self {
		self.attributes.push( attribute );
		self
	}

	pub fn plugin( self, guid: impl Into<String>, name: impl Into<String>, version: impl Into<String> ) -> Self {
		self.attribute( Attribute::Plugin { guid: guid.into(), name: name.into(), version: version.into() })
	}

	/// Hard dependency on any version of `guid`.
	pub fn depends_on( self, guid: impl Into<String> ) -> Self {
		self.attribute( Attribute::Dependency { guid: guid.into(), min_version: None, kind: DependencyKind::Hard })
	}

	/// Hard dependency on `guid` at version `min_version` or newer.
	pub fn depends_on_version( self, guid: impl Into<String>, min_version: impl Into<String> ) -> Self {
		self.attribute( Attribute::Dependency { guid: guid.into(), min_version: Some( min_version.into() ), kind: DependencyKind::Hard })
	}

	/// Soft dependency on any version of `guid`.
	pub fn soft_depends_on( self, guid: impl Into<String> ) -> Self {
		self.attribute( Attribute::Dependency { guid: guid.into(), min_version: None, kind: DependencyKind::Soft })
	}

	/// Soft dependency on `guid` at version `min_version` or newer.
	pub fn soft_depends_on_version( self, guid: impl Into<String>, min_version: impl Into<String> ) -> Self {
		self.attribute( Attribute::Dependency { guid: guid.into(), min_version: Some( min_version.into() ), kind: DependencyKind::Soft })
	}

	pub fn process( self, process: impl Into<String> ) -> Self {
		self.attribute( Attribute::Process( process.into() ))
	}

	pub fn incompatible_with( self, guid: impl Into<String> ) -> Self {
		self.attribute( Attribute::Incompatibility( guid.into() ))
	}

	pub fn config_type( self, variant: impl Into<String> ) -> Self {
		self.attribute( Attribute::ConfigType( variant.into() ))
	}

}

impl<U> Candidate for Declared<U> {
	type Unit = U ;
	fn attributes( &self ) -> &[Attribute] { &self.attributes }
	fn location( &self ) -> &str { &self.location }
	fn into_unit( self ) -> U { self.unit }
}
