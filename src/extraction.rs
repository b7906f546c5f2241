//! Metadata extraction.
//!
//! Turns a [`Candidate`]'s raw [`Attribute`]s into a validated [`PluginRecord`].
//! Identity is mandatory; every other declaration is checked on its own and
//! dropped with a [`DeclarationWarning`] if it is malformed, so that one bad
//! dependency line does not keep an otherwise valid plugin from loading.

use itertools::Itertools ;
use thiserror::Error ;

use crate::{ Attribute, Candidate, Dependency, Guid, PluginInfo, PluginMetadata, PluginRecord, ProcessRequirement };
use crate::version::{ parse_version, VersionError };
use crate::utils::{ Merge, PartialSuccess };



/// Failure to extract a candidate. The candidate can't be identified, so it is
/// reported by location rather than GUID.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum ExtractionError {
	/// No plugin identity attribute was declared at all.
	#[error( "{location}: no plugin identity declared" )]
	MissingIdentity { location: String },
	/// An identity was declared but its GUID, name or version is unusable.
	#[error( "{location}: invalid plugin identity: {reason}" )]
	InvalidIdentity { location: String, reason: IdentityError },
}

impl ExtractionError {
	pub fn location( &self ) -> &str {
		match self {
			Self::MissingIdentity { location } | Self::InvalidIdentity { location, .. } => location,
		}
	}
}

/// Why a declared identity was refused.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum IdentityError {
	#[error( "empty GUID" )] EmptyGuid,
	#[error( "empty name" )] EmptyName,
	#[error( "bad version: {0}" )] Version( #[from] VersionError ),
}

/// A single declaration that was dropped or ignored during extraction.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum DeclarationWarning {
	#[error( "{location}: dropped dependency declaration with empty GUID" )]
	EmptyDependency { location: String },
	#[error( "{location}: dropped dependency on '{guid}': bad minimum version: {error}" )]
	MalformedDependency { location: String, guid: String, error: VersionError },
	#[error( "{location}: dropped dependency of '{guid}' on itself" )]
	SelfDependency { location: String, guid: Guid },
	#[error( "{location}: dropped empty process requirement" )]
	EmptyProcess { location: String },
	#[error( "{location}: dropped empty incompatibility declaration" )]
	EmptyIncompatibility { location: String },
	#[error( "{location}: dropped incompatibility of '{guid}' with itself" )]
	SelfIncompatibility { location: String, guid: Guid },
	#[error( "{location}: ignored config type '{ignored}', already declared '{kept}'" )]
	ConflictingConfigType { location: String, kept: String, ignored: String },
	#[error( "{location}: ignored additional plugin identity '{guid}'" )]
	ExtraIdentity { location: String, guid: String },
}

/// Output of [`extract_all`].
#[derive( Debug )]
pub struct Extracted<U> {
	/// Successfully extracted records, in discovery order.
	pub records: Vec<PluginRecord<U>>,
	/// Candidates that could not be identified.
	pub unidentified: Vec<ExtractionError>,
	/// Declarations dropped from otherwise valid candidates.
	pub warnings: Vec<DeclarationWarning>,
}

/// Extracts a single candidate.
///
/// Consumes the candidate; its unit ends up inside the returned record.
///
/// # Errors
/// Fails with [`ExtractionError`] when the candidate carries no usable identity.
/// Malformed non-identity declarations do not fail extraction: they are dropped
/// and returned alongside the record.
pub fn extract<C: Candidate>( candidate: C ) -> Result<PartialSuccess<PluginRecord<C::Unit>, DeclarationWarning>, ExtractionError> {

	let location = candidate.location().to_string();
	let attributes = candidate.attributes();

	let mut identities = attributes.iter().filter_map(| attribute | match attribute {
		Attribute::Plugin { guid, name, version } => Some(( guid, name, version )),
		_ => None,
	});

	let Some(( guid, name, version )) = identities.next() else {
		return Err( ExtractionError::MissingIdentity { location });
	};
	let metadata = identity( guid, name, version )
		.map_err(| reason | ExtractionError::InvalidIdentity { location: location.clone(), reason })?;

	let extra_identities = identities
		.map(|( guid, _, _ )| DeclarationWarning::ExtraIdentity { location: location.clone(), guid: guid.clone() })
		.collect::<Vec<_>>();

	let ( dependencies, dependency_warnings ) = dependencies( attributes, &location, metadata.guid() );
	let ( processes, process_warnings ) = processes( attributes, &location );
	let ( incompatibilities, incompatibility_warnings ) = incompatibilities( attributes, &location, metadata.guid() );
	let ( config_variant, config_warnings ) = config_variant( attributes, &location );

	let warnings = extra_identities
		.merge_all( dependency_warnings )
		.merge_all( process_warnings )
		.merge_all( incompatibility_warnings )
		.merge_all( config_warnings );
	warnings.iter().for_each(| warning | tracing::warn!( "{}", warning ));

	let info = PluginInfo { metadata, dependencies, processes, incompatibilities, config_variant, location };
	tracing::trace!( plugin = %info.metadata, "Extracted plugin metadata" );

	Ok(( PluginRecord::new( info, candidate.into_unit() ), warnings ))

}

/// Extracts every candidate, keeping discovery order.
///
/// Never fails as a whole: candidates without identity are reported in
/// [`Extracted::unidentified`].
pub fn extract_all<C: Candidate>( candidates: impl IntoIterator<Item = C> ) -> Extracted<C::Unit> {

	let ( extracted, unidentified ) = candidates.into_iter()
		.map( extract )
		.partition_result::<Vec<_>, Vec<_>, _, _>();

	unidentified.iter().for_each(| err | tracing::warn!( "Skipping candidate: {}", err ));

	let ( records, warnings ) = extracted.into_iter()
		.fold(( Vec::new(), Vec::new() ), |( records, warnings ), ( record, record_warnings )| {
			( records.merge( record ), warnings.merge_all( record_warnings ))
		});

	Extracted { records, unidentified, warnings }

}

fn identity( guid: &str, name: &str, version: &str ) -> Result<PluginMetadata, IdentityError> {
	let guid = guid.trim();
	if guid.is_empty() { return Err( IdentityError::EmptyGuid ) }
	let name = name.trim();
	if name.is_empty() { return Err( IdentityError::EmptyName ) }
	Ok( PluginMetadata::new( guid, name, parse_version( version )? ))
}

/// Collects dependency declarations, merging repeated declarations on one target.
fn dependencies( attributes: &[Attribute], location: &str, own_guid: &Guid ) -> PartialSuccess<Vec<Dependency>, DeclarationWarning> {

	let ( parsed, warnings ) = attributes.iter()
		.filter_map(| attribute | match attribute {
			Attribute::Dependency { guid, min_version, kind } => Some( dependency( guid, min_version.as_deref(), *kind, location, own_guid )),
			_ => None,
		})
		.partition_result::<Vec<_>, Vec<_>, _, _>();

	let merged = parsed.into_iter().fold( Vec::<Dependency>::new(), | mut merged, dependency | {
		match merged.iter_mut().find(| existing | existing.guid() == dependency.guid() ) {
			Some( existing ) => existing.absorb( dependency ),
			None => merged.push( dependency ),
		}
		merged
	});

	( merged, warnings )

}

fn dependency(
	guid: &str,
	min_version: Option<&str>,
	kind: crate::DependencyKind,
	location: &str,
	own_guid: &Guid,
) -> Result<Dependency, DeclarationWarning> {

	let guid = guid.trim();
	if guid.is_empty() { return Err( DeclarationWarning::EmptyDependency { location: location.to_string() }) }
	if guid == own_guid.as_str() {
		return Err( DeclarationWarning::SelfDependency { location: location.to_string(), guid: own_guid.clone() });
	}

	let min_version = min_version
		.map( parse_version )
		.transpose()
		.map_err(| error | DeclarationWarning::MalformedDependency {
			location: location.to_string(),
			guid: guid.to_string(),
			error,
		})?;

	Ok( Dependency::new( guid, min_version, kind ))

}

fn processes( attributes: &[Attribute], location: &str ) -> PartialSuccess<Vec<ProcessRequirement>, DeclarationWarning> {
	let ( processes, warnings ) = attributes.iter()
		.filter_map(| attribute | match attribute {
			Attribute::Process( name ) if name.trim().is_empty() => Some( Err( DeclarationWarning::EmptyProcess { location: location.to_string() })),
			Attribute::Process( name ) => Some( Ok( ProcessRequirement::new( name.trim() ))),
			_ => None,
		})
		.partition_result::<Vec<_>, Vec<_>, _, _>();
	( processes.into_iter().fold( Vec::new(), | mut unique: Vec<ProcessRequirement>, process | {
		if !unique.contains( &process ) { unique.push( process ) }
		unique
	}), warnings )
}

fn incompatibilities( attributes: &[Attribute], location: &str, own_guid: &Guid ) -> PartialSuccess<Vec<Guid>, DeclarationWarning> {
	let ( guids, warnings ) = attributes.iter()
		.filter_map(| attribute | match attribute {
			Attribute::Incompatibility( guid ) => Some( guid.trim() ),
			_ => None,
		})
		.map(| guid | match guid {
			"" => Err( DeclarationWarning::EmptyIncompatibility { location: location.to_string() }),
			guid if guid == own_guid.as_str() => Err( DeclarationWarning::SelfIncompatibility { location: location.to_string(), guid: own_guid.clone() }),
			guid => Ok( Guid::new( guid )),
		})
		.partition_result::<Vec<_>, Vec<_>, _, _>();
	( guids.into_iter().unique().collect(), warnings )
}

/// The first non-empty config type wins.
fn config_variant( attributes: &[Attribute], location: &str ) -> PartialSuccess<Option<String>, DeclarationWarning> {
	attributes.iter()
		.filter_map(| attribute | match attribute {
			Attribute::ConfigType( variant ) if !variant.trim().is_empty() => Some( variant.trim().to_string() ),
			_ => None,
		})
		.fold(( None, Vec::new() ), |( kept, warnings ), variant | match kept {
			None => ( Some( variant ), warnings ),
			Some( kept ) => {
				let warning = DeclarationWarning::ConflictingConfigType { location: location.to_string(), kept: kept.clone(), ignored: variant };
				( Some( kept ), warnings.merge( warning ))
			},
		})
}
