//! A dependency-ordered plugin chainloader.
//!
//! Plugins declare who they are, which other plugins they depend on, and which
//! host processes they are meant for. `chainload` collects those declarations,
//! builds a dependency graph over every discovered plugin, works out which plugins
//! can load and in which order, and then constructs them one by one, handing each
//! its own log source and config store.
//!
//! Failures are contained per plugin. A missing or outdated dependency, a
//! dependency cycle, or a constructor that errors or panics only takes out the
//! plugins that actually depend on it; everything else still loads.
//!
//! # Core Concepts
//!
//! - [`Candidate`]: A discovered plugin unit together with its raw [`Attribute`]s.
//! 	[`Declared`] builds one in code.
//!
//! - [`PluginRecord`]: A candidate after [`extract`]ion, holding validated
//! 	[`PluginInfo`] and a [`ResolutionState`].
//!
//! - [`DependencyGraph`]: All records keyed by [`Guid`], with edges pointing from
//! 	each plugin to its dependencies.
//!
//! - [`LoadPlan`]: The output of [`resolve`]: the load order plus a reason for
//! 	every plugin left out of it.
//!
//! - [`Chainloader`]: Runs discovery, extraction, resolution and instantiation in
//! 	one pass.
//!
//! # Dependencies
//!
//! - **Hard** dependencies must be present, at least the declared minimum version,
//! 	and load successfully; otherwise the dependent is rejected.
//! - **Soft** dependencies only order: if the target is present it loads first, if
//! 	it isn't nothing happens.
//!
//! # Example
//!
//! ```
//! use chainload::{ Declared, DependencyGraph, Guid, RejectionReason, extract_all, resolve };
//!
//! let candidates = vec![
//! 	Declared::new( "c.dll", () ).plugin( "c", "C", "1.0" ).depends_on_version( "b", "1.0" ),
//! 	Declared::new( "b.dll", () ).plugin( "b", "B", "1.0" ).depends_on_version( "a", "1.0" ),
//! 	Declared::new( "a.dll", () ).plugin( "a", "A", "1.0" ),
//! 	Declared::new( "d.dll", () ).plugin( "d", "D", "1.0" ).depends_on( "missing" ),
//! ];
//!
//! let extracted = extract_all( candidates );
//! let ( mut graph, duplicates ) = DependencyGraph::build( extracted.records );
//! assert!( duplicates.is_empty() );
//!
//! let plan = resolve( &mut graph, "game.exe" );
//! assert_eq!( plan.order(), [ "a", "b", "c" ].map( Guid::from ));
//! assert_eq!(
//! 	plan.rejection( "d" ),
//! 	Some( &RejectionReason::MissingHardDependency { dependency: "missing".into() }),
//! );
//! ```
//!
//! # Logging
//!
//! Everything is reported through [`tracing`]( https://docs.rs/tracing ). The
//! crate never installs a subscriber; that is up to the host.

mod guid ;
mod version ;
mod metadata ;
mod declaration ;
mod extraction ;
mod record ;
mod graph ;
mod resolution ;
mod load_plan ;
mod chainloader ;
mod discovery ;
mod config ;
mod config_store ;
mod logging ;
mod utils ;

#[doc( no_inline )]
pub use semver::Version ;

pub use guid::Guid ;
pub use version::{ parse_version, VersionError };
pub use metadata::{ PluginMetadata, Dependency, DependencyKind, ProcessRequirement, PluginInfo };
pub use declaration::{ Attribute, Candidate, Declared };
pub use extraction::{ extract, extract_all, Extracted, ExtractionError, IdentityError, DeclarationWarning };
pub use record::{ PluginRecord, ResolutionState };
pub use graph::{ DependencyGraph, DuplicateIdentity, Edge };
pub use resolution::resolve ;
pub use load_plan::{ LoadPlan, RejectionReason, SkipReason };
pub use chainloader::{ Chainloader, ChainloadError, ChainloadOutcome, LoadedPlugin };
pub use chainloader::{ ChainloadContext, ChainloadSummary, PluginInit, PluginUnit };
pub use discovery::Discovery ;
pub use config::{ ChainloaderConfig, HostProcess, HostProcessError };
pub use config_store::{ ConfigStore, ConfigFile, ConfigError, ConfigVariants, ConfigConstructor };
pub use logging::LogSource ;
pub use utils::PartialSuccess ;
