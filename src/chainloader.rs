//! Chainload orchestration.
//!
//! A [`Chainloader`] runs one complete pass over a set of plugin candidates:
//! discovery, extraction, graph construction, resolution, and finally
//! instantiation of every loadable plugin in load order. Failures are contained
//! per plugin; only a failing discovery aborts the run.

mod context ;
mod summary ;
mod unit ;

pub use context::ChainloadContext ;
pub use summary::ChainloadSummary ;
pub use unit::{ PluginInit, PluginUnit };

use std::collections::BTreeMap ;
use std::panic::{ catch_unwind, AssertUnwindSafe };
use thiserror::Error ;

use crate::{ extract_all, resolve, Candidate, ChainloaderConfig, DependencyGraph, Discovery, Extracted };
use crate::{ Guid, LoadPlan, LogSource, RejectionReason };



/// A failure that aborts the whole chainload.
#[derive( Debug, Error )]
pub enum ChainloadError {
	/// The discovery collaborator couldn't provide any candidates.
	#[error( "Plugin discovery failed: {0}" )]
	Discovery( #[source] Box<dyn std::error::Error + Send + Sync> ),
}

/// A plugin that was successfully constructed.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct LoadedPlugin<I> {
	pub guid: Guid,
	pub instance: I,
}

/// Result of a completed chainload.
#[derive( Debug )]
pub struct ChainloadOutcome<I> {
	/// The plan the run followed.
	pub plan: LoadPlan,
	/// What happened to every candidate.
	pub summary: ChainloadSummary,
	/// Metadata of every plugin that took part in the run, and the constructed
	/// plugins in load order.
	pub context: ChainloadContext<I>,
}

impl<I> ChainloadOutcome<I> {

	/// Constructed plugins in load order.
	#[inline] pub fn plugins( &self ) -> &[LoadedPlugin<I>] { self.context.loaded() }

	/// Takes the constructed plugins, in load order.
	pub fn into_plugins( self ) -> Vec<LoadedPlugin<I>> { self.context.into_loaded() }

}

/// Loads plugins in dependency order.
///
/// ```
/// use chainload::{ Chainloader, ChainloaderConfig, Declared, HostProcess, PluginInit };
///
/// struct Greeter( String );
///
/// type Construct = fn( PluginInit<'_, Greeter> ) -> Result<Greeter, String> ;
///
/// fn construct( init: PluginInit<'_, Greeter> ) -> Result<Greeter, String> {
/// 	init.logger.info( "constructing" );
/// 	let greeting = match init.context.instance( "com.example.a" ) {
/// 		Some( Greeter( dependency )) => format!( "{} after {}", init.info.metadata().name(), dependency ),
/// 		None => init.info.metadata().name().to_string(),
/// 	};
/// 	Ok( Greeter( greeting ))
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let candidates = vec![
/// 	Declared::new( "plugins/b.dll", construct as Construct )
/// 		.plugin( "com.example.b", "Plugin B", "1.0" )
/// 		.depends_on( "com.example.a" ),
/// 	Declared::new( "plugins/a.dll", construct as Construct )
/// 		.plugin( "com.example.a", "Plugin A", "1.0" ),
/// ];
///
/// let loader = Chainloader::new( ChainloaderConfig::new( HostProcess::new( "game.exe" )));
/// let outcome = loader.run( candidates )?;
///
/// let names = outcome.plugins().iter().map(| plugin | plugin.instance.0.as_str() ).collect::<Vec<_>>();
/// assert_eq!( names, [ "Plugin A", "Plugin B after Plugin A" ]);
/// # Ok(())
/// # }
/// ```
#[derive( Debug )]
pub struct Chainloader {
	config: ChainloaderConfig,
}

impl Chainloader {

	pub fn new( config: ChainloaderConfig ) -> Self { Self { config }}

	#[inline] pub fn config( &self ) -> &ChainloaderConfig { &self.config }

	/// Runs a complete chainload over the candidates supplied by `discovery`.
	///
	/// Plugins are constructed one at a time on the calling thread, in plan order.
	/// A plugin whose hard dependency failed to construct earlier in the run is
	/// rejected without being constructed.
	///
	/// # Errors
	/// Only a failing discovery is an error. Every per-plugin failure ends up in
	/// the returned [`ChainloadSummary`].
	pub fn run<D, C, U, I>( &self, discovery: D ) -> Result<ChainloadOutcome<I>, ChainloadError>
	where
		D: Discovery<Candidate = C>,
		C: Candidate<Unit = U>,
		U: PluginUnit<I>,
	{

		let host_process = self.config.host_process().name();
		let span = tracing::info_span!( "chainload", host = host_process );
		let _entered = span.enter();

		let candidates = discovery.discover().map_err(| err | ChainloadError::Discovery( Box::new( err )))?;
		if candidates.is_empty() { tracing::info!( "No plugin candidates discovered" ) }
		tracing::debug!( candidates = candidates.len(), "Discovered plugin candidates" );

		let Extracted { records, unidentified, warnings } = extract_all( candidates );
		let ( mut graph, _ ) = DependencyGraph::build( records );
		let plan = resolve( &mut graph, host_process );

		let mut records = graph.into_records();
		let mut context = ChainloadContext::new(
			records.iter().map(|( guid, record )| ( guid.clone(), record.info().clone() )).collect(),
			host_process,
		);

		let mut failed = BTreeMap::new();

		for guid in plan.order() {

			let Some(( info, unit, _ )) = records.remove( guid ).map( crate::PluginRecord::into_parts ) else { continue };

			if let Some( dependency ) = info.dependencies().iter().find(| dependency | dependency.is_hard() && failed.contains_key( dependency.guid() )) {
				let reason = RejectionReason::DependencyRejected { dependency: dependency.guid().clone() };
				tracing::warn!( plugin = %guid, "Rejected: {}", reason );
				failed.insert( guid.clone(), reason );
				continue ;
			}

			tracing::info!( plugin = %info.metadata(), "Loading" );
			let init = PluginInit {
				info: &info,
				logger: LogSource::new( info.metadata().name() ),
				config: self.config.config_variants().open( self.config.config_root(), &info ),
				context: &context,
			};

			match instantiate( unit, init ) {
				Ok( instance ) => context.push_loaded( guid.clone(), instance ),
				Err( cause ) => {
					let reason = RejectionReason::InstantiationFailed { cause };
					tracing::error!( plugin = %guid, "{}", reason );
					failed.insert( guid.clone(), reason );
				},
			}

		}

		let mut rejected = plan.rejected().clone();
		rejected.extend( failed );

		let summary = ChainloadSummary {
			loaded: context.loaded_guids().cloned().collect(),
			rejected,
			skipped: plan.skipped().clone(),
			duplicates: plan.duplicates().to_vec(),
			unidentified,
			warnings,
		};
		summary.log();

		Ok( ChainloadOutcome { plan, summary, context })

	}

}

/// Constructs `unit`, turning both errors and panics into a printable cause.
fn instantiate<U: PluginUnit<I>, I>( unit: U, init: PluginInit<'_, I> ) -> Result<I, String> {
	match catch_unwind( AssertUnwindSafe(|| unit.instantiate( init ))) {
		Ok( Ok( instance )) => Ok( instance ),
		Ok( Err( err )) => Err( err.to_string() ),
		Err( payload ) => Err( match payload.downcast::<String>() {
			Ok( message ) => format!( "panicked: {}", message ),
			Err( payload ) => match payload.downcast::<&'static str>() {
				Ok( message ) => format!( "panicked: {}", message ),
				Err( _ ) => "panicked".to_string(),
			},
		}),
	}
}
