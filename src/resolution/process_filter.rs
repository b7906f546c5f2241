use crate::{ DependencyGraph, ResolutionState, SkipReason };



/// Skips loadable records that declare host processes other than `host_process`.
///
/// Skipped records are not rejected: they may well load in another host process.
pub(super) fn skip_foreign<U>( graph: &mut DependencyGraph<U>, host_process: &str ) {

	let foreign = graph.records()
		.filter(| record | record.state().is_loadable() && !record.info().runs_in( host_process ))
		.map(| record | ( record.guid().clone(), SkipReason::ProcessMismatch {
			required: record.info().processes().iter().map(| process | process.name().to_string() ).collect(),
			host: host_process.to_string(),
		}))
		.collect::<Vec<_>>();

	for ( guid, reason ) in foreign {
		tracing::info!( plugin = %guid, "Skipped: {}", reason );
		graph.set_state( &guid, ResolutionState::Skipped( reason ));
	}

}
