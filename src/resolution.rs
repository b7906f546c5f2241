//! Load-order resolution.
//!
//! [`resolve`] settles every record of a [`DependencyGraph`] into a terminal state
//! and produces the [`LoadPlan`]:
//!
//! 1. Propagate to a fixpoint: a record becomes loadable once all of its hard
//! 	dependencies are loadable, and is rejected as soon as any of them is not.
//! 2. Whatever is still unresolved waits on a cycle. Members of hard-dependency
//! 	cycles are rejected and step 1 runs again, which rejects their dependents.
//! 3. Loadable records that don't accept the current host process are skipped,
//! 	and their hard dependents are rejected.
//! 4. The loadable records are ordered so that every hard and soft dependency comes
//! 	first, breaking ties by GUID.

mod fixpoint ;
mod cycles ;
mod process_filter ;
mod ordering ;

use std::collections::BTreeMap ;
use std::sync::Arc ;
use itertools::Itertools ;
use pipe_trait::Pipe ;

use crate::{ DependencyGraph, Guid, LoadPlan, RejectionReason, ResolutionState };



/// Resolves `graph` for a host running as `host_process`.
///
/// Mutates the state of every record in the graph and returns the resulting plan.
/// Deterministic: the same set of records yields the same plan regardless of the
/// order in which they were discovered.
pub fn resolve<U>( graph: &mut DependencyGraph<U>, host_process: &str ) -> LoadPlan {

	loop {
		fixpoint::settle( graph );
		let cycles = cycles::find_cycles( graph );
		if cycles.is_empty() { break }
		for cycle in cycles {
			tracing::warn!( "Dependency cycle between [{}]", cycle.iter().join( ", " ));
			let cycle = Arc::<[Guid]>::from( cycle );
			for guid in cycle.iter() {
				graph.set_state( guid, ResolutionState::Rejected( RejectionReason::CyclicDependency { cycle: Arc::clone( &cycle ) }));
			}
		}
	}
	debug_assert!( graph.records().all(| record | !record.state().is_unresolved() ));

	process_filter::skip_foreign( graph, host_process );
	fixpoint::settle( graph );

	let order = ordering::load_order( graph );
	tracing::debug!( order = ?order, "Computed load order" );

	graph.records()
		.fold(( BTreeMap::new(), BTreeMap::new() ), |( mut rejected, mut skipped ), record | {
			match record.state() {
				ResolutionState::Rejected( reason ) => { rejected.insert( record.guid().clone(), reason.clone() ); },
				ResolutionState::Skipped( reason ) => { skipped.insert( record.guid().clone(), reason.clone() ); },
				ResolutionState::Unresolved | ResolutionState::Loadable => {},
			}
			( rejected, skipped )
		})
		.pipe(|( rejected, skipped )| LoadPlan { order, rejected, skipped, duplicates: graph.duplicates().to_vec() })

}
