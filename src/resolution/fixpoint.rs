use std::collections::{ BTreeMap, BTreeSet };

use crate::{ DependencyGraph, Guid, RejectionReason, ResolutionState };



/// Propagates hard-dependency outcomes until no record changes state.
///
/// Unresolved records whose hard dependencies are all loadable become loadable.
/// Unresolved or loadable records with a hard dependency that is rejected or
/// skipped are rejected with [`RejectionReason::DependencyRejected`], naming the
/// first such dependency in declaration order.
///
/// Works in rounds. Every round decides against the states at its start, so the
/// outcome doesn't depend on visit order. After the first round only dependents of
/// records that just changed are looked at again.
pub(super) fn settle<U>( graph: &mut DependencyGraph<U> ) {

	let dependents = graph.guids()
		.flat_map(| guid | graph.hard_edges( guid ).map( move | edge | ( edge.target().clone(), guid.clone() )))
		.fold( BTreeMap::<Guid, Vec<Guid>>::new(), | mut dependents, ( target, dependent )| {
			dependents.entry( target ).or_default().push( dependent );
			dependents
		});

	let mut frontier = graph.guids().cloned().collect::<BTreeSet<_>>();

	while !frontier.is_empty() {

		let transitions = frontier.iter()
			.filter_map(| guid | transition( graph, guid ).map(| state | ( guid.clone(), state )))
			.collect::<Vec<_>>();

		frontier = transitions.iter()
			.filter_map(|( guid, _ )| dependents.get( guid ))
			.flatten()
			.cloned()
			.collect();

		for ( guid, state ) in transitions {
			if let ResolutionState::Rejected( reason ) = &state {
				tracing::warn!( plugin = %guid, "Rejected: {}", reason );
			} else {
				tracing::trace!( plugin = %guid, "Resolved as loadable" );
			}
			graph.set_state( &guid, state );
		}

	}

}

fn transition<U>( graph: &DependencyGraph<U>, guid: &Guid ) -> Option<ResolutionState> {

	let current = graph.state( guid )?;
	if current.is_excluded() { return None }

	let mut waiting = false ;
	for edge in graph.hard_edges( guid ) {
		match graph.state( edge.target() ) {
			Some( ResolutionState::Loadable ) => {},
			Some( ResolutionState::Unresolved ) => waiting = true,
			Some( ResolutionState::Rejected( _ ) | ResolutionState::Skipped( _ )) | None => {
				return Some( ResolutionState::Rejected( RejectionReason::DependencyRejected { dependency: edge.target().clone() }));
			},
		}
	}

	match ( current, waiting ) {
		( ResolutionState::Unresolved, false ) => Some( ResolutionState::Loadable ),
		_ => None,
	}

}
