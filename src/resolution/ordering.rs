use std::collections::{ BTreeMap, BTreeSet };

use crate::{ DependencyGraph, Guid };



/// Orders the loadable records so each one comes after everything it depends on.
///
/// Both hard and soft edges between loadable records constrain the order. Among
/// the records whose dependencies are all placed, the smallest GUID goes next.
/// Cycles made of soft edges are broken at the smallest GUID whose remaining
/// dependencies are all soft.
pub(super) fn load_order<U>( graph: &DependencyGraph<U> ) -> Vec<Guid> {

	let loadable = graph.records()
		.filter(| record | record.state().is_loadable() )
		.map(| record | record.guid() )
		.collect::<BTreeSet<_>>();

	// dependencies not placed yet, per pending record
	let mut pending = loadable.iter()
		.map(| guid | ( *guid, graph.edges( guid ).iter()
			.map(| edge | edge.target() )
			.filter(| target | loadable.contains( target ))
			.collect::<BTreeSet<_>>()
		))
		.collect::<BTreeMap<_, _>>();

	let dependents = pending.iter()
		.flat_map(|( guid, dependencies )| dependencies.iter().map( move | dependency | ( *dependency, *guid )))
		.fold( BTreeMap::<&Guid, Vec<&Guid>>::new(), | mut dependents, ( dependency, dependent )| {
			dependents.entry( dependency ).or_default().push( dependent );
			dependents
		});

	let mut ready = pending.iter()
		.filter(|( _, dependencies )| dependencies.is_empty() )
		.map(|( guid, _ )| *guid )
		.collect::<BTreeSet<_>>();

	let mut order = Vec::with_capacity( pending.len() );

	while !pending.is_empty() {

		let next = match ready.pop_first() {
			Some( guid ) => guid,
			None => {
				let Some( guid ) = pending.iter()
					.find(|( guid, dependencies )| dependencies.iter().all(| dependency | !is_hard_edge( graph, guid, dependency )))
					.map(|( guid, _ )| *guid )
				else { break };
				tracing::warn!( plugin = %guid, "Soft dependency cycle, loading before its remaining soft dependencies" );
				guid
			},
		};

		pending.remove( next );
		for dependent in dependents.get( next ).into_iter().flatten() {
			if let Some( dependencies ) = pending.get_mut( *dependent ) {
				if dependencies.remove( next ) && dependencies.is_empty() { ready.insert( *dependent ); }
			}
		}
		order.push( next.clone() );

	}

	order

}

fn is_hard_edge<U>( graph: &DependencyGraph<U>, from: &Guid, to: &Guid ) -> bool {
	graph.hard_edges( from ).any(| edge | edge.target() == to )
}
