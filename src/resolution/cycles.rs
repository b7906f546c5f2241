use std::collections::BTreeMap ;

use crate::{ DependencyGraph, Guid };



/// Finds the hard-dependency cycles among unresolved records.
///
/// Runs Tarjan's strongly connected components algorithm over the unresolved
/// records and the hard edges between them. Every component with more than one
/// member, or a single member depending on itself, is a cycle. Members are sorted
/// by GUID and cycles are returned in order of their smallest member.
///
/// The search keeps its own stack of frames instead of recursing, so arbitrarily
/// long dependency chains don't exhaust the thread's stack.
pub(super) fn find_cycles<U>( graph: &DependencyGraph<U> ) -> Vec<Vec<Guid>> {

	let unresolved = graph.records()
		.filter(| record | record.state().is_unresolved() )
		.map(| record | record.guid() )
		.collect::<Vec<_>>();

	let mut tarjan = Tarjan { graph, index: 0, indices: BTreeMap::new(), stack: Vec::new(), components: Vec::new() };
	for guid in unresolved {
		if !tarjan.indices.contains_key( guid ) { tarjan.connect( guid ) }
	}

	let mut cycles = tarjan.components.into_iter()
		.filter(| component | component.len() > 1 || graph.hard_edges( &component[0] ).any(| edge | *edge.target() == component[0] ))
		.map(| mut component | { component.sort(); component })
		.collect::<Vec<_>>();
	cycles.sort();
	cycles

}

struct NodeIndex {
	index: usize,
	low_link: usize,
	on_stack: bool,
}

/// A node being visited, and how far through its successors the visit got.
struct Frame<'a> {
	guid: &'a Guid,
	successors: Vec<&'a Guid>,
	next: usize,
}

struct Tarjan<'a, U> {
	graph: &'a DependencyGraph<U>,
	index: usize,
	indices: BTreeMap<&'a Guid, NodeIndex>,
	stack: Vec<&'a Guid>,
	components: Vec<Vec<Guid>>,
}

impl<'a, U> Tarjan<'a, U> {

	fn connect( &mut self, root: &'a Guid ) {

		let mut frames = vec![ self.enter( root ) ];

		while let Some( frame ) = frames.last_mut() {

			let guid = frame.guid ;
			let successor = frame.successors.get( frame.next ).copied();
			frame.next += 1 ;

			match successor {
				Some( target ) => match self.indices.get( target ) {
					None => frames.push( self.enter( target )),
					Some( NodeIndex { index, on_stack: true, .. }) => {
						let target_index = *index ;
						self.lower( guid, target_index );
					},
					Some( _ ) => {},
				},
				None => {
					frames.pop();
					self.close( guid );
					if let Some( parent ) = frames.last() {
						let low_link = self.indices[ guid ].low_link ;
						self.lower( parent.guid, low_link );
					}
				},
			}

		}

	}

	fn enter( &mut self, guid: &'a Guid ) -> Frame<'a> {

		let graph = self.graph ;

		self.indices.insert( guid, NodeIndex { index: self.index, low_link: self.index, on_stack: true });
		self.index += 1 ;
		self.stack.push( guid );

		let successors = graph.hard_edges( guid )
			.map(| edge | edge.target() )
			.filter(| target | graph.state( target ).is_some_and(| state | state.is_unresolved() ))
			.collect();

		Frame { guid, successors, next: 0 }

	}

	/// Pops the component rooted at `guid`, if it is a root.
	fn close( &mut self, guid: &'a Guid ) {
		let node = &self.indices[ guid ];
		if node.low_link != node.index { return }
		let mut component = Vec::new();
		while let Some( member ) = self.stack.pop() {
			if let Some( entry ) = self.indices.get_mut( member ) { entry.on_stack = false }
			component.push( member.clone() );
			if member == guid { break }
		}
		self.components.push( component );
	}

	fn lower( &mut self, guid: &Guid, low_link: usize ) {
		if let Some( node ) = self.indices.get_mut( guid ) {
			node.low_link = node.low_link.min( low_link );
		}
	}

}
