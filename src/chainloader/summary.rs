use std::collections::BTreeMap ;

use crate::{ DeclarationWarning, DuplicateIdentity, ExtractionError, Guid, RejectionReason, SkipReason };



/// End-of-run report: what loaded, and why everything else didn't.
#[derive( Debug, Clone, Default, PartialEq, Eq )]
pub struct ChainloadSummary {
	pub(crate) loaded: Vec<Guid>,
	pub(crate) rejected: BTreeMap<Guid, RejectionReason>,
	pub(crate) skipped: BTreeMap<Guid, SkipReason>,
	pub(crate) duplicates: Vec<DuplicateIdentity>,
	pub(crate) unidentified: Vec<ExtractionError>,
	pub(crate) warnings: Vec<DeclarationWarning>,
}

impl ChainloadSummary {

	/// Instantiated plugins in load order.
	#[inline] pub fn loaded( &self ) -> &[Guid] { &self.loaded }

	/// Rejected plugins, including those whose construction failed.
	#[inline] pub fn rejected( &self ) -> &BTreeMap<Guid, RejectionReason> { &self.rejected }

	#[inline] pub fn skipped( &self ) -> &BTreeMap<Guid, SkipReason> { &self.skipped }

	#[inline] pub fn duplicates( &self ) -> &[DuplicateIdentity] { &self.duplicates }

	/// Candidates dropped because they carried no usable identity.
	#[inline] pub fn unidentified( &self ) -> &[ExtractionError] { &self.unidentified }

	/// Declarations dropped from plugins that were otherwise fine.
	#[inline] pub fn warnings( &self ) -> &[DeclarationWarning] { &self.warnings }

	#[inline] pub fn loaded_count( &self ) -> usize { self.loaded.len() }

	/// Rejected plugins plus duplicate and unidentified candidates.
	pub fn rejected_count( &self ) -> usize {
		self.rejected.len() + self.duplicates.len() + self.unidentified.len()
	}

	#[inline] pub fn skipped_count( &self ) -> usize { self.skipped.len() }

	/// Emits the summary through `tracing`: one event with the counts, then one
	/// event per plugin that didn't load.
	pub fn log( &self ) {
		tracing::info!(
			loaded = self.loaded_count(),
			rejected = self.rejected_count(),
			skipped = self.skipped_count(),
			"Chainloader finished"
		);
		self.rejected.iter().for_each(|( guid, reason )| tracing::warn!( plugin = %guid, "Rejected: {}", reason ));
		self.duplicates.iter().for_each(| duplicate | tracing::warn!( "{}", duplicate ));
		self.unidentified.iter().for_each(| err | tracing::warn!( "{}", err ));
		self.skipped.iter().for_each(|( guid, reason )| tracing::info!( plugin = %guid, "Skipped: {}", reason ));
	}

}

impl std::fmt::Display for ChainloadSummary {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		writeln!( f, "{} loaded, {} rejected, {} skipped", self.loaded_count(), self.rejected_count(), self.skipped_count() )?;
		for ( guid, reason ) in &self.rejected { writeln!( f, "  rejected {}: {}", guid, reason )?; }
		for duplicate in &self.duplicates { writeln!( f, "  rejected {}", duplicate )?; }
		for err in &self.unidentified { writeln!( f, "  rejected {}", err )?; }
		for ( guid, reason ) in &self.skipped { writeln!( f, "  skipped {}: {}", guid, reason )?; }
		Ok(())
	}
}
