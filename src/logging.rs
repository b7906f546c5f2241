//! Per-plugin log sources.

use std::fmt::Display ;
use tracing::Span ;



/// Log sink handed to a plugin, named after the plugin's display name.
///
/// Events are emitted through `tracing` with a `source` field carrying the name,
/// inside a `plugin` span, so any subscriber the host installs can attribute them.
#[derive( Debug, Clone )]
pub struct LogSource {
	name: String,
	span: Span,
}

impl LogSource {

	pub fn new( name: impl Into<String> ) -> Self {
		let name = name.into();
		let span = tracing::info_span!( "plugin", source = %name );
		Self { name, span }
	}

	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// The span every event of this source is recorded in. Enter it to attribute
	/// events emitted directly through `tracing` to this plugin as well.
	#[inline] pub fn span( &self ) -> &Span { &self.span }

	pub fn trace( &self, message: impl Display ) {
		self.span.in_scope(|| tracing::trace!( source = %self.name, "{}", message ));
	}

	pub fn debug( &self, message: impl Display ) {
		self.span.in_scope(|| tracing::debug!( source = %self.name, "{}", message ));
	}

	pub fn info( &self, message: impl Display ) {
		self.span.in_scope(|| tracing::info!( source = %self.name, "{}", message ));
	}

	pub fn warn( &self, message: impl Display ) {
		self.span.in_scope(|| tracing::warn!( source = %self.name, "{}", message ));
	}

	pub fn error( &self, message: impl Display ) {
		self.span.in_scope(|| tracing::error!( source = %self.name, "{}", message ));
	}

}

#[cfg( test )]
mod tests {

	use std::io::Write ;
	use std::sync::{ Arc, Mutex };
	use super::* ;

	#[derive( Clone, Default )]
	struct Captured( Arc<Mutex<Vec<u8>>> );

	impl Write for Captured {
		fn write( &mut self, buf: &[u8] ) -> std::io::Result<usize> {
			self.0.lock().unwrap().extend_from_slice( buf );
			Ok( buf.len() )
		}
		fn flush( &mut self ) -> std::io::Result<()> { Ok(()) }
	}

	fn capture( emit: impl FnOnce() ) -> String {
		let captured = Captured::default();
		let writer = captured.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_writer( move || writer.clone() )
			.with_env_filter( "chainload=debug" )
			.with_ansi( false )
			.finish();
		tracing::subscriber::with_default( subscriber, emit );
		let bytes = captured.0.lock().unwrap().clone();
		String::from_utf8( bytes ).unwrap()
	}

	#[test]
	fn events_carry_the_source_name() {
		let output = capture(|| LogSource::new( "Better Lighting" ).info( "initialised" ));
		assert!( output.contains( "initialised" ), "{}", output );
		assert!( output.contains( "Better Lighting" ), "{}", output );
	}

	#[test]
	fn events_respect_the_subscriber_filter() {
		let output = capture(|| {
			let source = LogSource::new( "Chatty" );
			source.trace( "hidden detail" );
			source.debug( "visible detail" );
		});
		assert!( !output.contains( "hidden detail" ), "{}", output );
		assert!( output.contains( "visible detail" ), "{}", output );
	}

}
