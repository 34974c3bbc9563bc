use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Filter directives for a `-v` count.
///
/// `RUST_LOG` overrides these entirely.
fn default_filter(verbosity: u8) -> &'static str {
	match verbosity {
		// stdout carries the envelope; only wd_cli errors reach stderr
		0 => "error,wd=off,wd_runtime=off",
		// add-on install/uninstall results from wd; wd_runtime reports rejected commands
		1 => "wd_cli=info,wd=info,wd_runtime=warn",
		// every request/response line from wd_runtime
		_ => "wd_cli=debug,wd=debug,wd_runtime=debug",
	}
}

pub fn init_logging(verbosity: u8) {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr.with_max_level(tracing::Level::TRACE))
		.with_target(true)
		.compact()
		.init();
}
