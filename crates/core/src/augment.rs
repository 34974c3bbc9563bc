//! Capability augmentation.
//!
//! An [`AugmenterProvider`] contributes vendor commands and, for sessions
//! whose capabilities it applies to, a typed capability implementation.
//! [`Augmenter`] holds a static list of providers and evaluates them against a
//! [`RemoteSession`], producing an [`AugmentedSession`] that exposes only the
//! capabilities that matched.

use std::collections::HashMap;
use std::sync::Arc;

use wd_protocol::{Capabilities, CommandDescriptor};
use wd_runtime::{CommandDispatcher, ExecuteMethod};

use crate::extensions::{AddHasExtensions, HasExtensions};
use crate::file_detector::FileDetector;
use crate::session::RemoteSession;

/// Capability interfaces a provider can attach to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
	/// Install/uninstall browser add-ons ([`HasExtensions`]).
	Extensions,
}

/// A typed capability implementation bound to one session.
#[derive(Clone)]
pub enum Capability {
	Extensions(Arc<dyn HasExtensions>),
}

impl Capability {
	pub fn kind(&self) -> CapabilityKind {
		match self {
			Capability::Extensions(_) => CapabilityKind::Extensions,
		}
	}
}

impl std::fmt::Debug for Capability {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Capability").field(&self.kind()).finish()
	}
}

/// Contributes vendor commands and a capability implementation.
pub trait AugmenterProvider: Send + Sync {
	/// Commands this provider adds to the dispatch table.
	///
	/// Must return the same set on every call.
	fn additional_commands(&self) -> Vec<CommandDescriptor>;

	/// Whether the provider applies to a session with these capabilities.
	///
	/// Must be side-effect free.
	fn is_applicable(&self, capabilities: &Capabilities) -> bool;

	/// Which capability interface [`implementation`](Self::implementation) returns.
	fn described_capability(&self) -> CapabilityKind;

	/// Wires up the implementation. Performs no I/O.
	fn implementation(
		&self,
		capabilities: &Capabilities,
		executor: Arc<dyn ExecuteMethod>,
		file_detector: Arc<dyn FileDetector>,
	) -> Capability;
}

/// Static registry of capability providers.
#[derive(Clone, Default)]
pub struct Augmenter {
	providers: Vec<Arc<dyn AugmenterProvider>>,
}

impl Augmenter {
	/// Creates an augmenter with no providers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an augmenter with every built-in provider.
	pub fn with_defaults() -> Self {
		Self::new().with_provider(AddHasExtensions)
	}

	pub fn with_provider(mut self, provider: impl AugmenterProvider + 'static) -> Self {
		self.providers.push(Arc::new(provider));
		self
	}

	pub fn providers(&self) -> &[Arc<dyn AugmenterProvider>] {
		&self.providers
	}

	/// Every command contributed by any provider.
	pub fn additional_commands(&self) -> Vec<CommandDescriptor> {
		self.providers
			.iter()
			.flat_map(|p| p.additional_commands())
			.collect()
	}

	/// Registers every provider's commands on `dispatcher`, applicable or not.
	pub fn register_commands(&self, dispatcher: &dyn CommandDispatcher) {
		for descriptor in self.additional_commands() {
			dispatcher.define_command(descriptor);
		}
	}

	/// Attaches every applicable provider's capability to `session`.
	///
	/// Each predicate is evaluated exactly once. When two providers describe
	/// the same capability, the first registered wins.
	pub fn augment(&self, session: &RemoteSession) -> AugmentedSession {
		let capabilities = session.capabilities();
		let mut attached: HashMap<CapabilityKind, Capability> = HashMap::new();

		for provider in &self.providers {
			let kind = provider.described_capability();
			if !provider.is_applicable(capabilities) {
				tracing::debug!(?kind, session_id = session.session_id(), "Provider not applicable");
				continue;
			}
			if attached.contains_key(&kind) {
				tracing::debug!(?kind, "Capability already attached, skipping provider");
				continue;
			}

			session.channel().define_commands(provider.additional_commands());
			let capability = provider.implementation(capabilities, session.executor(), session.file_detector());
			debug_assert_eq!(capability.kind(), kind);

			tracing::debug!(?kind, session_id = session.session_id(), "Attached capability");
			attached.insert(kind, capability);
		}

		AugmentedSession {
			session_id: session.session_id().to_string(),
			capabilities: capabilities.clone(),
			attached,
		}
	}
}

/// A session together with the capabilities attached to it.
#[derive(Debug, Clone)]
pub struct AugmentedSession {
	session_id: String,
	capabilities: Capabilities,
	attached: HashMap<CapabilityKind, Capability>,
}

impl AugmentedSession {
	pub fn session_id(&self) -> &str {
		&self.session_id
	}

	pub fn capabilities(&self) -> &Capabilities {
		&self.capabilities
	}

	pub fn has(&self, kind: CapabilityKind) -> bool {
		self.attached.contains_key(&kind)
	}

	pub fn get(&self, kind: CapabilityKind) -> Option<&Capability> {
		self.attached.get(&kind)
	}

	pub fn kinds(&self) -> Vec<CapabilityKind> {
		self.attached.keys().copied().collect()
	}

	/// The add-on capability, if the session supports it.
	pub fn extensions(&self) -> Option<Arc<dyn HasExtensions>> {
		match self.attached.get(&CapabilityKind::Extensions)? {
			Capability::Extensions(ext) => Some(Arc::clone(ext)),
		}
	}
}
