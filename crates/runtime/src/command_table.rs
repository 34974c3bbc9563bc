//! Command table: name -> [`CommandDescriptor`].
//!
//! The table starts with the base commands this runtime depends on and
//! grows as capability providers register their vendor commands.

use std::collections::HashMap;

use parking_lot::RwLock;
use wd_protocol::{CommandDescriptor, UPLOAD_FILE};

/// Base commands known to every executor.
pub fn base_commands() -> Vec<CommandDescriptor> {
	vec![CommandDescriptor::post(UPLOAD_FILE, "/session/{sessionId}/se/file")]
}

/// Thread-safe table of command descriptors keyed by name.
#[derive(Debug, Default)]
pub struct CommandTable {
	commands: RwLock<HashMap<String, CommandDescriptor>>,
}

impl CommandTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a table pre-populated with [`base_commands`].
	pub fn with_base_commands() -> Self {
		let table = Self::new();
		table.define_all(base_commands());
		table
	}

	/// Adds or replaces a command.
	///
	/// Returns `true` if the table changed.
	pub fn define(&self, descriptor: CommandDescriptor) -> bool {
		let mut commands = self.commands.write();
		match commands.get(&descriptor.name) {
			Some(existing) if *existing == descriptor => false,
			Some(existing) => {
				tracing::debug!(
					command = %descriptor.name,
					old = %existing.path_template,
					new = %descriptor.path_template,
					"Redefining command"
				);
				commands.insert(descriptor.name.clone(), descriptor);
				true
			}
			None => {
				commands.insert(descriptor.name.clone(), descriptor);
				true
			}
		}
	}

	pub fn define_all(&self, descriptors: impl IntoIterator<Item = CommandDescriptor>) {
		for descriptor in descriptors {
			self.define(descriptor);
		}
	}

	pub fn get(&self, name: &str) -> Option<CommandDescriptor> {
		self.commands.read().get(name).cloned()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.commands.read().contains_key(name)
	}

	/// All descriptors, sorted by name.
	pub fn descriptors(&self) -> Vec<CommandDescriptor> {
		let mut all: Vec<_> = self.commands.read().values().cloned().collect();
		all.sort_by(|a, b| a.name.cmp(&b.name));
		all
	}

	pub fn len(&self) -> usize {
		self.commands.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.read().is_empty()
	}
}
