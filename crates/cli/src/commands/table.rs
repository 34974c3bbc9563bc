use wd::{Augmenter, CommandTable};

use crate::error::Result;
use crate::output::{CommandTableData, OutputFormat, ResultBuilder, print_result};

/// Base commands plus everything the default providers contribute.
pub fn command_table() -> CommandTable {
	let table = CommandTable::with_base_commands();
	table.define_all(Augmenter::with_defaults().additional_commands());
	table
}

pub fn execute(format: OutputFormat) -> Result<()> {
	let commands = command_table().descriptors();
	let result = ResultBuilder::new("commands")
		.data(CommandTableData {
			count: commands.len(),
			commands,
		})
		.build();
	print_result(&result, format);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn table_lists_upload_and_addon_commands() {
		let table = command_table();
		assert_eq!(table.len(), 3);
		for name in [wd::UPLOAD_FILE, wd::INSTALL_EXTENSION, wd::UNINSTALL_EXTENSION] {
			assert!(table.contains(name), "missing {name}");
		}
	}
}
