pub mod formatter;
pub mod sequencer;
mod sequencer_state;

pub use formatter::{format_group_sheet, format_master_sheet};
pub use sequencer::{generate_hunt, GroupSequences, MAX_SEQUENCE_ATTEMPTS};
