//! Layout defaults and display settings

// Defaults reproduce the sword sheet the tool was first written for
/// Composite sheet read when no `--sheet` is given
pub const DEFAULT_SHEET_PATH: &str = "swords.png";
/// Directory receiving one subdirectory per part
pub const DEFAULT_OUTPUT_ROOT: &str = "sword_parts";
/// Number of items laid out side by side on the sheet
pub const DEFAULT_ITEM_COUNT: u32 = 5;
/// Part names from the top band of the sheet to the bottom one
pub const DEFAULT_PARTS: [&str; 5] = ["end", "handle", "hilt", "blade", "tip"];

/// Extension of every part image file
pub const PART_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Width reserved for the stage label in front of the bar
pub const STAGE_LABEL_WIDTH: usize = 8;

/// Rule printed under stage summaries
pub const SUMMARY_RULE_WIDTH: usize = 80;
