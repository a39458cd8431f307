use crate::aggregator::ReactionPolicy;
use crate::utils::config::DEFAULT_TOP_GROUPS;
use std::path::PathBuf;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Local JSON file holding the stamps
    pub input: Option<PathBuf>,

    /// URL returning the stamps as JSON
    pub url: Option<String>,

    /// Post the stamps belong to (recorded in the report)
    pub post_id: Option<String>,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Reactor policy applied before aggregation
    pub policy: ReactionPolicy,

    /// Catalog file overriding the built-in glyphs and labels
    pub catalog: Option<PathBuf>,

    /// Number of groups listed in the text summary
    pub top_groups: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            input: None,
            url: None,
            post_id: None,
            output_json: PathBuf::from("stamps-report.json"),
            policy: ReactionPolicy::CountAll,
            catalog: None,
            top_groups: DEFAULT_TOP_GROUPS,
            print_summary: false,
        }
    }
}
