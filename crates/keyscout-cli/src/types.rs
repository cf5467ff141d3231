use std::path::PathBuf;

use keyscout_ingest::SourceInfo;
use keyscout_match::MatchOutcome;

#[derive(Debug)]
pub struct CompareResult {
    pub left: SourceInfo,
    pub right: SourceInfo,
    pub outcome: MatchOutcome,
    pub top: Option<usize>,
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}
