mod assemble_paths;
mod detect;
mod detect_by_label;
mod filter_edges;
mod finalize_lines;
mod triangulate;

pub use assemble_paths::{AssembledPath, AssemblePaths};
pub use detect::DetectTrendLines;
pub use detect_by_label::{DetectByLabel, LabeledLines};
pub use filter_edges::FilterEdges;
pub use finalize_lines::FinalizeLines;
pub use triangulate::Triangulate;
