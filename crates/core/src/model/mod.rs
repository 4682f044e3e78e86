mod attempt;
mod level;
pub mod prompt;

pub use attempt::{AttemptResult, SubmittedAnswer};
pub use level::{AssemblyLevel, ChoiceLevel, FillLevel, LevelDefinition, LevelKind};
pub use prompt::Segment;
