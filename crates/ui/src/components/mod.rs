mod assembly;
mod choice;
mod engine;
mod fill;

pub use assembly::AssemblyExercise;
pub use choice::ChoiceExercise;
pub use engine::ExerciseEngine;
pub use fill::FillExercise;
