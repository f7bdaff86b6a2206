// Presentation layer - Rendering of the view model and load state
pub mod renderer;
