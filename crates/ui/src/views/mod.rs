mod editor;
mod state;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use editor::EditorView;
pub use state::ViewError;
pub use study::StudyView;
