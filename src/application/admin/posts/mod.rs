mod form;
mod list;
pub mod types;

pub use form::PostFormController;
pub use list::PostListController;
pub use types::{
    AUTHOR_REQUIRED, DeleteOutcome, DeleteState, FormState, PostDraft, Route, SAVE_FAILED,
    SubmitOutcome,
};
