pub mod corpus;
pub mod links;
pub mod present;
pub mod repl;

pub use corpus::load_corpus;
pub use links::LinkTable;
pub use present::Presenter;
