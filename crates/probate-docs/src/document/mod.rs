pub mod clause;
mod kind;
mod tree;

pub use clause::{ClauseSelection, ClauseTable};
pub use kind::{DispatchError, DocumentKind};
pub use tree::{
    Alignment, Block, CheckboxGroup, CheckboxOption, DocumentContent, Jurat, Paragraph, Run,
    Section, SignatureBlock, Table, TableRow,
};
