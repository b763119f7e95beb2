//! SeaORM entity models
//!
//! Database entities for the publications store

mod paper;
mod footnote;

pub use paper::{
    Entity as PaperEntity,
    Model as Paper,
    ActiveModel as PaperActiveModel,
    Column as PaperColumn,
};

pub use footnote::{
    Entity as FootnoteEntity,
    Model as Footnote,
    ActiveModel as FootnoteActiveModel,
    Column as FootnoteColumn,
};
