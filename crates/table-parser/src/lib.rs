pub mod ast;
mod common;
mod lexer;
mod parser;

pub use self::{
    ast::{ColumnDefinition, ConstraintSet, TableDefinition},
    common::Location,
    parser::{parse_table, Error, Parser, Result},
};
