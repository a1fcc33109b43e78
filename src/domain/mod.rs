pub mod aliases;
pub mod commit;
pub mod extract;
pub mod git;
pub mod parse;
pub mod reduce;
