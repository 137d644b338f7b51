use crate::pass::CharClass;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub generate: bool,
    pub length: Option<usize>,
    pub only: Option<Vec<CharClass>>,
    pub disabled: Vec<CharClass>,
}
