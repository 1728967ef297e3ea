#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub saved: bool,
    pub default: bool,
    pub command: bool,
    pub rate: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub symbols: Option<String>,
    pub check: Option<String>,
    pub output: Option<String>,
}

impl CliFlags {
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.saved
            || self.default
            || self.rate
            || self.no_upper
            || self.no_lower
            || self.no_digits
            || self.no_symbols
            || self.symbols.is_some()
            || self.check.is_some()
            || self.output.is_some()
    }
}
