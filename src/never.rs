/// Stand-in for the unstable `!` type: firmware entry points that only return on error yield
/// `Result<Never>`.
#[derive(Debug)]
pub enum Never {}
