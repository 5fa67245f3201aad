/// How the files of a batch are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// One file after another, pausing between files.
    Sequential,
    /// Every file at once, no pause.
    Parallel,
}

impl BatchMode {
    pub fn from_flag(parallel: bool) -> Self {
        if parallel {
            BatchMode::Parallel
        } else {
            BatchMode::Sequential
        }
    }
}
