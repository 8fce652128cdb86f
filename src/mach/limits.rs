/// Ceilings on interpreter memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Numbered lines a program may hold.
    pub max_lines: usize,
    /// Active `FOR` loops at once.
    pub max_for_depth: usize,
    /// Cells in a single array.
    pub max_array_len: usize,
    /// Characters in one entered or loaded line.
    pub max_line_len: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_lines: 1000,
            max_for_depth: 256,
            max_array_len: 1 << 20,
            max_line_len: 512,
        }
    }
}
