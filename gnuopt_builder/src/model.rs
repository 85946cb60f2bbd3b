/// Whether a short or long option takes a value.
///
/// Inspired by the optstring grammar of `getopt(3)`: <https://pubs.opengroup.org/onlinepubs/9799919799/functions/getopt.html>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HasArg {
    /// `x`: A flag, never takes a value.
    No,
    /// `x:`: Must take a value, either attached (`-xVALUE`) or as the next token (`-x VALUE`).
    Required,
    /// `x::`: May take a value, but only when attached (`-xVALUE` or `--name=VALUE`).
    Optional,
}

impl std::fmt::Display for HasArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// How non-option tokens interleave with options during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordering {
    /// Skip over non-options, deferring them until after every option (the GNU default).
    #[default]
    Permute,
    /// Stop scanning at the first non-option (optstring prefix `+`).
    RequireOrder,
    /// Yield non-options in place, interleaved with the options (optstring prefix `-`).
    ReturnInOrder,
}

impl std::fmt::Display for Ordering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
