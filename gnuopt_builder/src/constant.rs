pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = '?';
pub(crate) const HELP_MESSAGE: &str = "Give this help list";
pub(crate) const USAGE_NAME: &str = "usage";
pub(crate) const USAGE_MESSAGE: &str = "Give a short usage message";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_SHORT: char = 'V';
pub(crate) const VERSION_MESSAGE: &str = "Print program version";

pub(crate) const OPTION_TERMINATOR: &str = "--";
pub(crate) const TOO_MANY_ARGUMENTS: &str = "Too many arguments";

pub(crate) const MANDATORY_NOTE: &str = "Mandatory or optional arguments to long options are also mandatory or optional for any corresponding short options.";

// argp_err_exit_status defaults to EX_USAGE from <sysexits.h>.
pub(crate) const USAGE_EXIT_CODE: i32 = 64;
pub(crate) const CONFIG_EXIT_CODE: i32 = 1;
