/// Command dispatch: routes the parsed switches to their handlers.
pub mod enroll;
pub mod info;

use crate::cli::{ArgParser, OutputCtx};
use crate::enroll::ExitFlags;

/// Route the parsed switches. Version and help short-circuit; everything
/// else runs the enrollment flow.
#[must_use]
pub fn dispatch(parser: &ArgParser, ctx: &OutputCtx) -> ExitFlags {
    if parser.version_requested() {
        info::version();
        return ExitFlags::NONE;
    }
    if parser.help_requested() {
        info::help(parser);
        return ExitFlags::NONE;
    }
    enroll::run(parser, ctx)
}
