use std::io::Write;

use flexi_logger::{DeferredNow, style};
use log::{Level, Record};

/// Plain message for `info`, level-prefixed and coloured otherwise.
pub fn cli_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    if level == Level::Info {
        return write!(w, "{}", record.args());
    }
    write!(
        w,
        "{}: {}",
        style(level).paint(level.as_str().to_lowercase()),
        record.args()
    )
}
