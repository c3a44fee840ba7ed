// galaxy-at-rs/galaxy-at/src/device/port.rs

use std::path::Path;

use crate::Result;
use crate::utils::{RetryPolicy, WaitContext};

/// Wait for the serial node at `path` to appear on the filesystem.
///
/// Returns `Ok(false)` once the attempt budget is spent; the caller decides
/// whether that is fatal.
pub fn wait_for_port(path: &Path, policy: &RetryPolicy, ctx: &mut WaitContext) -> Result<bool> {
    wait_for_port_with(path, policy, ctx, |p| p.exists())
}

/// `wait_for_port` with a custom presence probe.
pub fn wait_for_port_with<F>(
    path: &Path,
    policy: &RetryPolicy,
    ctx: &mut WaitContext,
    mut present: F,
) -> Result<bool>
where
    F: FnMut(&Path) -> bool,
{
    let label = format!("Checking if {} is available", path.display());
    for attempt in policy.attempts() {
        ctx.cancel.check()?;
        ctx.progress.tick(&label);
        if present(path) {
            ctx.progress.finish("success.");
            log::debug!("{} present after {} checks", path.display(), attempt);
            return Ok(true);
        }
        if attempt < policy.max_attempts() {
            policy.pause(&ctx.cancel)?;
        }
    }
    log::warn!(
        "{} still missing after {} checks",
        path.display(),
        policy.max_attempts()
    );
    Ok(false)
}
