//! Foreground loop

use defmt::*;

use strobe_core::command::Dispatcher;
use strobe_core::pipeline::MainLoop;
use strobe_core::traits::{PeripheralDriver, SerialChannel};
use strobe_core::wire::WireSample;

/// Start the pipeline and poll it forever
///
/// Errors are logged and the loop carries on; a failed peripheral simply
/// stops producing samples.
pub fn run<D, X, S>(mut main_loop: MainLoop<'_, D, X, S>) -> !
where
    D: PeripheralDriver,
    D::Sample: WireSample,
    D::Error: Format,
    X: Dispatcher<D>,
    S: SerialChannel,
    S::Error: Format,
{
    match main_loop.start() {
        Ok(()) => info!("Pipeline started"),
        Err(e) => error!("Pipeline start failed: {}", e),
    }

    loop {
        match main_loop.poll_once() {
            Ok(activity) => {
                if let Some(command) = activity.command {
                    debug!("Command {=u8:#x}: {}", command.byte, command.dispatch);
                }
                if activity.sent > 0 {
                    trace!("Sent {} bytes", activity.sent);
                }
            }
            Err(e) => warn!("Loop error: {}", e),
        }
    }
}
