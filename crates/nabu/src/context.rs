use crate::file::FileBridge;
use crate::host::{Pipeline, SystemHost};
use crate::render::RenderBridge;
use crate::system::SystemBridge;

/// Owner of the three capability implementations handed to the toolkit.
///
/// There are no process-lifetime singletons: the host constructs a `Bridges`
/// value at startup and passes borrows of its fields into the toolkit's
/// initialization call. Teardown order matters — the toolkit context must be
/// shut down before this value is dropped, since the toolkit holds borrows
/// into it for its whole lifetime.
pub struct Bridges<P: Pipeline, H: SystemHost> {
    pub render: RenderBridge<P>,
    pub system: SystemBridge<H>,
    pub file: FileBridge,
}

impl<P: Pipeline, H: SystemHost> Bridges<P, H> {
    /// Builds the capability set over the host's pipeline and services.
    ///
    /// The system clock baseline is taken here.
    pub fn new(pipeline: P, host: H) -> Self {
        Self {
            render: RenderBridge::new(pipeline),
            system: SystemBridge::new(host),
            file: FileBridge::new(),
        }
    }
}
