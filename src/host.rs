// Scheduling and resize primitives the animator borrows from its host

use crate::error::Error;
use std::ops::ControlFlow;

/// Runs once per display refresh. `Break` ends the loop from the inside.
pub type FrameTick = Box<dyn FnMut() -> ControlFlow<()>>;

pub type ResizeHandler = Box<dyn FnMut()>;

/// A cancellable repeating task driven by the display refresh.
pub trait FrameScheduler {
    type Handle;

    /// Invoke `tick` before every upcoming refresh until it breaks or the
    /// returned handle is cancelled.
    fn start(&mut self, tick: FrameTick) -> Result<Self::Handle, Error>;

    /// After this returns the tick is never invoked again.
    fn cancel(&mut self, handle: Self::Handle);
}

pub trait ResizeEvents {
    type Listener;

    fn subscribe(&mut self, handler: ResizeHandler) -> Result<Self::Listener, Error>;

    fn unsubscribe(&mut self, listener: Self::Listener);
}
