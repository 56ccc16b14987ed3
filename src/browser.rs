// Browser hosts: a requestAnimationFrame loop and the window resize event

use crate::error::Error;
use crate::host::{FrameScheduler, FrameTick, ResizeEvents, ResizeHandler};
use js_sys::Function;
use log::error;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub fn window() -> Result<Window, Error> {
    web_sys::window().ok_or_else(|| Error::Host("no global window".to_owned()))
}

#[derive(Default)]
struct FrameLoop {
    request_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    fn request(&self, window: &Window) -> Result<(), Error> {
        let callback = self.callback.borrow();
        let callback = match callback.as_ref() {
            Some(callback) => callback,
            None => return Ok(()),
        };
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref::<Function>())
            .map_err(|err| Error::host("requestAnimationFrame failed", err))?;
        self.request_id.set(Some(id));
        Ok(())
    }
}

/// Handle to a running animation frame loop.
pub struct FrameLoopHandle {
    frame_loop: Rc<FrameLoop>,
}

pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        AnimationFrames { window }
    }
}

impl FrameScheduler for AnimationFrames {
    type Handle = FrameLoopHandle;

    fn start(&mut self, mut tick: FrameTick) -> Result<FrameLoopHandle, Error> {
        let frame_loop = Rc::new(FrameLoop::default());
        // The closure lives inside the loop state, so it only keeps a weak
        // reference back to it.
        let weak: Weak<FrameLoop> = Rc::downgrade(&frame_loop);
        let window = self.window.clone();
        let callback = Closure::wrap(Box::new(move || {
            let frame_loop = match weak.upgrade() {
                Some(frame_loop) => frame_loop,
                None => return,
            };
            frame_loop.request_id.set(None);
            if frame_loop.stopped.get() {
                return;
            }

            #[cfg(feature = "frame-timing")]
            let _timer = crate::Timer::new("connect-the-dots frame");
            match tick() {
                ControlFlow::Continue(()) => {
                    if let Err(err) = frame_loop.request(&window) {
                        error!("{}", err);
                        frame_loop.stopped.set(true);
                    }
                }
                ControlFlow::Break(()) => frame_loop.stopped.set(true),
            }
        }) as Box<dyn FnMut()>);

        *frame_loop.callback.borrow_mut() = Some(callback);
        frame_loop.request(&self.window)?;
        Ok(FrameLoopHandle { frame_loop })
    }

    fn cancel(&mut self, handle: FrameLoopHandle) {
        let frame_loop = handle.frame_loop;
        frame_loop.stopped.set(true);
        if let Some(id) = frame_loop.request_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                error!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        frame_loop.callback.borrow_mut().take();
    }
}

pub struct ResizeListener {
    callback: Closure<dyn FnMut()>,
}

pub struct WindowResize {
    window: Window,
}

impl WindowResize {
    const EVENT: &'static str = "resize";

    pub fn new(window: Window) -> Self {
        WindowResize { window }
    }
}

impl ResizeEvents for WindowResize {
    type Listener = ResizeListener;

    fn subscribe(&mut self, handler: ResizeHandler) -> Result<ResizeListener, Error> {
        let callback = Closure::wrap(handler);
        self.window
            .add_event_listener_with_callback(
                Self::EVENT,
                callback.as_ref().unchecked_ref::<Function>(),
            )
            .map_err(|err| Error::host("addEventListener('resize') failed", err))?;
        Ok(ResizeListener { callback })
    }

    fn unsubscribe(&mut self, listener: ResizeListener) {
        if let Err(err) = self.window.remove_event_listener_with_callback(
            Self::EVENT,
            listener.callback.as_ref().unchecked_ref::<Function>(),
        ) {
            error!("removeEventListener('resize') failed: {:?}", err);
        }
    }
}
