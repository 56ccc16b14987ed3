// Recording stand-ins for the host, shared with the test through Rc handles

use crate::color::Color;
use crate::error::Error;
use crate::host::{FrameScheduler, FrameTick, ResizeEvents, ResizeHandler};
use crate::particle::Bounds;
use crate::surface::Surface;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Line {
        color: Color,
        opacity: f64,
        width: f64,
        from: Vector2<f64>,
        to: Vector2<f64>,
    },
    Circle {
        color: Color,
        center: Vector2<f64>,
        radius: f64,
    },
}

struct SurfaceState {
    bounds: Bounds,
    detached: bool,
    fail_draws: bool,
    fits: usize,
    calls: Vec<DrawCall>,
}

#[derive(Clone)]
pub struct MockSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        MockSurface {
            state: Rc::new(RefCell::new(SurfaceState {
                bounds: Bounds::new(width, height),
                detached: false,
                fail_draws: false,
                fits: 0,
                calls: Vec::new(),
            })),
        }
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.state.borrow_mut().bounds = Bounds::new(width, height);
    }

    pub fn detach(&self) {
        self.state.borrow_mut().detached = true;
    }

    pub fn fail_draws(&self, fail: bool) {
        self.state.borrow_mut().fail_draws = fail;
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_log(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn fits(&self) -> usize {
        self.state.borrow().fits
    }

    fn record(&mut self, call: DrawCall) -> Result<(), Error> {
        let mut state = self.state.borrow_mut();
        if state.detached {
            return Err(Error::SurfaceDetached);
        }
        if state.fail_draws && call != DrawCall::Clear {
            return Err(Error::Draw("mock failure".to_owned()));
        }
        state.calls.push(call);
        Ok(())
    }
}

impl Surface for MockSurface {
    fn fit_to_display(&mut self) -> Result<Bounds, Error> {
        let mut state = self.state.borrow_mut();
        if state.detached {
            return Err(Error::SurfaceDetached);
        }
        state.fits += 1;
        Ok(state.bounds)
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.record(DrawCall::Clear)
    }

    fn draw_line(
        &mut self,
        color: Color,
        opacity: f64,
        width: f64,
        from: Vector2<f64>,
        to: Vector2<f64>,
    ) -> Result<(), Error> {
        self.record(DrawCall::Line {
            color,
            opacity,
            width,
            from,
            to,
        })
    }

    fn fill_circle(
        &mut self,
        color: Color,
        center: Vector2<f64>,
        radius: f64,
    ) -> Result<(), Error> {
        self.record(DrawCall::Circle {
            color,
            center,
            radius,
        })
    }
}

#[derive(Default)]
struct FramesState {
    tick: Option<FrameTick>,
    starts: usize,
    cancels: usize,
}

/// Frame scheduler that only ticks when the test calls `pump`.
#[derive(Clone, Default)]
pub struct MockFrames {
    state: Rc<RefCell<FramesState>>,
}

impl MockFrames {
    /// Run one pending frame. Returns false if nothing was scheduled.
    pub fn pump(&self) -> bool {
        let tick = self.state.borrow_mut().tick.take();
        match tick {
            Some(mut tick) => {
                if let ControlFlow::Continue(()) = tick() {
                    self.state.borrow_mut().tick = Some(tick);
                }
                true
            }
            None => false,
        }
    }

    pub fn pump_n(&self, frames: usize) {
        for _ in 0..frames {
            self.pump();
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().tick.is_some()
    }

    pub fn starts(&self) -> usize {
        self.state.borrow().starts
    }

    pub fn cancels(&self) -> usize {
        self.state.borrow().cancels
    }
}

impl FrameScheduler for MockFrames {
    type Handle = ();

    fn start(&mut self, tick: FrameTick) -> Result<(), Error> {
        let mut state = self.state.borrow_mut();
        state.tick = Some(tick);
        state.starts += 1;
        Ok(())
    }

    fn cancel(&mut self, _handle: ()) {
        let mut state = self.state.borrow_mut();
        state.tick = None;
        state.cancels += 1;
    }
}

#[derive(Default)]
struct ResizeState {
    handler: Option<ResizeHandler>,
    unsubscribes: usize,
}

#[derive(Clone, Default)]
pub struct MockResize {
    state: Rc<RefCell<ResizeState>>,
}

impl MockResize {
    pub fn fire(&self) {
        let handler = self.state.borrow_mut().handler.take();
        if let Some(mut handler) = handler {
            handler();
            self.state.borrow_mut().handler = Some(handler);
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.state.borrow().handler.is_some()
    }

    pub fn unsubscribes(&self) -> usize {
        self.state.borrow().unsubscribes
    }
}

impl ResizeEvents for MockResize {
    type Listener = ();

    fn subscribe(&mut self, handler: ResizeHandler) -> Result<(), Error> {
        self.state.borrow_mut().handler = Some(handler);
        Ok(())
    }

    fn unsubscribe(&mut self, _listener: ()) {
        let mut state = self.state.borrow_mut();
        state.handler = None;
        state.unsubscribes += 1;
    }
}
