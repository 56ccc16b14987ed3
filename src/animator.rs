// Animator ties a particle field to a surface and keeps it moving:
// one simulate-then-render frame per refresh until detached

use crate::error::Error;
use crate::field::{FieldConfig, ParticleField};
use crate::host::{FrameScheduler, ResizeEvents};
use crate::particle::Bounds;
use crate::surface::Surface;
use log::{debug, info, warn};
use rand::Rng;
use std::cell::{Ref, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

struct Scene<S> {
    surface: S,
    field: ParticleField,
    lost: bool,
}

impl<S: Surface> Scene<S> {
    fn render(&mut self) -> Result<(), Error> {
        self.surface.clear()?;
        self.field.step();
        self.field.draw(&mut self.surface)
    }

    fn frame(&mut self) -> ControlFlow<()> {
        if self.lost {
            return ControlFlow::Break(());
        }
        match self.render() {
            Ok(()) => ControlFlow::Continue(()),
            Err(Error::SurfaceDetached) => {
                warn!("surface detached, stopping animation");
                self.lost = true;
                ControlFlow::Break(())
            }
            Err(err) => {
                debug!("skipping frame: {}", err);
                ControlFlow::Continue(())
            }
        }
    }

    fn refit(&mut self) {
        if self.lost {
            return;
        }
        match self.surface.fit_to_display() {
            Ok(bounds) => self.field.resize(bounds),
            Err(err) => warn!("ignoring resize: {}", err),
        }
    }
}

// The resize subscription, shared with the frame tick so a lost surface can
// drop it the same way detach does.
struct ResizeHook<R: ResizeEvents> {
    events: R,
    listener: Option<R::Listener>,
}

impl<R: ResizeEvents> ResizeHook<R> {
    fn release(&mut self) -> bool {
        match self.listener.take() {
            Some(listener) => {
                self.events.unsubscribe(listener);
                true
            }
            None => false,
        }
    }
}

pub struct Animator<S, F, R>
where
    S: Surface + 'static,
    F: FrameScheduler,
    R: ResizeEvents + 'static,
{
    scene: Rc<RefCell<Scene<S>>>,
    frames: F,
    frame_loop: Option<F::Handle>,
    resize: Rc<RefCell<ResizeHook<R>>>,
}

impl<S, F, R> Animator<S, F, R>
where
    S: Surface + 'static,
    F: FrameScheduler,
    R: ResizeEvents + 'static,
{
    /// Size the surface, spawn the field, draw the first frame, then hand the
    /// rest of the frames to `frames` and listen for resizes.
    pub fn attach<G: Rng + ?Sized>(
        mut surface: S,
        mut frames: F,
        resize: R,
        config: FieldConfig,
        rng: &mut G,
    ) -> Result<Self, Error> {
        let bounds = surface.fit_to_display()?;
        let field = ParticleField::spawn(bounds, config, rng);
        if field.is_empty() {
            warn!("attaching an empty particle field");
        }
        info!(
            "attaching {} particles to a {}x{} surface",
            field.len(),
            bounds.width,
            bounds.height
        );

        let scene = Rc::new(RefCell::new(Scene {
            surface,
            field,
            lost: false,
        }));
        if scene.borrow_mut().frame().is_break() {
            return Err(Error::SurfaceDetached);
        }

        let hook = Rc::new(RefCell::new(ResizeHook {
            events: resize,
            listener: None,
        }));

        let frame_scene = Rc::downgrade(&scene);
        let frame_hook = Rc::downgrade(&hook);
        let frame_loop = frames.start(Box::new(move || tick(&frame_scene, &frame_hook)))?;

        let resize_scene = Rc::downgrade(&scene);
        let subscribed = hook.borrow_mut().events.subscribe(Box::new(move || {
            if let Some(scene) = resize_scene.upgrade() {
                scene.borrow_mut().refit();
            }
        }));
        match subscribed {
            Ok(listener) => hook.borrow_mut().listener = Some(listener),
            Err(err) => {
                frames.cancel(frame_loop);
                return Err(err);
            }
        }

        Ok(Animator {
            scene,
            frames,
            frame_loop: Some(frame_loop),
            resize: hook,
        })
    }

    pub fn field(&self) -> Ref<'_, ParticleField> {
        Ref::map(self.scene.borrow(), |scene| &scene.field)
    }

    pub fn bounds(&self) -> Bounds {
        self.scene.borrow().field.bounds()
    }

    /// False once detached or once the surface has gone away.
    pub fn is_attached(&self) -> bool {
        self.frame_loop.is_some() && !self.scene.borrow().lost
    }

    /// Stop the frame loop and drop the resize subscription.
    pub fn detach(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let mut released = false;
        if let Some(handle) = self.frame_loop.take() {
            self.frames.cancel(handle);
            released = true;
        }
        if self.resize.borrow_mut().release() {
            released = true;
        }
        if released {
            info!("animator detached");
        }
    }
}

impl<S, F, R> Drop for Animator<S, F, R>
where
    S: Surface + 'static,
    F: FrameScheduler,
    R: ResizeEvents + 'static,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

// Ending the loop from inside releases the resize listener too; the loop
// itself is already stopping, and its handle is cancelled on detach.
fn tick<S: Surface, R: ResizeEvents>(
    scene: &Weak<RefCell<Scene<S>>>,
    hook: &Weak<RefCell<ResizeHook<R>>>,
) -> ControlFlow<()> {
    let flow = match scene.upgrade() {
        Some(scene) => scene.borrow_mut().frame(),
        None => ControlFlow::Break(()),
    };
    if flow.is_break() {
        if let Some(hook) = hook.upgrade() {
            if hook.borrow_mut().release() {
                info!("resize listener released after surface loss");
            }
        }
    }
    flow
}
