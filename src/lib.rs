mod utils;

pub mod animator;
pub mod browser;
pub mod canvas;
pub mod color;
pub mod console_log;
pub mod error;
pub mod field;
pub mod host;
pub mod particle;
pub mod surface;

#[cfg(test)]
mod mock;

use animator::Animator;
use browser::{AnimationFrames, WindowResize};
use canvas::CanvasSurface;
use field::FieldConfig;
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::{console, HtmlCanvasElement};

pub use error::Error;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    // A second call finds the logger already installed, which is fine.
    let _ = console_log::init(LevelFilter::Info);
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

type BrowserAnimator = Animator<CanvasSurface, AnimationFrames, WindowResize>;

/// Connect-the-dots background bound to one canvas. Animates from `attach`
/// until `detach` (or `free`).
#[wasm_bindgen]
pub struct ConnectTheDots {
    animator: Option<BrowserAnimator>,
}

#[wasm_bindgen]
impl ConnectTheDots {
    pub fn attach(canvas: HtmlCanvasElement) -> Result<ConnectTheDots, JsValue> {
        let window = browser::window()?;
        let surface = CanvasSurface::new(canvas)?;
        let animator = Animator::attach(
            surface,
            AnimationFrames::new(window.clone()),
            WindowResize::new(window),
            FieldConfig::default(),
            &mut rand::thread_rng(),
        )?;
        Ok(ConnectTheDots {
            animator: Some(animator),
        })
    }

    pub fn detach(&mut self) {
        if let Some(animator) = self.animator.take() {
            animator.detach();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.animator
            .as_ref()
            .map(|animator| animator.is_attached())
            .unwrap_or(false)
    }

    pub fn particle_count(&self) -> usize {
        self.animator
            .as_ref()
            .map(|animator| animator.field().len())
            .unwrap_or(0)
    }

    pub fn width(&self) -> u32 {
        self.animator
            .as_ref()
            .map(|animator| animator.bounds().width)
            .unwrap_or(0)
    }

    pub fn height(&self) -> u32 {
        self.animator
            .as_ref()
            .map(|animator| animator.bounds().height)
            .unwrap_or(0)
    }
}
