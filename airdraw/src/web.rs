//! Browser host binding.
//!
//! Adapts browser objects to the pipeline's capabilities:
//! - [`HtmlVideoSource`]: a playing `<video>` element as a [`CameraDevice`].
//! - [`JsDrawSurface`]: a JS editor object (`dispatch`, `setCurrentTool`,
//!   `getCurrentTool`, `inputs`) as a [`DrawSurface`].
//!
//! [`WebSession`] is the exported entry point. The host acquires the camera
//! stream, runs the recognizer, and calls into the session once per animation
//! frame. Failures talking to JS are logged and swallowed so a frame pass
//! never throws; [`start`] sends those logs to the browser console.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlVideoElement, MediaStreamTrack};

use crate::capture::{CameraDevice, CaptureError, CaptureSession, VideoSource};
use crate::config::PipelineConfig;
use crate::hand::HandObservation;
use crate::overlay::HandMarkers;
use crate::pointer::{Button, Modifiers, PointerEvent};
use crate::render;
use crate::scaling::{FrameGeometry, Size};
use crate::session::SessionCore;
use crate::surface::DrawSurface;

/// Module entry point: route panics and `tracing` output to the browser console.
///
/// With no `tracing` subscriber installed, events are forwarded as `log`
/// records, which `console_log` writes to the console.
///
/// # Errors
///
/// Returns a JS error string if a logger is already installed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(to_js)
}

// =============================================================
// Video source
// =============================================================

/// A `<video>` element playing a camera stream.
pub struct HtmlVideoSource {
    video: HtmlVideoElement,
}

impl HtmlVideoSource {
    /// Wrap `video`, which must already have a stream attached.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::DeviceUnavailable`] when no stream is attached.
    pub fn new(video: HtmlVideoElement) -> Result<Self, CaptureError> {
        if video.src_object().is_none() {
            return Err(CaptureError::DeviceUnavailable("video element has no stream".into()));
        }
        Ok(Self { video })
    }

    /// On-screen size of the video element.
    #[must_use]
    pub fn display_size(&self) -> Option<Size> {
        element_size(&self.video)
    }
}

impl VideoSource for HtmlVideoSource {
    fn frame_size(&self) -> Option<Size> {
        let size = Size::new(f64::from(self.video.video_width()), f64::from(self.video.video_height()));
        size.is_usable().then_some(size)
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }
}

impl CameraDevice for HtmlVideoSource {
    fn stop_tracks(&mut self) {
        if let Some(stream) = self.video.src_object() {
            for track in stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
        self.video.set_src_object(None);
    }
}

// =============================================================
// Draw surface
// =============================================================

/// A JS editor object driven through reflection.
pub struct JsDrawSurface {
    editor: JsValue,
}

impl JsDrawSurface {
    #[must_use]
    pub fn new(editor: JsValue) -> Self {
        Self { editor }
    }

    fn inputs(&self) -> Result<JsValue, JsValue> {
        Reflect::get(&self.editor, &JsValue::from_str("inputs"))
    }

    fn input_flag(&self, name: &str) -> bool {
        self.inputs()
            .and_then(|inputs| Reflect::get(&inputs, &JsValue::from_str(name)))
            .map_or(false, |v| v.is_truthy())
    }

    fn try_dispatch(&self, event: &PointerEvent) -> Result<(), JsValue> {
        let point = Object::new();
        set(&point, "x", &JsValue::from(event.position.x))?;
        set(&point, "y", &JsValue::from(event.position.y))?;

        let info = Object::new();
        set(&info, "type", &JsValue::from_str("pointer"))?;
        set(&info, "target", &JsValue::from_str("canvas"))?;
        set(&info, "name", &JsValue::from_str(event.phase.event_name()))?;
        set(&info, "point", &point)?;
        set(&info, "pointerId", &JsValue::from(event.pointer_id))?;
        set(&info, "button", &JsValue::from(event.button.code()))?;
        set(&info, "shiftKey", &JsValue::from(event.modifiers.shift))?;
        set(&info, "ctrlKey", &JsValue::from(event.modifiers.ctrl))?;
        set(&info, "altKey", &JsValue::from(event.modifiers.alt))?;
        set(&info, "metaKey", &JsValue::from(event.modifiers.meta))?;
        set(&info, "isPen", &JsValue::FALSE)?;

        call(&self.editor, "dispatch", &Array::of1(&info)).map(|_| ())
    }
}

impl DrawSurface for JsDrawSurface {
    fn dispatch_pointer(&mut self, event: &PointerEvent) {
        if let Err(e) = self.try_dispatch(event) {
            tracing::warn!(error = ?e, phase = event.phase.event_name(), "pointer dispatch failed");
        }
    }

    fn set_tool(&mut self, tool: &str) {
        if let Err(e) = call(&self.editor, "setCurrentTool", &Array::of1(&JsValue::from_str(tool))) {
            tracing::warn!(error = ?e, tool, "set tool failed");
        }
    }

    fn current_tool(&self) -> Option<String> {
        match call(&self.editor, "getCurrentTool", &Array::new())
            .and_then(|tool| Reflect::get(&tool, &JsValue::from_str("id")))
        {
            Ok(id) => id.as_string(),
            Err(_) => None,
        }
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.inputs()
            .and_then(|inputs| Reflect::get(&inputs, &JsValue::from_str("buttons")))
            .and_then(|buttons| call(&buttons, "has", &Array::of1(&JsValue::from(button.code()))))
            .map_or(false, |v| v.is_truthy())
    }

    fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.input_flag("shiftKey"),
            ctrl: self.input_flag("ctrlKey"),
            alt: self.input_flag("altKey"),
            meta: self.input_flag("metaKey"),
        }
    }
}

// =============================================================
// Session
// =============================================================

struct Overlay {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Overlay {
    fn backing_size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }
}

/// One camera-drawing session bound to one editor.
#[wasm_bindgen]
pub struct WebSession {
    core: SessionCore,
    capture: CaptureSession<HtmlVideoSource>,
    surface: JsDrawSurface,
    overlay: Option<Overlay>,
}

#[wasm_bindgen]
impl WebSession {
    /// Bind a session to `editor`. `config_json` overrides [`PipelineConfig`] fields.
    ///
    /// # Errors
    ///
    /// Returns a JS error string for malformed or invalid config.
    #[wasm_bindgen(constructor)]
    pub fn new(editor: JsValue, config_json: Option<String>) -> Result<WebSession, JsValue> {
        let config = match config_json {
            Some(raw) => serde_json::from_str::<PipelineConfig>(&raw).map_err(to_js)?,
            None => PipelineConfig::default(),
        };
        let core = SessionCore::new(config).map_err(to_js)?;
        let mut surface = JsDrawSurface::new(editor);
        core.bind(&mut surface);
        Ok(Self { core, capture: CaptureSession::new(), surface, overlay: None })
    }

    /// Start streaming from a `<video>` element the host has attached a camera stream to.
    ///
    /// # Errors
    ///
    /// Returns a JS error string when the element has no stream; the session stays stopped.
    pub fn attach_video(&mut self, video: HtmlVideoElement) -> Result<(), JsValue> {
        self.capture.start(|| HtmlVideoSource::new(video)).map_err(to_js)
    }

    /// Use `canvas` for hand markers. Its backing store is sized to the video frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` when a 2D context cannot be obtained.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn attach_overlay(&mut self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        if let Some(frame) = self.capture.device().and_then(|video| video.frame_size()) {
            // Frame sizes are whole pixels reported by the video element.
            canvas.set_width(frame.width as u32);
            canvas.set_height(frame.height as u32);
        }
        self.overlay = Some(Overlay { canvas, ctx });
        Ok(())
    }

    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.capture.is_streaming()
    }

    /// Whether the video has a frame this session has not processed yet.
    ///
    /// The host should skip recognition entirely when this is `false`.
    pub fn frame_is_new(&mut self) -> bool {
        let Some(video) = self.capture.device() else {
            return false;
        };
        let time = video.current_time();
        self.core.begin_frame(time)
    }

    /// Process one frame of recognizer output, a JSON array of hand observations.
    ///
    /// Returns `true` when a ring pinch stopped the camera.
    ///
    /// # Errors
    ///
    /// Returns a JS error string when `hands_json` does not parse.
    pub fn process_hands(&mut self, hands_json: &str) -> Result<bool, JsValue> {
        let hands: Vec<HandObservation> = serde_json::from_str(hands_json).map_err(to_js)?;
        let geometry = self.geometry();
        let report = self.core.process_hands(&geometry, &hands, &mut self.surface);
        self.draw_overlay(&report.markers);
        if report.stop_requested {
            self.stop();
        }
        Ok(report.stop_requested)
    }

    /// Close any open stroke, release the camera and clear the overlay. Idempotent.
    pub fn stop(&mut self) {
        let geometry = self.geometry();
        self.core.reset(&geometry, &mut self.surface);
        self.capture.stop();
        if let Some(overlay) = &self.overlay {
            render::clear(&overlay.ctx, overlay.backing_size());
        }
    }
}

impl WebSession {
    fn geometry(&self) -> FrameGeometry {
        let window = window_size();
        match self.capture.device() {
            Some(video) => FrameGeometry::new(video.frame_size(), video.display_size(), window),
            None => FrameGeometry::new(None, None, window),
        }
    }

    fn draw_overlay(&self, markers: &[HandMarkers]) {
        let Some(overlay) = &self.overlay else {
            return;
        };
        let viewport = element_size(&overlay.canvas).unwrap_or_else(window_size);
        if let Err(e) = render::draw_markers(&overlay.ctx, markers, viewport, overlay.backing_size()) {
            tracing::warn!(error = ?e, "overlay draw failed");
        }
    }
}

// =============================================================
// Helpers
// =============================================================

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn call(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    function.apply(target, args)
}

fn element_size(element: &Element) -> Option<Size> {
    let rect = element.get_bounding_client_rect();
    let size = Size::new(rect.width(), rect.height());
    size.is_usable().then_some(size)
}

fn window_size() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::new(0.0, 0.0);
    };
    let dimension = |value: Result<JsValue, JsValue>| value.map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    Size::new(dimension(window.inner_width()), dimension(window.inner_height()))
}
