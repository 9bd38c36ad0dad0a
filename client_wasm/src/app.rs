//! Browser session: wasm exports, frame loop and DOM listeners

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use game_core::{Difficulty, Engine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlCanvasElement, KeyboardEvent, PointerEvent, Window};

use crate::diag::{console_log, console_warn};
use crate::frame;
use crate::input;
use crate::renderer::CanvasRenderer;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A registered DOM listener; detached again when dropped
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            console_warn!("Failed to detach {} listener: {e:?}", self.kind);
        }
    }
}

/// Everything a running game holds on to
struct Session {
    window: Window,
    engine: Rc<RefCell<Engine>>,
    renderer: Rc<RefCell<CanvasRenderer>>,
    frame_id: Rc<Cell<Option<i32>>>,
    frame_callback: FrameCallback,
    listeners: Vec<Listener>,
}

impl Drop for Session {
    /// Cancels the pending frame and breaks the frame callback cycle;
    /// listeners detach as they drop
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                console_warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
        self.frame_callback.borrow_mut().take();
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.stop();
        }
    }
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Start the game on the canvas with the given element id
///
/// Calling it again while a game is running does nothing.
#[wasm_bindgen]
pub fn start_game(canvas_id: &str) -> Result<(), JsValue> {
    if SESSION.with(|s| s.borrow().is_some()) {
        return Ok(());
    }
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas #{canvas_id} not found")))?
        .dyn_into::<HtmlCanvasElement>()?;

    let seed = js_sys::Date::now() as u64;
    let mut engine = Engine::new(seed);
    let (width, height) = (canvas.client_width(), canvas.client_height());
    if width > 0 && height > 0 {
        engine.resize(width as f32, height as f32, window.device_pixel_ratio() as f32);
    }
    engine.start();

    let renderer = CanvasRenderer::new(canvas)?;
    let court = engine.canvas();
    renderer.resize(court.width, court.height);

    let mut session = Session {
        window,
        engine: Rc::new(RefCell::new(engine)),
        renderer: Rc::new(RefCell::new(renderer)),
        frame_id: Rc::new(Cell::new(None)),
        frame_callback: Rc::new(RefCell::new(None)),
        listeners: Vec::new(),
    };
    attach_listeners(&mut session, &document.into())?;
    start_frame_loop(&session)?;

    console_log!("Pong started ({} x {})", court.width, court.height);
    SESSION.with(|s| *s.borrow_mut() = Some(session));
    Ok(())
}

/// Stop the frame loop and detach all listeners
///
/// Safe to call when nothing is running.
#[wasm_bindgen]
pub fn stop_game() {
    let Some(session) = SESSION.with(|s| s.borrow_mut().take()) else {
        return;
    };
    drop(session);
    console_log!("Pong stopped");
}

/// Switch the opponent difficulty by name
///
/// Returns `false` for an unknown name or when no game is running.
#[wasm_bindgen]
pub fn set_difficulty(name: &str) -> bool {
    let Some(difficulty) = Difficulty::from_name(name) else {
        console_warn!("Unknown difficulty {name:?}");
        return false;
    };
    SESSION.with(|s| match s.borrow().as_ref() {
        Some(session) => {
            session.engine.borrow_mut().set_difficulty(difficulty);
            true
        }
        None => false,
    })
}

/// Refit the court to a new drawing area in CSS pixels
#[wasm_bindgen]
pub fn resize_canvas(width: f32, height: f32, device_pixel_ratio: f32) {
    SESSION.with(|s| {
        if let Some(session) = s.borrow().as_ref() {
            let mut engine = session.engine.borrow_mut();
            engine.resize(width, height, device_pixel_ratio);
            let court = engine.canvas();
            session.renderer.borrow().resize(court.width, court.height);
        }
    });
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, JsValue> {
    match callback.borrow().as_ref() {
        Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
        None => Err(JsValue::from_str("Frame callback dropped")),
    }
}

fn start_frame_loop(session: &Session) -> Result<(), JsValue> {
    let window = session.window.clone();
    let engine = Rc::clone(&session.engine);
    let renderer = Rc::clone(&session.renderer);
    let frame_id = Rc::clone(&session.frame_id);
    let callback = Rc::clone(&session.frame_callback);

    *session.frame_callback.borrow_mut() = Some(Closure::new(move || {
        frame_id.set(None);
        {
            let mut engine = engine.borrow_mut();
            if !engine.is_running() {
                return;
            }
            frame::run_frame(&mut engine, &mut *renderer.borrow_mut());
        }
        match request_frame(&window, &callback) {
            Ok(id) => frame_id.set(Some(id)),
            Err(e) => console_warn!("requestAnimationFrame failed: {e:?}"),
        }
    }));

    let id = request_frame(&session.window, &session.frame_callback)?;
    session.frame_id.set(Some(id));
    Ok(())
}

fn listen(
    session: &mut Session,
    target: &EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
) -> Result<(), JsValue> {
    session
        .listeners
        .push(Listener::attach(target, kind, callback)?);
    Ok(())
}

fn attach_listeners(session: &mut Session, document: &EventTarget) -> Result<(), JsValue> {
    // Keyboard: keydown
    {
        let engine = Rc::clone(&session.engine);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |evt: web_sys::Event| {
            let Some(evt) = evt.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if input::handle_key_down(&mut engine.borrow_mut(), &evt.key(), evt.repeat()) {
                evt.prevent_default();
            }
        });
        listen(session, document, "keydown", callback)?;
    }

    // Keyboard: keyup
    {
        let engine = Rc::clone(&session.engine);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |evt: web_sys::Event| {
            let Some(evt) = evt.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if input::handle_key_up(&mut engine.borrow_mut(), &evt.key()) {
                evt.prevent_default();
            }
        });
        listen(session, document, "keyup", callback)?;
    }

    // Pointer drag on the left half of the canvas
    let canvas: EventTarget = session.renderer.borrow().canvas().clone().into();
    for kind in ["pointerdown", "pointermove"] {
        let engine = Rc::clone(&session.engine);
        let renderer = Rc::clone(&session.renderer);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |evt: web_sys::Event| {
            let Some(evt) = evt.dyn_ref::<PointerEvent>() else {
                return;
            };
            if kind == "pointermove" && evt.buttons() == 0 && evt.pointer_type() == "mouse" {
                return;
            }
            let rect = renderer.borrow().canvas().get_bounding_client_rect();
            let mut engine = engine.borrow_mut();
            let court = engine.canvas();
            if let Some(y) = input::pointer_target_y(
                evt.offset_x() as f32,
                evt.offset_y() as f32,
                rect.width() as f32,
                rect.height() as f32,
                &court,
            ) {
                evt.prevent_default();
                engine.on_touch_move(y);
            }
        });
        listen(session, &canvas, kind, callback)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn ping(target: &EventTarget) {
        let event = web_sys::Event::new("ping").expect("event");
        target.dispatch_event(&event).expect("dispatch");
    }

    #[wasm_bindgen_test]
    fn test_dropped_listener_is_detached() {
        let target = EventTarget::new().expect("event target");
        let hits = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&hits);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
            counter.set(counter.get() + 1);
        });

        let listener = Listener::attach(&target, "ping", callback).expect("attach");
        ping(&target);
        assert_eq!(hits.get(), 1);

        drop(listener);
        ping(&target);
        assert_eq!(hits.get(), 1);
        assert_eq!(Rc::strong_count(&hits), 1, "Callback freed with the listener");
    }

    #[wasm_bindgen_test]
    fn test_failed_start_leaves_nothing_running() {
        assert!(start_game("no-such-canvas").is_err());
        assert!(!set_difficulty("hard"));
        stop_game();
    }

    #[wasm_bindgen_test]
    fn test_start_stop_releases_engine() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let canvas = document.create_element("canvas").expect("canvas");
        canvas.set_id("pong-test");
        document
            .body()
            .expect("body")
            .append_child(&canvas)
            .expect("append");

        start_game("pong-test").expect("start");
        start_game("pong-test").expect("second start is a no-op");
        let engine = SESSION.with(|s| {
            s.borrow()
                .as_ref()
                .map(|session| Rc::clone(&session.engine))
                .expect("session")
        });
        assert!(set_difficulty("Easy"));

        stop_game();
        stop_game();

        assert!(!engine.borrow().is_running());
        assert_eq!(Rc::strong_count(&engine), 1, "Listeners and frame loop released");
        canvas.remove();
    }
}
