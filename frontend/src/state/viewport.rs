use crate::config::PaddingMode;
use leptos::*;

#[cfg(target_arch = "wasm32")]
const RESIZE_DEBOUNCE_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalPadding {
    Narrow,
    Wide,
}

impl HorizontalPadding {
    /// Widths under the breakpoint are narrow; an unknown width renders wide.
    pub fn for_width(width: Option<f64>, narrow_breakpoint_px: u32) -> Self {
        match width {
            Some(w) if w < f64::from(narrow_breakpoint_px) => HorizontalPadding::Narrow,
            _ => HorizontalPadding::Wide,
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            HorizontalPadding::Narrow => "16px",
            HorizontalPadding::Wide => "50px",
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn current_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_width() -> Option<f64> {
    None
}

pub fn use_viewport_width(mode: PaddingMode) -> Signal<Option<f64>> {
    match mode {
        PaddingMode::OneShot => {
            let width = current_width();
            Signal::derive(move || width)
        }
        PaddingMode::Live => {
            let (width, set_width) = create_signal(current_width());
            track_resize(set_width);
            width.into()
        }
    }
}

/// Re-samples the viewport width into a signal on debounced window resizes.
/// Dropping the tracker removes the listener and cancels any pending sample.
#[cfg(target_arch = "wasm32")]
pub struct ResizeTracker {
    handle: Option<leptos::leptos_dom::helpers::WindowListenerHandle>,
    pending: std::rc::Rc<std::cell::RefCell<Option<gloo_timers::callback::Timeout>>>,
}

#[cfg(target_arch = "wasm32")]
impl ResizeTracker {
    pub fn new(set_width: WriteSignal<Option<f64>>) -> Self {
        use gloo_timers::callback::Timeout;

        let pending = std::rc::Rc::new(std::cell::RefCell::new(None::<Timeout>));
        let pending_for_listener = pending.clone();
        let handle = window_event_listener(ev::resize, move |_| {
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                set_width.set(current_width());
            });
            // Replacing the previous timeout drops, and so cancels, it.
            *pending_for_listener.borrow_mut() = Some(timeout);
        });
        Self {
            handle: Some(handle),
            pending,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeTracker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
        self.pending.borrow_mut().take();
    }
}

#[cfg(target_arch = "wasm32")]
fn track_resize(set_width: WriteSignal<Option<f64>>) {
    let tracker = ResizeTracker::new(set_width);
    on_cleanup(move || drop(tracker));
}

#[cfg(not(target_arch = "wasm32"))]
fn track_resize(_set_width: WriteSignal<Option<f64>>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_below_breakpoint_is_narrow() {
        assert_eq!(
            HorizontalPadding::for_width(Some(375.0), 768),
            HorizontalPadding::Narrow
        );
        assert_eq!(
            HorizontalPadding::for_width(Some(767.5), 768),
            HorizontalPadding::Narrow
        );
    }

    #[test]
    fn width_at_or_above_breakpoint_is_wide() {
        assert_eq!(
            HorizontalPadding::for_width(Some(768.0), 768),
            HorizontalPadding::Wide
        );
        assert_eq!(
            HorizontalPadding::for_width(Some(1920.0), 768),
            HorizontalPadding::Wide
        );
    }

    #[test]
    fn unknown_width_is_wide() {
        assert_eq!(
            HorizontalPadding::for_width(None, 768),
            HorizontalPadding::Wide
        );
        assert_eq!(HorizontalPadding::Wide.as_css(), "50px");
    }
}
