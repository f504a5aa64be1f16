//! Pointer tilt hook.

use std::rc::Rc;

use dioxus::prelude::*;
use kinetic_core::{ElementRect, Point, Tilt, TiltConfig, TiltFrame};

use crate::platform::read_preferences;

/// Handle returned by [`use_tilt`]. Wire its methods to the element's events.
#[derive(Clone, Copy, PartialEq)]
pub struct UseTilt {
    tilt: Signal<Option<Tilt>>,
    element: Signal<Option<Rc<MountedData>>>,
    rect: Signal<Option<ElementRect>>,
    frame: Signal<TiltFrame>,
    transition_ms: u64,
}

impl UseTilt {
    /// Whether pointer listeners should be attached.
    ///
    /// False until preferences resolve, and forever under reduced motion.
    pub fn is_active(&self) -> bool {
        self.tilt.read().as_ref().is_some_and(Tilt::is_attached)
    }

    pub fn glare_enabled(&self) -> bool {
        self.frame.read().glare.is_some()
    }

    /// Inline style for the current frame.
    pub fn style(&self) -> String {
        self.frame.read().style(self.transition_ms)
    }

    pub fn mounted(&mut self, evt: MountedEvent) {
        self.element.set(Some(evt.data()));
    }

    /// Re-measure the element (layout may have moved since the last hover).
    pub fn refresh_rect(&mut self) {
        let Some(element) = self.element.cloned() else {
            return;
        };
        let mut rect = self.rect;
        spawn(async move {
            match element.get_client_rect().await {
                Ok(r) => rect.set(Some(ElementRect::new(
                    r.origin.x,
                    r.origin.y,
                    r.size.width,
                    r.size.height,
                ))),
                Err(e) => tracing::debug!("Could not measure tilt element: {:?}", e),
            }
        });
    }

    pub fn pointer_move(&mut self, evt: MouseEvent) {
        let Some(rect) = (self.rect)() else {
            return;
        };
        let client = evt.client_coordinates();
        let mut guard = self.tilt.write();
        let frame = guard
            .as_mut()
            .and_then(|tilt| tilt.pointer_move(rect, Point::new(client.x, client.y)));
        drop(guard);
        if let Some(frame) = frame {
            self.frame.set(frame);
        }
    }

    pub fn pointer_leave(&mut self) {
        let mut guard = self.tilt.write();
        let frame = guard.as_mut().and_then(Tilt::pointer_leave);
        drop(guard);
        if let Some(frame) = frame {
            self.frame.set(frame);
        }
    }
}

/// Attach a 3D tilt to an element.
///
/// Preferences are read once on mount; under reduced motion the tilt stays
/// inert and [`UseTilt::is_active`] never turns true. Invalid configuration is
/// logged and leaves the element static.
pub fn use_tilt(config: TiltConfig) -> UseTilt {
    let mut tilt = use_signal(|| None::<Tilt>);
    let element = use_signal(|| None);
    let rect = use_signal(|| None);
    let frame = use_signal(|| TiltFrame::identity(config.enable_glare));

    use_hook(move || {
        spawn(async move {
            let prefs = read_preferences().await;
            match Tilt::new(config, &prefs) {
                Ok(t) => tilt.set(Some(t)),
                Err(e) => tracing::warn!("Tilt disabled: {}", e),
            }
        });
    });

    use_drop(move || {
        if let Ok(mut guard) = tilt.try_write() {
            if let Some(t) = guard.as_mut() {
                t.detach();
            }
        }
    });

    UseTilt {
        tilt,
        element,
        rect,
        frame,
        transition_ms: config.transition_speed_ms,
    }
}
