//! Keeps a rendered header in sync with the app store.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use homescreen_core::{Frame, Scheduler, View};
use homescreen_ui::{inspect, layout_and_paint};

use crate::config::HomeConfig;
use crate::error::Result;
use crate::section_header::RenderMode;
use crate::store::Subscription;

type Build = Box<dyn Fn(&RenderMode) -> View>;

struct HostState {
    scheduler: Scheduler,
    config: HomeConfig,
    mode: RenderMode,
    build: Build,
    frame: Option<Frame>,
}

impl HostState {
    fn render(&mut self) -> Result<()> {
        let HostState {
            scheduler,
            config,
            mode,
            build,
            ..
        } = &mut *self;
        let frame = config.provide(|| scheduler.compose(|_| build(mode), layout_and_paint))?;
        self.frame = Some(frame);
        Ok(())
    }
}

/// Owns the render loop for one header.
///
/// In live mode the host re-renders whenever the store's wallpaper slice
/// changes, until it is stopped or dropped.
pub struct SectionHeaderHost {
    state: Rc<RefCell<HostState>>,
    subscription: Option<Subscription>,
}

impl SectionHeaderHost {
    pub fn new(
        config: HomeConfig,
        mode: RenderMode,
        build: impl Fn(&RenderMode) -> View + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                scheduler: Scheduler::new(),
                config,
                mode,
                build: Box::new(build),
                frame: None,
            })),
            subscription: None,
        }
    }

    /// Window size in px.
    pub fn with_size(self, width: u32, height: u32) -> Self {
        self.state.borrow_mut().scheduler.size = (width, height);
        self
    }

    /// Renders the first frame and starts observing the store.
    pub fn start(&mut self) -> Result<()> {
        self.state.borrow_mut().render()?;

        let store = match &self.state.borrow().mode {
            RenderMode::Live(store) => store.clone(),
            RenderMode::Preview => return Ok(()),
        };
        let weak: Weak<RefCell<HostState>> = Rc::downgrade(&self.state);
        self.subscription = Some(store.observe(
            |s| s.wallpaper_state.clone(),
            move |ws| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                log::debug!(
                    "wallpaper changed to {:?}, re-rendering header",
                    ws.current_wallpaper.name
                );
                let Ok(mut state) = state.try_borrow_mut() else {
                    log::warn!("header is already rendering, skipping update");
                    return;
                };
                if let Err(e) = state.render() {
                    log::error!("header re-render failed: {e}");
                }
            },
        ));
        Ok(())
    }

    pub fn stop(&mut self) {
        self.subscription = None;
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn frame(&self) -> Option<Frame> {
        self.state.borrow().frame.clone()
    }

    /// Frames composed since the host was created.
    pub fn render_count(&self) -> u64 {
        self.state.borrow().scheduler.frame_count()
    }

    /// Activates the first clickable region of the latest frame.
    pub fn click_action(&self) -> bool {
        let callback = self
            .state
            .borrow()
            .frame
            .as_ref()
            .and_then(|f| f.clickable_regions().next())
            .and_then(|h| h.on_click.clone());
        match callback {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }

    pub fn semantics_dump(&self) -> String {
        self.state
            .borrow()
            .frame
            .as_ref()
            .map(|f| inspect::dump_semantics(&f.semantics_nodes))
            .unwrap_or_default()
    }
}
