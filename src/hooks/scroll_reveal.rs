use log::{debug, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anim::reveal::{region_progress, stagger_progress, RevealRegion, Rgb};
use crate::config::RevealConfig;
use crate::dom::{self, Listener};
use crate::error::{DomError, Result};

struct RevealTarget {
    element: HtmlElement,
    from: Rgb,
}

struct Reveal {
    region: RevealRegion,
    trigger: HtmlElement,
    targets: Vec<RevealTarget>,
    to: Rgb,
    stagger: f64,
}

impl Reveal {
    fn mount(config: &RevealConfig) -> Result<Self> {
        let region = RevealRegion::parse(config.start, config.end).ok_or_else(|| {
            DomError::Js(format!("bad reveal trigger \"{}\" / \"{}\"", config.start, config.end))
        })?;
        let to = Rgb::parse(config.color)
            .ok_or_else(|| DomError::Js(format!("bad reveal colour {}", config.color)))?;
        let trigger = dom::query(config.trigger)?;
        let targets = dom::query_all(config.targets)?
            .into_iter()
            .map(|element| {
                let from = dom::computed_color(&element)
                    .ok()
                    .and_then(|c| Rgb::parse(&c))
                    .unwrap_or(Rgb(0, 0, 0));
                RevealTarget { element, from }
            })
            .collect::<Vec<_>>();
        if targets.is_empty() {
            return Err(DomError::MissingAnchor(config.targets.to_string()));
        }
        Ok(Self {
            region,
            trigger,
            targets,
            to,
            stagger: config.stagger,
        })
    }

    fn update(&self) -> Result<()> {
        let rect = self.trigger.get_bounding_client_rect();
        let scroll = dom::scroll_y()?;
        let bounds = self
            .region
            .scroll_bounds(rect.top() + scroll, rect.height(), dom::viewport_height()?);
        let progress = region_progress(bounds, scroll);

        let count = self.targets.len();
        for (i, target) in self.targets.iter().enumerate() {
            let t = stagger_progress(progress, i, count, self.stagger);
            dom::set_style(&target.element, "color", &target.from.lerp(self.to, t).to_css())?;
        }
        Ok(())
    }
}

/// Scrub the colour of the reveal targets with the scroll position of their
/// trigger section. Missing anchors leave the text in its static colour.
#[hook]
pub fn use_scroll_reveal(config: RevealConfig) {
    use_effect_with_deps(
        move |config: &RevealConfig| {
            let listeners = match attach(config) {
                Ok(listeners) => listeners,
                Err(e) => {
                    warn!("Scroll reveal disabled: {}", e);
                    Vec::new()
                }
            };
            move || drop(listeners)
        },
        config,
    );
}

fn attach(config: &RevealConfig) -> Result<Vec<Listener>> {
    let reveal = std::rc::Rc::new(Reveal::mount(config)?);
    reveal.update()?;
    debug!("Scroll reveal bound to {} element(s)", reveal.targets.len());

    let window = dom::window()?;
    let mut listeners = Vec::with_capacity(2);
    for event in ["scroll", "resize"] {
        let reveal = reveal.clone();
        listeners.push(Listener::new(&window, event, move |_| {
            if let Err(e) = reveal.update() {
                warn!("Scroll reveal update failed: {}", e);
            }
        })?);
    }
    Ok(listeners)
}
