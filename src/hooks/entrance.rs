use log::{debug, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anim::entrance::{EntranceFrame, EntranceTimeline, PlayOnce};
use crate::anim::frame::{FrameLoop, FrameScheduler, RafScheduler};
use crate::config::EntranceConfig;
use crate::dom;
use crate::error::Result;

/// An element the entrance can style.
pub trait EntranceTarget {
    fn paint(&self, frame: &EntranceFrame) -> Result<()>;
    /// Drop the inline entrance styles, leaving the element at rest.
    fn settle(&self);
}

impl EntranceTarget for HtmlElement {
    fn paint(&self, frame: &EntranceFrame) -> Result<()> {
        for (property, value) in frame.properties() {
            dom::set_style(self, property, &value)?;
        }
        Ok(())
    }

    fn settle(&self) {
        for property in ["transform", "opacity", "filter"] {
            let _ = dom::clear_style(self, property);
        }
    }
}

fn settle_all<T: EntranceTarget>(targets: &[T]) {
    targets.iter().for_each(EntranceTarget::settle);
}

/// Owns the animated targets and settles them when dropped, so an aborted
/// entrance never leaves text hidden.
struct Settling<T: EntranceTarget>(Vec<T>);

impl<T: EntranceTarget> Settling<T> {
    fn targets(&self) -> &[T] {
        &self.0
    }
}

impl<T: EntranceTarget> Drop for Settling<T> {
    fn drop(&mut self) {
        settle_all(&self.0);
    }
}

/// Paint the start state on every target and run the timeline on `scheduler`.
fn play_on<T, S>(targets: Vec<T>, timeline: EntranceTimeline, scheduler: S) -> Result<FrameLoop<S>>
where
    T: EntranceTarget + 'static,
    S: FrameScheduler + 'static,
{
    let targets = Settling(targets);
    for target in targets.targets() {
        target.paint(&timeline.frame(0, 0.0))?;
    }

    let count = targets.targets().len();
    let mut started: Option<f64> = None;
    FrameLoop::start_with(scheduler, move |now| {
        let elapsed = (now - *started.get_or_insert(now)) / 1000.0;
        if timeline.is_complete(count, elapsed) {
            settle_all(targets.targets());
            return false;
        }
        for (i, target) in targets.targets().iter().enumerate() {
            if let Err(e) = target.paint(&timeline.frame(i, elapsed)) {
                warn!("Entrance animation interrupted: {}", e);
                settle_all(targets.targets());
                return false;
            }
        }
        true
    })
}

fn play(timeline: EntranceTimeline) -> Result<Option<FrameLoop>> {
    let elements = dom::query_all(timeline.config().selector)?;
    if elements.is_empty() {
        debug!("No {} elements to animate", timeline.config().selector);
        return Ok(None);
    }
    play_on(elements, timeline, RafScheduler::default()).map(Some)
}

/// Play the entrance once when the calling component mounts. Re-renders
/// never restart it.
#[hook]
pub fn use_entrance(config: EntranceConfig) {
    let latch = use_memo(|_| PlayOnce::default(), ());

    use_effect_with_deps(
        move |_| {
            let frame = if latch.try_fire() {
                match play(EntranceTimeline::new(config)) {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("Entrance animation skipped: {}", e);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(frame)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::anim::frame::manual::ManualScheduler;
    use crate::error::DomError;

    #[derive(Default)]
    struct TextState {
        paints: Cell<u32>,
        fail_from: Cell<Option<u32>>,
        opacity: Cell<Option<f64>>,
    }

    /// Stand-in for a hero text element. `opacity` is `None` once settled.
    #[derive(Clone, Default)]
    struct FakeText(Rc<TextState>);

    impl FakeText {
        fn failing_from(paint: u32) -> Self {
            let text = Self::default();
            text.0.fail_from.set(Some(paint));
            text
        }

        fn is_settled(&self) -> bool {
            self.0.opacity.get().is_none()
        }
    }

    impl EntranceTarget for FakeText {
        fn paint(&self, frame: &EntranceFrame) -> Result<()> {
            let n = self.0.paints.get();
            if self.0.fail_from.get().is_some_and(|from| n >= from) {
                return Err(DomError::Js("style rejected".into()));
            }
            self.0.paints.set(n + 1);
            self.0.opacity.set(Some(frame.opacity));
            Ok(())
        }

        fn settle(&self) {
            self.0.opacity.set(None);
        }
    }

    #[test]
    fn test_plays_to_completion_then_settles() {
        let texts = vec![FakeText::default(), FakeText::default()];
        let scheduler = Rc::new(ManualScheduler::default());
        let frame = play_on(texts.clone(), EntranceTimeline::default(), scheduler.clone()).unwrap();
        assert!(texts.iter().all(|t| t.0.opacity.get() == Some(0.0)));

        scheduler.fire(0.0);
        scheduler.fire(800.0);
        assert!(texts[0].0.opacity.get().unwrap() > texts[1].0.opacity.get().unwrap());

        scheduler.fire(1800.0);
        assert!(texts.iter().all(FakeText::is_settled));
        assert!(!frame.is_running());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_settles_when_loop_cannot_start() {
        let texts = vec![FakeText::default(), FakeText::default()];
        let scheduler = Rc::new(ManualScheduler::default());
        scheduler.fail_requests.set(true);

        assert!(play_on(texts.clone(), EntranceTimeline::default(), scheduler).is_err());
        assert!(texts.iter().all(FakeText::is_settled));
    }

    #[test]
    fn test_settles_when_start_state_cannot_be_painted() {
        let texts = vec![FakeText::default(), FakeText::failing_from(0)];
        let scheduler = Rc::new(ManualScheduler::default());

        assert!(play_on(texts.clone(), EntranceTimeline::default(), scheduler.clone()).is_err());
        assert!(texts.iter().all(FakeText::is_settled));
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_settles_when_a_frame_fails_midway() {
        let texts = vec![FakeText::default(), FakeText::failing_from(2)];
        let scheduler = Rc::new(ManualScheduler::default());
        let frame = play_on(texts.clone(), EntranceTimeline::default(), scheduler.clone()).unwrap();

        scheduler.fire(0.0);
        assert!(!texts[1].is_settled());
        scheduler.fire(100.0);
        assert!(texts.iter().all(FakeText::is_settled));
        assert!(!frame.is_running());
    }

    #[test]
    fn test_unmount_mid_animation_settles() {
        let texts = vec![FakeText::default()];
        let scheduler = Rc::new(ManualScheduler::default());
        let frame = play_on(texts.clone(), EntranceTimeline::default(), scheduler.clone()).unwrap();
        scheduler.fire(0.0);
        scheduler.fire(300.0);
        assert!(!texts[0].is_settled());

        drop(frame);
        assert!(texts[0].is_settled());
        assert!(!scheduler.fire(316.0));
    }
}
