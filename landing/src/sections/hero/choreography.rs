//! What the hero does when it attaches to the page, independent of the DOM.
//!
//! `attach` starts one entrance timeline and two endless loops on a
//! [`MotionDriver`] and hands back a [`Disposer`]. Disposing cancels all
//! three, so a hero that unmounts leaves nothing running.

use tracing::debug;

use crate::config::{EntranceConfig, MotionConfig};
use crate::motion::{AnimationId, MotionDriver, Timeline, Tween};

/// Nodes the hero animates, resolved once the view is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroTargets<T> {
    /// Wrapper around the role wall (breathes)
    pub text_layer: T,
    /// Each role span, in render order
    pub roles: Vec<T>,
    pub image: T,
    /// Each headline line, in render order
    pub headlines: Vec<T>,
}

/// Ids of everything `attach` started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroPlayback {
    pub entrance: AnimationId,
    pub float: AnimationId,
    pub breathe: AnimationId,
}

/// Detach hook returned by [`attach`]. Consumed on use.
#[must_use = "dropping a Disposer leaves the hero animations running"]
pub struct Disposer {
    playback: HeroPlayback,
    dispose: Box<dyn FnOnce(HeroPlayback)>,
}

impl Disposer {
    pub fn playback(&self) -> HeroPlayback {
        self.playback
    }

    pub fn dispose(self) {
        debug!(entrance = self.playback.entrance.raw(), "hero detached");
        (self.dispose)(self.playback);
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("playback", &self.playback)
            .finish_non_exhaustive()
    }
}

/// The one-shot entrance: role wall, then image, then headlines, overlapping.
pub fn entrance_timeline<T: Clone>(
    targets: &HeroTargets<T>,
    entrance: &EntranceConfig,
) -> Timeline<T> {
    Timeline::new()
        .with(
            Tween::from_state(targets.roles.clone(), entrance.roles.tween),
            entrance.roles.at,
        )
        .with(
            Tween::from_state(vec![targets.image.clone()], entrance.image.tween),
            entrance.image.at,
        )
        .with(
            Tween::from_state(targets.headlines.clone(), entrance.headlines.tween),
            entrance.headlines.at,
        )
}

/// Start the hero motion on `driver`.
pub fn attach<T, D>(driver: &D, targets: HeroTargets<T>, motion: &MotionConfig) -> Disposer
where
    T: Clone,
    D: MotionDriver<T> + Clone + 'static,
{
    let entrance = driver.play_timeline(entrance_timeline(&targets, &motion.entrance));

    let HeroTargets {
        text_layer, image, ..
    } = targets;
    let float = driver.play_tween(Tween::to_state(vec![image], motion.float));
    let breathe = driver.play_tween(Tween::to_state(vec![text_layer], motion.breathe));

    let playback = HeroPlayback {
        entrance,
        float,
        breathe,
    };
    debug!(?playback, "hero attached");

    let driver = driver.clone();
    Disposer {
        playback,
        dispose: Box::new(move |playback: HeroPlayback| {
            driver.kill(playback.entrance);
            driver.kill(playback.float);
            driver.kill(playback.breathe);
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Direction, Repeat, Spring, Timeline, Tween};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Node stand-in: which element of the hero it is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Node {
        Layer,
        Role(usize),
        Image,
        Line(usize),
    }

    #[derive(Default)]
    struct Log {
        next: u64,
        timelines: Vec<(AnimationId, Timeline<Node>)>,
        tweens: Vec<(AnimationId, Tween<Node>)>,
        kills: Vec<AnimationId>,
    }

    /// Driver that records instead of animating.
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Log>>);

    impl Recorder {
        fn id(&self) -> AnimationId {
            let mut log = self.0.borrow_mut();
            log.next += 1;
            AnimationId::from_raw(log.next)
        }
    }

    impl MotionDriver<Node> for Recorder {
        fn play_timeline(&self, timeline: Timeline<Node>) -> AnimationId {
            let id = self.id();
            self.0.borrow_mut().timelines.push((id, timeline));
            id
        }

        fn play_tween(&self, tween: Tween<Node>) -> AnimationId {
            let id = self.id();
            self.0.borrow_mut().tweens.push((id, tween));
            id
        }

        fn play_spring(&self, _target: Node, _spring: Spring) -> AnimationId {
            self.id()
        }

        fn retarget(&self, _id: AnimationId, _value: f64) {}

        fn kill(&self, id: AnimationId) {
            self.0.borrow_mut().kills.push(id);
        }
    }

    fn targets() -> HeroTargets<Node> {
        HeroTargets {
            text_layer: Node::Layer,
            roles: (0..20).map(Node::Role).collect(),
            image: Node::Image,
            headlines: (0..4).map(Node::Line).collect(),
        }
    }

    #[test]
    fn attach_schedules_one_timeline_with_three_offset_steps() {
        let driver = Recorder::default();
        let _disposer = attach(&driver, targets(), &MotionConfig::default());

        let log = driver.0.borrow();
        assert_eq!(log.timelines.len(), 1);
        let (_, timeline) = &log.timelines[0];

        let offsets: Vec<f64> = timeline.steps().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.2, 0.4]);

        let steps = timeline.steps();
        assert_eq!(steps[0].tween.targets().len(), 20);
        assert_eq!(steps[1].tween.targets(), &[Node::Image]);
        assert_eq!(steps[2].tween.targets().len(), 4);
        assert!(steps.iter().all(|s| s.tween.direction() == Direction::From));
    }

    #[test]
    fn image_step_is_the_only_overshooting_one() {
        let timeline = entrance_timeline(&targets(), &EntranceConfig::default());
        let overshoots: Vec<bool> = timeline
            .steps()
            .iter()
            .map(|s| {
                let ease = s.tween.spec().ease;
                (1..100).any(|i| ease.apply(i as f64 / 100.0) > 1.0)
            })
            .collect();
        assert_eq!(overshoots, vec![false, true, false]);

        let image = timeline.steps()[1].tween.spec();
        assert_eq!(image.vars.opacity, Some(0.0));
        assert_eq!(image.vars.y, Some(40.0));
        assert_eq!(image.vars.scale, Some(0.95));
        assert_eq!(image.duration, 1.2);
    }

    #[test]
    fn attach_always_starts_both_endless_yoyo_loops() {
        let driver = Recorder::default();
        let _disposer = attach(&driver, targets(), &MotionConfig::default());

        let log = driver.0.borrow();
        assert_eq!(log.tweens.len(), 2);

        let (_, float) = &log.tweens[0];
        assert_eq!(float.targets(), &[Node::Image]);
        assert_eq!(float.spec().repeat, Repeat::Infinite);
        assert!(float.spec().yoyo);
        assert_eq!(float.spec().duration, 2.0);
        assert_eq!(float.spec().vars.y, Some(-8.0));

        let (_, breathe) = &log.tweens[1];
        assert_eq!(breathe.targets(), &[Node::Layer]);
        assert_eq!(breathe.spec().repeat, Repeat::Infinite);
        assert!(breathe.spec().yoyo);
        assert_eq!(breathe.spec().duration, 6.0);
        assert_eq!(breathe.spec().vars.scale, Some(1.01));
    }

    #[test]
    fn loops_start_even_without_entrance_targets() {
        let driver = Recorder::default();
        let bare = HeroTargets {
            roles: Vec::new(),
            headlines: Vec::new(),
            ..targets()
        };
        let _disposer = attach(&driver, bare, &MotionConfig::default());
        assert_eq!(driver.0.borrow().tweens.len(), 2);
    }

    #[test]
    fn nothing_is_killed_until_dispose() {
        let driver = Recorder::default();
        let disposer = attach(&driver, targets(), &MotionConfig::default());
        assert!(driver.0.borrow().kills.is_empty());
        disposer.dispose();
        assert_eq!(driver.0.borrow().kills.len(), 3);
    }

    #[test]
    fn dispose_kills_the_entrance_exactly_once_and_the_loops() {
        let driver = Recorder::default();
        let disposer = attach(&driver, targets(), &MotionConfig::default());
        let playback = disposer.playback();
        disposer.dispose();

        let log = driver.0.borrow();
        let entrance_kills = log.kills.iter().filter(|id| **id == playback.entrance).count();
        assert_eq!(entrance_kills, 1);
        assert!(log.kills.contains(&playback.float));
        assert!(log.kills.contains(&playback.breathe));
        assert_eq!(log.timelines[0].0, playback.entrance);
    }

    #[test]
    fn entrance_hides_everything_before_the_first_frame() {
        let timeline = entrance_timeline(&targets(), &EntranceConfig::default());
        assert!(timeline.sample(0.0).all(|(_, pose, _)| pose.opacity == 0.0));
        assert!(timeline.is_complete(2.0));
    }
}
