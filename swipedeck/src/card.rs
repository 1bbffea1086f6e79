// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card controller: one card's drag state machine and presentation.
//!
//! ## States
//!
//! | From | Call | To |
//! |---|---|---|
//! | `Idle`, `Cancelling` | [`begin_drag`](CardController::begin_drag) | `Dragging` |
//! | `Dragging` | [`update_drag`](CardController::update_drag) | `Dragging` |
//! | `Dragging` | [`end_drag`](CardController::end_drag) within the threshold, [`cancel`](CardController::cancel) | `Cancelling` |
//! | `Dragging` | [`end_drag`](CardController::end_drag) past the threshold | `Committing` |
//! | `Idle`, `Dragging`, `Cancelling` | [`like`](CardController::like), [`dislike`](CardController::dislike) | `Committing` |
//! | `Cancelling` | spring-back finishes in [`advance`](CardController::advance) | `Idle` |
//!
//! `Committing` is terminal. Once the exit animation finishes the card is detached and reports
//! [`CardEvent::Committed`]; its owner then discards it.
//!
//! ## Events
//!
//! Every operation returns the event it produces instead of calling back into its owner.
//! [`WillCommit`](CardEvent::WillCommit) and [`Cancelled`](CardEvent::Cancelled) are returned
//! synchronously, before any animation has run. [`Committed`](CardEvent::Committed) is returned
//! by a later [`CardController::advance`].

use core::time::Duration;

use kurbo::{Affine, Point, Size, Vec2};
use swipedeck_decision::classify::{classify_moving, classify_release, drag_rotation};
use swipedeck_decision::types::{Decision, Direction};

use crate::animation::{Animation, AnimationKind, Pose};
use crate::config::SwipeConfig;
use crate::error::TransitionError;

/// Interaction state of a card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SlideState {
    /// At rest, accepting drags and commands.
    Idle,
    /// Following the pointer; carries the latest cumulative drag vector.
    Dragging(Vec2),
    /// Committed and leaving the deck. Terminal.
    Committing(Direction),
    /// Springing back to rest after a cancelled drag.
    Cancelling,
}

/// Notification from a card to its owner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CardEvent {
    /// The card committed; the owner should drop it from its stack now.
    WillCommit(Direction),
    /// The exit animation finished and the card was detached.
    Committed(Direction),
    /// A drag ended within the threshold; the card is springing back.
    Cancelled,
    /// The drag moved; carries the cumulative drag vector.
    Sliding(Vec2),
}

/// What a host needs to draw a card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardPresentation {
    /// Current pose relative to the rest position.
    pub pose: Pose,
    /// Laid-out card size.
    pub size: Size,
    /// False once the exit animation has finished and the card left its visual parent.
    pub attached: bool,
}

impl CardPresentation {
    /// Center-relative transform of the card.
    pub fn transform(&self) -> Affine {
        self.pose.transform()
    }

    /// The card transform expressed around `center`, for hosts working in parent coordinates.
    pub fn transform_about(&self, center: Point) -> Affine {
        let c = center.to_vec2();
        Affine::translate(c) * self.pose.transform() * Affine::translate(-c)
    }
}

/// Drives a single card from gestures and commands.
///
/// `I` is the icon type handed out by the data source; it is resolved once at construction.
pub struct CardController<I> {
    state: SlideState,
    presentation: CardPresentation,
    animation: Option<Animation>,
    config: SwipeConfig,
    like_icon: I,
    dislike_icon: I,
    detail_icon: Option<I>,
}

impl<I> core::fmt::Debug for CardController<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CardController")
            .field("state", &self.state)
            .field("presentation", &self.presentation)
            .field("animating", &self.animation.is_some())
            .finish_non_exhaustive()
    }
}

impl<I> CardController<I> {
    /// Create an idle, attached card at rest.
    pub fn new(like_icon: I, dislike_icon: I, size: Size, config: SwipeConfig) -> Self {
        Self {
            state: SlideState::Idle,
            presentation: CardPresentation {
                pose: Pose::REST,
                size,
                attached: true,
            },
            animation: None,
            config,
            like_icon,
            dislike_icon,
            detail_icon: None,
        }
    }

    /// Give the card a detail button showing `icon`.
    #[must_use]
    pub fn with_detail_icon(mut self, icon: I) -> Self {
        self.detail_icon = Some(icon);
        self
    }

    /// Current interaction state.
    pub fn state(&self) -> SlideState {
        self.state
    }

    /// Current presentation.
    pub fn presentation(&self) -> &CardPresentation {
        &self.presentation
    }

    /// Icon shown while sliding towards like.
    pub fn like_icon(&self) -> &I {
        &self.like_icon
    }

    /// Icon shown while sliding towards dislike.
    pub fn dislike_icon(&self) -> &I {
        &self.dislike_icon
    }

    /// Icon of the detail button, if the card has one.
    pub fn detail_icon(&self) -> Option<&I> {
        self.detail_icon.as_ref()
    }

    /// True while a spring-back or exit animation is running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Update the laid-out size used to scale icon opacity.
    pub fn set_size(&mut self, size: Size) {
        self.presentation.size = size;
    }

    /// Start following the pointer.
    ///
    /// Cuts a running spring-back short, snapping to rest. Calling it while already dragging
    /// keeps the current drag.
    pub fn begin_drag(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SlideState::Committing(direction) => Err(TransitionError::Committed(direction)),
            SlideState::Dragging(_) => Ok(()),
            SlideState::Idle | SlideState::Cancelling => {
                self.stop_animation();
                self.state = SlideState::Dragging(Vec2::ZERO);
                Ok(())
            }
        }
    }

    /// Follow the pointer to `drag`, the cumulative offset since [`begin_drag`](Self::begin_drag).
    ///
    /// Only the icon for the current direction is updated; the other keeps its opacity.
    pub fn update_drag(&mut self, drag: Vec2) -> Result<CardEvent, TransitionError> {
        self.expect_dragging()?;
        self.state = SlideState::Dragging(drag);
        let pose = &mut self.presentation.pose;
        pose.offset = drag;
        pose.rotation = drag_rotation(drag);
        if let Decision::Sliding {
            direction,
            magnitude,
        } = classify_moving(drag, self.presentation.size.width)
        {
            pose.set_opacity(direction, magnitude);
        }
        log::trace!("card sliding to ({:.1}, {:.1})", drag.x, drag.y);
        Ok(CardEvent::Sliding(drag))
    }

    /// Release the pointer at `drag` and decide between commit and cancel.
    pub fn end_drag(&mut self, drag: Vec2) -> Result<CardEvent, TransitionError> {
        self.expect_dragging()?;
        self.state = SlideState::Dragging(drag);
        match classify_release(drag, self.config.distance_threshold) {
            Decision::CommitLike => self.commit(Direction::Like),
            Decision::CommitDislike => self.commit(Direction::Dislike),
            _ => Ok(self.spring_back()),
        }
    }

    /// Abandon a drag and spring back to rest.
    ///
    /// Returns `None` when there is nothing to cancel (idle, already springing back, or
    /// committing).
    pub fn cancel(&mut self) -> Option<CardEvent> {
        match self.state {
            SlideState::Dragging(_) => Some(self.spring_back()),
            SlideState::Idle | SlideState::Cancelling | SlideState::Committing(_) => None,
        }
    }

    /// Commit a like. See [`commit`](Self::commit).
    pub fn like(&mut self) -> Result<CardEvent, TransitionError> {
        self.commit(Direction::Like)
    }

    /// Commit a dislike. See [`commit`](Self::commit).
    pub fn dislike(&mut self) -> Result<CardEvent, TransitionError> {
        self.commit(Direction::Dislike)
    }

    /// Commit the card towards `direction`.
    ///
    /// Returns [`CardEvent::WillCommit`] immediately, shows the direction's icon at full
    /// opacity and starts the exit animation. Irreversible.
    pub fn commit(&mut self, direction: Direction) -> Result<CardEvent, TransitionError> {
        if let SlideState::Committing(previous) = self.state {
            return Err(TransitionError::Committed(previous));
        }
        self.state = SlideState::Committing(direction);
        self.presentation.pose.set_opacity(direction, 1.0);
        // Replaces a running spring-back; the exit starts from wherever the card is now.
        self.animation = Some(Animation::exit(
            self.presentation.pose,
            direction,
            &self.config,
        ));
        Ok(CardEvent::WillCommit(direction))
    }

    /// Advance the running animation by `dt`.
    ///
    /// Returns [`CardEvent::Committed`] when the exit animation finishes. A finished
    /// spring-back returns the card to [`SlideState::Idle`] without an event.
    pub fn advance(&mut self, dt: Duration) -> Option<CardEvent> {
        let animation = self.animation.as_mut()?;
        let (pose, done) = animation.advance(dt);
        self.presentation.pose = pose;
        if !done {
            return None;
        }
        let kind = animation.kind();
        self.animation = None;
        match kind {
            AnimationKind::SpringBack => {
                if self.state == SlideState::Cancelling {
                    self.state = SlideState::Idle;
                }
                None
            }
            AnimationKind::Exit(direction) => {
                self.presentation.attached = false;
                log::trace!("card exit animation finished ({direction:?})");
                Some(CardEvent::Committed(direction))
            }
        }
    }

    fn expect_dragging(&self) -> Result<(), TransitionError> {
        match self.state {
            SlideState::Dragging(_) => Ok(()),
            SlideState::Committing(direction) => Err(TransitionError::Committed(direction)),
            SlideState::Idle | SlideState::Cancelling => Err(TransitionError::NotDragging),
        }
    }

    fn spring_back(&mut self) -> CardEvent {
        self.state = SlideState::Cancelling;
        self.animation = Some(Animation::spring_back(self.presentation.pose, &self.config));
        CardEvent::Cancelled
    }

    /// Drop a running animation, jumping to its final pose. Exit animations are never stopped.
    fn stop_animation(&mut self) {
        if let Some(animation) = self.animation.take_if(|a| a.kind() == AnimationKind::SpringBack)
        {
            self.presentation.pose = animation.target();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    const FRAME: Duration = Duration::from_millis(16);

    fn card() -> CardController<&'static str> {
        CardController::new("like", "dislike", Size::new(300.0, 450.0), SwipeConfig::default())
    }

    fn run_to_end(card: &mut CardController<&'static str>) -> Vec<CardEvent> {
        let mut out = Vec::new();
        for _ in 0..200 {
            if let Some(ev) = card.advance(FRAME) {
                out.push(ev);
            }
        }
        out
    }

    #[test]
    fn detail_icon_is_optional() {
        assert_eq!(card().detail_icon(), None);
        let c = card().with_detail_icon("info");
        assert_eq!(c.detail_icon(), Some(&"info"));
        assert_eq!(c.like_icon(), &"like");
    }

    #[test]
    fn drag_updates_transform_and_icon() {
        let mut c = card();
        c.begin_drag().unwrap();
        let ev = c.update_drag(Vec2::new(50.0, 8.0)).unwrap();
        assert_eq!(ev, CardEvent::Sliding(Vec2::new(50.0, 8.0)));
        assert_eq!(c.state(), SlideState::Dragging(Vec2::new(50.0, 8.0)));
        let pose = c.presentation().pose;
        assert_eq!(pose.offset, Vec2::new(50.0, 8.0));
        assert_eq!(pose.rotation, drag_rotation(Vec2::new(50.0, 8.0)));
        assert!((pose.like_opacity - 0.5).abs() < 1e-12);
        assert_eq!(pose.dislike_opacity, 0.0);

        // Reversing direction leaves the like icon where it was.
        c.update_drag(Vec2::new(-25.0, 0.0)).unwrap();
        let pose = c.presentation().pose;
        assert!((pose.like_opacity - 0.5).abs() < 1e-12);
        assert!((pose.dislike_opacity - 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_offset_drag_touches_dislike_icon() {
        let mut c = card();
        c.begin_drag().unwrap();
        c.update_drag(Vec2::new(90.0, 0.0)).unwrap();
        c.update_drag(Vec2::new(0.0, 30.0)).unwrap();
        let pose = c.presentation().pose;
        assert!((pose.like_opacity - 0.9).abs() < 1e-12);
        assert_eq!(pose.dislike_opacity, 0.0);
    }

    #[test]
    fn release_within_threshold_cancels_immediately() {
        let mut c = card();
        c.begin_drag().unwrap();
        c.update_drag(Vec2::new(-50.0, 5.0)).unwrap();
        let ev = c.end_drag(Vec2::new(-50.0, 5.0)).unwrap();
        assert_eq!(ev, CardEvent::Cancelled);
        assert_eq!(c.state(), SlideState::Cancelling);
        assert!(c.is_animating());

        assert!(run_to_end(&mut c).is_empty(), "spring-back completes silently");
        assert_eq!(c.state(), SlideState::Idle);
        assert_eq!(c.presentation().pose, Pose::REST);
        assert!(c.presentation().attached);
    }

    #[test]
    fn release_past_threshold_commits() {
        let mut c = card();
        c.begin_drag().unwrap();
        c.update_drag(Vec2::new(150.0, 10.0)).unwrap();
        let ev = c.end_drag(Vec2::new(150.0, 10.0)).unwrap();
        assert_eq!(ev, CardEvent::WillCommit(Direction::Like));
        assert_eq!(c.state(), SlideState::Committing(Direction::Like));
        assert_eq!(c.presentation().pose.like_opacity, 1.0);
        assert!(c.presentation().attached, "still visible during the exit");

        assert_eq!(run_to_end(&mut c), vec![CardEvent::Committed(Direction::Like)]);
        assert!(!c.presentation().attached);
        assert_eq!(c.presentation().pose.offset.x, 700.0);
        assert_eq!(c.presentation().pose.offset.y, 10.0);
    }

    #[test]
    fn programmatic_dislike_from_idle() {
        let mut c = card();
        assert_eq!(c.dislike().unwrap(), CardEvent::WillCommit(Direction::Dislike));
        assert_eq!(c.presentation().pose.dislike_opacity, 1.0);
        assert_eq!(c.like(), Err(TransitionError::Committed(Direction::Dislike)));
        assert_eq!(c.begin_drag(), Err(TransitionError::Committed(Direction::Dislike)));
        assert_eq!(
            c.update_drag(Vec2::new(1.0, 1.0)),
            Err(TransitionError::Committed(Direction::Dislike))
        );
        assert_eq!(c.cancel(), None);
        assert_eq!(run_to_end(&mut c), vec![CardEvent::Committed(Direction::Dislike)]);
        assert_eq!(c.presentation().pose.offset.x, -700.0);
    }

    #[test]
    fn gestures_out_of_order_are_rejected() {
        let mut c = card();
        assert_eq!(
            c.update_drag(Vec2::new(3.0, 0.0)),
            Err(TransitionError::NotDragging)
        );
        assert_eq!(c.end_drag(Vec2::new(300.0, 0.0)), Err(TransitionError::NotDragging));
        assert_eq!(c.state(), SlideState::Idle);
        assert_eq!(c.presentation().pose, Pose::REST);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut c = card();
        assert_eq!(c.cancel(), None);
        assert_eq!(c.cancel(), None);
        assert_eq!(c.state(), SlideState::Idle);
        assert!(!c.is_animating());

        c.begin_drag().unwrap();
        c.update_drag(Vec2::new(40.0, 0.0)).unwrap();
        assert_eq!(c.cancel(), Some(CardEvent::Cancelled));
        assert_eq!(c.cancel(), None);
        assert_eq!(c.state(), SlideState::Cancelling);
    }

    #[test]
    fn begin_drag_cuts_spring_back() {
        let mut c = card();
        c.begin_drag().unwrap();
        c.update_drag(Vec2::new(80.0, 20.0)).unwrap();
        c.end_drag(Vec2::new(80.0, 20.0)).unwrap();
        c.advance(FRAME);
        assert!(c.is_animating());

        c.begin_drag().unwrap();
        assert!(!c.is_animating());
        assert_eq!(c.state(), SlideState::Dragging(Vec2::ZERO));
        assert_eq!(c.presentation().pose, Pose::REST);
        // Idempotent while dragging.
        c.update_drag(Vec2::new(10.0, 0.0)).unwrap();
        c.begin_drag().unwrap();
        assert_eq!(c.state(), SlideState::Dragging(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn like_during_spring_back_commits_from_current_pose() {
        let mut c = card();
        c.begin_drag().unwrap();
        c.update_drag(Vec2::new(60.0, 0.0)).unwrap();
        c.end_drag(Vec2::new(60.0, 0.0)).unwrap();
        assert_eq!(c.like().unwrap(), CardEvent::WillCommit(Direction::Like));
        assert_eq!(run_to_end(&mut c), vec![CardEvent::Committed(Direction::Like)]);
    }

    #[test]
    fn transform_about_center_keeps_center_for_pure_rotation() {
        let p = CardPresentation {
            pose: Pose {
                rotation: 0.3,
                ..Pose::REST
            },
            size: Size::new(100.0, 100.0),
            attached: true,
        };
        let center = Point::new(50.0, 50.0);
        let moved = p.transform_about(center) * center;
        assert!((moved - center).hypot() < 1e-9);
        assert_eq!(CardPresentation { pose: Pose::REST, ..p }.transform(), Affine::IDENTITY);
    }
}
