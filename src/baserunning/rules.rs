//! Per-outcome baserunning rules.
//!
//! One handler per [`Outcome`]. Handlers read the pre-play state, never
//! modify it, and build the post-play state from scratch. Outs may reach three
//! here; the inning boundary is resolved afterwards.

use crate::baserunning::state::slot;
use crate::baserunning::{
    AdvancementRecorder, Base, BaserunningState, Destination, OUTS_PER_HALF_INNING, Origin,
    Outcome,
};
use crate::player::PlayerId;

/// What a handler produced, before the movement log is attached.
#[derive(Debug)]
pub(crate) struct Handled {
    pub(crate) state: BaserunningState,
    pub(crate) scorers: Vec<PlayerId>,
    pub(crate) out_runner: Option<PlayerId>,
    pub(crate) outs_on_play: u8,
    pub(crate) reached_on_error: bool,
}

/// Signature shared by every rule handler.
pub(crate) type Handler = fn(&BaserunningState, &PlayerId, &mut AdvancementRecorder) -> Handled;

/// Route an outcome to its handler.
///
/// The match is exhaustive: a new [`Outcome`] variant does not compile until
/// it is given a rule here.
pub(crate) fn handler_for(outcome: Outcome) -> Handler {
    match outcome {
        Outcome::Single => single,
        Outcome::Double => double,
        Outcome::Triple => triple,
        Outcome::HomeRun => home_run,
        Outcome::Walk => walk,
        Outcome::IntentionalWalk => intentional_walk,
        Outcome::HitByPitch => hit_by_pitch,
        Outcome::Strikeout => strikeout,
        Outcome::GroundOut => ground_out,
        Outcome::FlyOut => fly_out,
        Outcome::LineOut => line_out,
        Outcome::PopOut => pop_out,
        Outcome::SacrificeFly => sacrifice_fly,
        Outcome::SacrificeBunt => sacrifice_bunt,
        Outcome::FieldersChoice => fielders_choice,
        Outcome::ReachedOnError => reached_on_error,
        Outcome::CatcherInterference => catcher_interference,
    }
}

/// Working copy of the bases for one play.
struct Play<'r> {
    outs: u8,
    outs_on_play: u8,
    slots: [Option<PlayerId>; 3],
    scorers: Vec<PlayerId>,
    out_runner: Option<PlayerId>,
    reached_on_error: bool,
    recorder: &'r mut AdvancementRecorder,
}

impl<'r> Play<'r> {
    fn begin(before: &BaserunningState, recorder: &'r mut AdvancementRecorder) -> Self {
        Self {
            outs: before.outs(),
            outs_on_play: 0,
            slots: before.slots(),
            scorers: Vec::new(),
            out_runner: None,
            reached_on_error: false,
            recorder,
        }
    }

    fn occupied(&self, base: Base) -> bool {
        self.slots[slot(base)].is_some()
    }

    fn record_out(&mut self) {
        self.outs = (self.outs + 1).min(OUTS_PER_HALF_INNING);
        self.outs_on_play += 1;
    }

    /// Move the runner on `from`, if any, to the empty base `to`.
    fn advance(&mut self, from: Base, to: Base) {
        if let Some(runner) = self.slots[slot(from)].take() {
            debug_assert!(!self.occupied(to), "{to} is occupied");
            self.recorder.record(runner.clone(), from.into(), to.into());
            self.slots[slot(to)] = Some(runner);
        }
    }

    /// Send the runner on `from`, if any, home.
    fn score(&mut self, from: Base) {
        if let Some(runner) = self.slots[slot(from)].take() {
            self.recorder.record(runner.clone(), from.into(), Destination::Home);
            self.scorers.push(runner);
        }
    }

    /// Every runner on base scores, lead runner first.
    fn clear_bases(&mut self) {
        self.score(Base::Third);
        self.score(Base::Second);
        self.score(Base::First);
    }

    /// Retire the runner on `from`.
    fn retire_runner(&mut self, from: Base) {
        if let Some(runner) = self.slots[slot(from)].take() {
            self.recorder.record(runner.clone(), from.into(), Destination::Dugout);
            self.out_runner = Some(runner);
            self.record_out();
        }
    }

    fn batter_to(&mut self, batter: &PlayerId, base: Base) {
        debug_assert!(!self.occupied(base), "{base} is occupied");
        self.recorder.record(batter.clone(), Origin::Bench, base.into());
        self.slots[slot(base)] = Some(batter.clone());
    }

    fn batter_scores(&mut self, batter: &PlayerId) {
        self.recorder.record(batter.clone(), Origin::Bench, Destination::Home);
        self.scorers.push(batter.clone());
    }

    fn batter_out(&mut self, batter: &PlayerId) {
        self.recorder.record(batter.clone(), Origin::Bench, Destination::Dugout);
        self.record_out();
    }

    /// Batter awarded first; runners move only when forced.
    fn award_first(&mut self, batter: &PlayerId) {
        if self.occupied(Base::First) {
            if self.occupied(Base::Second) {
                if self.occupied(Base::Third) {
                    self.score(Base::Third);
                }
                self.advance(Base::Second, Base::Third);
            }
            self.advance(Base::First, Base::Second);
        }
        self.batter_to(batter, Base::First);
    }

    /// Every runner moves up one base, lead runner first.
    fn advance_all_one_base(&mut self) {
        self.score(Base::Third);
        self.advance(Base::Second, Base::Third);
        self.advance(Base::First, Base::Second);
    }

    fn finish(self) -> Handled {
        Handled {
            state: BaserunningState::from_slots(self.outs, self.slots),
            scorers: self.scorers,
            out_runner: self.out_runner,
            outs_on_play: self.outs_on_play,
            reached_on_error: self.reached_on_error,
        }
    }
}

fn single(before: &BaserunningState, batter: &PlayerId, rec: &mut AdvancementRecorder) -> Handled {
    let mut play = Play::begin(before, rec);
    play.advance_all_one_base();
    play.batter_to(batter, Base::First);
    play.finish()
}

fn double(before: &BaserunningState, batter: &PlayerId, rec: &mut AdvancementRecorder) -> Handled {
    let mut play = Play::begin(before, rec);
    play.clear_bases();
    play.batter_to(batter, Base::Second);
    play.finish()
}

fn triple(before: &BaserunningState, batter: &PlayerId, rec: &mut AdvancementRecorder) -> Handled {
    let mut play = Play::begin(before, rec);
    play.clear_bases();
    play.batter_to(batter, Base::Third);
    play.finish()
}

fn home_run(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.clear_bases();
    play.batter_scores(batter);
    play.finish()
}

fn walk(before: &BaserunningState, batter: &PlayerId, rec: &mut AdvancementRecorder) -> Handled {
    let mut play = Play::begin(before, rec);
    play.award_first(batter);
    play.finish()
}

fn intentional_walk(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.award_first(batter);
    play.finish()
}

fn hit_by_pitch(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.award_first(batter);
    play.finish()
}

fn strikeout(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.batter_out(batter);
    play.finish()
}

/// Runner on third scores only with an out already recorded; the others move
/// up into whatever base opens ahead of them.
fn ground_out(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.batter_out(batter);
    if before.outs() >= 1 {
        play.score(Base::Third);
    }
    if !play.occupied(Base::Third) {
        play.advance(Base::Second, Base::Third);
    }
    if !play.occupied(Base::Second) {
        play.advance(Base::First, Base::Second);
    }
    play.finish()
}

fn fly_out(before: &BaserunningState, batter: &PlayerId, rec: &mut AdvancementRecorder) -> Handled {
    let mut play = Play::begin(before, rec);
    play.batter_out(batter);
    play.finish()
}

fn line_out(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.batter_out(batter);
    play.finish()
}

fn pop_out(before: &BaserunningState, batter: &PlayerId, rec: &mut AdvancementRecorder) -> Handled {
    let mut play = Play::begin(before, rec);
    play.batter_out(batter);
    play.finish()
}

fn sacrifice_fly(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.batter_out(batter);
    play.score(Base::Third);
    play.finish()
}

fn sacrifice_bunt(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.batter_out(batter);
    play.advance_all_one_base();
    play.finish()
}

/// The lead runner of the force chain starting at first is retired. Without
/// a runner on first nobody is forced and the play moves runners like a single.
fn fielders_choice(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    if play.occupied(Base::First) {
        let lead = match (play.occupied(Base::Second), play.occupied(Base::Third)) {
            (false, _) => Base::First,
            (true, false) => Base::Second,
            (true, true) => Base::Third,
        };
        play.retire_runner(lead);
        if lead == Base::Third {
            play.advance(Base::Second, Base::Third);
        }
        if lead != Base::First {
            play.advance(Base::First, Base::Second);
        }
    } else {
        play.advance_all_one_base();
    }
    play.batter_to(batter, Base::First);
    play.finish()
}

fn reached_on_error(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.advance_all_one_base();
    play.batter_to(batter, Base::First);
    play.reached_on_error = true;
    play.finish()
}

fn catcher_interference(
    before: &BaserunningState,
    batter: &PlayerId,
    rec: &mut AdvancementRecorder,
) -> Handled {
    let mut play = Play::begin(before, rec);
    play.award_first(batter);
    play.finish()
}
